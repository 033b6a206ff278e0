//! Landmass growth by altitude diffusion
//!
//! A landmass is raised by a breadth-first pass over the neighbor graph that
//! starts at a seed cell and hands each newly reached cell a decayed share of
//! altitude. Two falloff modes shape the result: mainland passes decay from
//! the altitude of the cell being expanded, which together with jitter gives
//! ridged, irregular coasts; island passes decay a running value once per
//! expanded cell, which gives small, roughly round islands.

use rand::Rng;
use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

/// Expansion stops once the decayed altitude is no longer above this
pub const SPREAD_FLOOR: f32 = 0.01;

/// Upper end of the jitter multiplier range
const JITTER_CEILING: f32 = 1.1;

/// How the spread altitude decays as the pass moves outward
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Falloff {
    /// `altitude_of_expanded_cell * decay`
    Relative,
    /// `running_value * decay`, decayed once per expanded cell
    Radial,
}

/// Parameters of one diffusion pass
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmassProfile {
    /// Altitude added to the seed cell, in (0, 1]
    pub initial_altitude: f32,
    /// Per-step decay factor, in (0, 1)
    pub decay: f32,
    /// Jitter width, in [0, 1); 0 disables jitter
    pub sharpness: f32,
    /// Decay mode
    pub falloff: Falloff,
}

impl LandmassProfile {
    /// The mainland profile: tall, slowly decaying, jittered
    pub const fn mainland() -> Self {
        Self {
            initial_altitude: 0.9,
            decay: 0.9,
            sharpness: 0.2,
            falloff: Falloff::Relative,
        }
    }

    /// An island profile with a random initial altitude in [0.1, 0.5)
    pub fn island<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::island_with_altitude(rng.gen_range(0.1..0.5))
    }

    /// An island profile with a fixed initial altitude
    pub const fn island_with_altitude(initial_altitude: f32) -> Self {
        Self {
            initial_altitude,
            decay: 0.99,
            sharpness: 0.0,
            falloff: Falloff::Radial,
        }
    }

    /// Check that every parameter lies in its domain
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_altitude > 0.0 && self.initial_altitude <= 1.0) {
            return Err(MapError::InvalidInput(format!(
                "initial_altitude must be in (0, 1] (got {})",
                self.initial_altitude
            )));
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(MapError::InvalidInput(format!(
                "decay must be in (0, 1) (got {})",
                self.decay
            )));
        }
        if !(self.sharpness >= 0.0 && self.sharpness < 1.0) {
            return Err(MapError::InvalidInput(format!(
                "sharpness must be in [0, 1) (got {})",
                self.sharpness
            )));
        }
        Ok(())
    }

    /// Multiplier applied to one neighbor's share
    fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.sharpness == 0.0 {
            1.0
        } else {
            rng.gen_range((JITTER_CEILING - self.sharpness)..JITTER_CEILING)
        }
    }
}

/// Summary of one diffusion pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffusionStats {
    /// Cell the pass started from
    pub seed_cell: usize,
    /// Cells that received altitude, the seed included
    pub visited: usize,
    /// Largest queue length reached
    pub max_queue_len: usize,
}

/// Run one diffusion pass from `seed_cell`
///
/// Altitudes accumulate on top of earlier passes and are clamped at 1. The
/// visited set is local to the call, so consecutive passes never see each
/// other's traversal state.
///
/// # Errors
///
/// `InvalidInput` if the profile is out of domain or `seed_cell` is not a cell.
pub fn diffuse<R: Rng + ?Sized>(
    neighbors: &[Vec<usize>],
    altitudes: &mut [f32],
    seed_cell: usize,
    profile: &LandmassProfile,
    rng: &mut R,
) -> Result<DiffusionStats> {
    profile.validate()?;
    if seed_cell >= altitudes.len() || altitudes.len() != neighbors.len() {
        return Err(MapError::InvalidInput(format!(
            "seed cell {} outside a graph of {} cells",
            seed_cell,
            altitudes.len()
        )));
    }

    let mut visited = vec![false; altitudes.len()];
    let mut queue = VecDeque::new();

    raise(&mut altitudes[seed_cell], profile.initial_altitude);
    visited[seed_cell] = true;
    queue.push_back(seed_cell);

    let mut stats = DiffusionStats {
        seed_cell,
        visited: 1,
        max_queue_len: 1,
    };

    // The guard reads the value computed for the previously expanded cell
    let mut spread = profile.initial_altitude;
    while spread > SPREAD_FLOOR {
        let Some(cell) = queue.pop_front() else {
            break;
        };

        spread = match profile.falloff {
            Falloff::Relative => altitudes[cell] * profile.decay,
            Falloff::Radial => spread * profile.decay,
        };

        for &neighbor in &neighbors[cell] {
            if visited[neighbor] {
                continue;
            }
            let share = spread * profile.jitter(rng);
            raise(&mut altitudes[neighbor], share);
            visited[neighbor] = true;
            queue.push_back(neighbor);
            stats.visited += 1;
        }
        stats.max_queue_len = stats.max_queue_len.max(queue.len());
    }

    Ok(stats)
}

#[inline]
fn raise(altitude: &mut f32, amount: f32) {
    *altitude = (*altitude + amount).min(1.0);
}
