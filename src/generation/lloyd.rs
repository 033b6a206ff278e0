//! Lloyd's Relaxation for uniform site distribution
//!
//! Moves each site to the centroid of its cell and repartitions, evening out
//! the clustered, elongated cells that raw uniform sampling produces.

use glam::Vec2;
use std::time::Instant;

use super::partition::partition;
use crate::error::Result;
use crate::geometry::{polygon_centroid, Rect};

/// Options for Lloyd's relaxation algorithm
#[derive(Debug, Clone, Copy)]
pub struct LloydOptions {
    /// Number of relaxation passes to run (at least one always runs)
    pub max_iterations: usize,
    /// Stop once the largest displacement in a pass falls below this
    /// fraction of the shorter bounds side. 0.0 disables early termination.
    pub convergence_threshold: f32,
}

impl Default for LloydOptions {
    fn default() -> Self {
        Self {
            max_iterations: 1,
            convergence_threshold: 0.0,
        }
    }
}

/// Apply a fixed number of relaxation passes
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use voronoi_island_map::Rect;
/// use voronoi_island_map::generation::{generate_sites, lloyd_relaxation};
///
/// let bounds = Rect::from_size(100.0, 100.0);
/// let sites = generate_sites(200, bounds, &mut ChaCha8Rng::seed_from_u64(1));
/// let relaxed = lloyd_relaxation(sites, bounds, 1).unwrap();
/// assert_eq!(relaxed.len(), 200);
/// ```
pub fn lloyd_relaxation(sites: Vec<Vec2>, bounds: Rect, iterations: usize) -> Result<Vec<Vec2>> {
    let options = LloydOptions {
        max_iterations: iterations,
        ..Default::default()
    };
    lloyd_relaxation_with_options(sites, bounds, options)
}

/// Apply relaxation with custom options
///
/// Each pass partitions the current sites and replaces every site with its
/// cell's centroid. The first pass runs even if `max_iterations` is 0.
pub fn lloyd_relaxation_with_options(
    mut sites: Vec<Vec2>,
    bounds: Rect,
    options: LloydOptions,
) -> Result<Vec<Vec2>> {
    let convergence_threshold = options.convergence_threshold * bounds.width().min(bounds.height());
    let max_iterations = options.max_iterations.max(1);
    let total_start = Instant::now();

    log::debug!(
        "[Lloyd] Starting: {} sites, max {} iterations, threshold {:.4} (abs: {:.4})",
        sites.len(),
        max_iterations,
        options.convergence_threshold,
        convergence_threshold
    );

    let mut iterations_run = 0;
    for iteration in 0..max_iterations {
        let iter_start = Instant::now();
        let cells = partition(&sites, bounds)?;

        let (new_sites, max_displacement) = move_to_centroids(&sites, &cells.polygons, bounds);
        sites = new_sites;
        iterations_run = iteration + 1;

        log::debug!(
            "[Lloyd] Iter {}: total={:?}, max_disp={:.4}",
            iteration + 1,
            iter_start.elapsed(),
            max_displacement
        );

        if convergence_threshold > 0.0 && max_displacement < convergence_threshold {
            log::debug!(
                "[Lloyd] Converged at iteration {} (max_disp {:.4} < threshold {:.4})",
                iteration + 1,
                max_displacement,
                convergence_threshold
            );
            break;
        }
    }

    log::debug!(
        "[Lloyd] Finished: {} iterations (of max {}), total={:?}",
        iterations_run,
        max_iterations,
        total_start.elapsed()
    );

    Ok(sites)
}

/// Compute centroid positions and the largest displacement
fn move_to_centroids(sites: &[Vec2], polygons: &[Vec<Vec2>], bounds: Rect) -> (Vec<Vec2>, f32) {
    let mut max_displacement: f32 = 0.0;

    let new_sites = sites
        .iter()
        .zip(polygons)
        .map(|(&old, polygon)| {
            let centroid = polygon_centroid(polygon)
                .unwrap_or(old)
                .clamp(bounds.min, bounds.max);
            max_displacement = max_displacement.max(centroid.distance(old));
            centroid
        })
        .collect();

    (new_sites, max_displacement)
}
