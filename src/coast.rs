//! Coastline extraction

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generation::Edge;
use crate::region::Region;

/// A partition edge separating a land cell from a water cell
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoastSegment {
    pub start: Vec2,
    pub end: Vec2,
    /// Region of the water cell (ocean or which lake)
    pub water: Region,
    /// Region of the land cell (mainland or which island)
    pub land: Region,
    pub land_cell: usize,
    pub water_cell: usize,
}

/// Collect coast segments for every land cell
///
/// Land cells are visited in ascending index, their edges in polygon order.
/// A shared edge between a land and a water cell yields one segment from the
/// land side; edges are not merged or de-duplicated.
pub fn extract_coast(
    altitudes: &[f32],
    regions: &[Region],
    edges: &[Edge],
    cell_edges: &[Vec<usize>],
    land_threshold: f32,
) -> Vec<CoastSegment> {
    let mut coastline = Vec::new();

    for (cell, edge_ids) in cell_edges.iter().enumerate() {
        if altitudes[cell] < land_threshold {
            continue;
        }
        for &e in edge_ids {
            let edge = &edges[e];
            let Some(other) = edge.other_side(cell) else {
                continue;
            };
            if altitudes[other] < land_threshold {
                coastline.push(CoastSegment {
                    start: edge.start,
                    end: edge.end,
                    water: regions[other],
                    land: regions[cell],
                    land_cell: cell,
                    water_cell: other,
                });
            }
        }
    }

    coastline
}
