//! Map Cell Structure
//!
//! Represents an individual cell of the island map with altitude, region,
//! neighbors, and geometry.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::polygon_area;
use crate::region::Region;

/// A single cell of the generated map
///
/// Each cell represents a convex region of the map with:
/// - A stable index for identification
/// - The (relaxed) site the cell was built around
/// - Its boundary polygon for rendering
/// - Altitude and region classification
/// - Neighbor connectivity by index
///
/// # Design Notes
///
/// Cells hold no references to each other. Neighbors are plain indices into
/// the cell array of the map that owns them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MapCell {
    /// Index of this cell (0 to cell_count-1)
    pub id: usize,

    /// Site of the cell after relaxation
    pub site: Vec2,

    /// Closed convex boundary polygon, counter-clockwise
    pub boundary: Vec<Vec2>,

    /// Accumulated altitude in [0, 1]
    pub altitude: f32,

    /// Region this cell was classified into
    pub region: Region,

    /// Indices of cells sharing an edge with this one
    pub neighbors: Vec<usize>,
}

impl MapCell {
    /// Create a new map cell
    ///
    /// This is typically called when a generation run finishes, not by user code.
    pub fn new(
        id: usize,
        site: Vec2,
        boundary: Vec<Vec2>,
        altitude: f32,
        region: Region,
        neighbors: Vec<usize>,
    ) -> Self {
        Self {
            id,
            site,
            boundary,
            altitude,
            region,
            neighbors,
        }
    }

    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if this cell is a neighbor of another cell
    #[inline]
    pub fn is_neighbor_of(&self, other_cell_id: usize) -> bool {
        self.neighbors.contains(&other_cell_id)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.boundary.len()
    }

    /// Check if the cell was classified as land
    #[inline]
    pub fn is_land(&self) -> bool {
        self.region.is_land()
    }

    /// Check if the cell was classified as ocean or lake
    #[inline]
    pub fn is_water(&self) -> bool {
        self.region.is_water()
    }

    /// Area enclosed by the boundary polygon
    pub fn area(&self) -> f32 {
        polygon_area(&self.boundary).abs()
    }
}
