//! Region classification
//!
//! Labels every cell as ocean, lake, mainland or island by flood-filling the
//! neighbor graph on either side of the land threshold.

use std::collections::VecDeque;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The region a cell belongs to
///
/// Lakes and islands are numbered in discovery order (ascending index of the
/// first cell found in each component), starting at 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Water connected to the map origin corner
    Ocean,
    /// Enclosed water body
    Lake(usize),
    /// Land connected to the first landmass seed
    Mainland,
    /// Any other land component
    Island(usize),
}

impl Region {
    /// Check if this region is water
    #[inline]
    pub fn is_water(&self) -> bool {
        matches!(self, Region::Ocean | Region::Lake(_))
    }

    /// Check if this region is land
    #[inline]
    pub fn is_land(&self) -> bool {
        !self.is_water()
    }

    /// Number distinguishing lakes or islands; `None` for ocean and mainland
    #[inline]
    pub fn label(&self) -> Option<usize> {
        match self {
            Region::Lake(n) | Region::Island(n) => Some(*n),
            Region::Ocean | Region::Mainland => None,
        }
    }

    /// Name of the region kind
    pub fn kind(&self) -> &'static str {
        match self {
            Region::Ocean => "ocean",
            Region::Lake(_) => "lake",
            Region::Mainland => "mainland",
            Region::Island(_) => "island",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(n) => write!(f, "{} {}", self.kind(), n),
            None => f.write_str(self.kind()),
        }
    }
}

/// Classify every cell
///
/// 1. Flood-fill ocean from `ocean_cell` through cells below `land_threshold`.
///    The start cell is ocean whatever its altitude.
/// 2. If given, flood-fill the land component of `mainland_cell` as mainland.
/// 3. Scan the remaining cells by ascending index; each unlabeled cell starts
///    a new island (at or above the threshold) or lake (below it) covering
///    its connected component on the same side of the threshold.
///
/// Cells without neighbors form components of their own.
///
/// # Panics
///
/// If `neighbors` and `altitudes` differ in length.
pub fn classify(
    neighbors: &[Vec<usize>],
    altitudes: &[f32],
    ocean_cell: usize,
    mainland_cell: Option<usize>,
    land_threshold: f32,
) -> Vec<Region> {
    assert_eq!(
        neighbors.len(),
        altitudes.len(),
        "neighbor graph and altitudes cover different cell counts"
    );
    let is_water = |alt: f32| alt < land_threshold;
    let is_land = |alt: f32| alt >= land_threshold;
    let mut regions: Vec<Option<Region>> = vec![None; altitudes.len()];

    if ocean_cell < regions.len() {
        flood_fill(neighbors, altitudes, &mut regions, ocean_cell, Region::Ocean, is_water);
    }

    if let Some(cell) = mainland_cell {
        if cell < regions.len() && regions[cell].is_none() && is_land(altitudes[cell]) {
            flood_fill(neighbors, altitudes, &mut regions, cell, Region::Mainland, is_land);
        }
    }

    let mut islands = 0;
    let mut lakes = 0;
    for cell in 0..regions.len() {
        if regions[cell].is_some() {
            continue;
        }
        if is_land(altitudes[cell]) {
            flood_fill(neighbors, altitudes, &mut regions, cell, Region::Island(islands), is_land);
            islands += 1;
        } else {
            flood_fill(neighbors, altitudes, &mut regions, cell, Region::Lake(lakes), is_water);
            lakes += 1;
        }
    }

    let regions: Vec<Region> = regions.into_iter().flatten().collect();
    debug_assert_eq!(regions.len(), altitudes.len());
    regions
}

/// Label `start` and every unlabeled cell reachable through cells matching `accept`
fn flood_fill(
    neighbors: &[Vec<usize>],
    altitudes: &[f32],
    regions: &mut [Option<Region>],
    start: usize,
    region: Region,
    accept: impl Fn(f32) -> bool,
) {
    let mut queue = VecDeque::new();
    regions[start] = Some(region);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for &neighbor in &neighbors[cell] {
            if regions[neighbor].is_none() && accept(altitudes[neighbor]) {
                regions[neighbor] = Some(region);
                queue.push_back(neighbor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Vec<Vec<usize>> {
        (0..n)
            .map(|i| {
                let mut list = Vec::new();
                if i > 0 {
                    list.push(i - 1);
                }
                if i + 1 < n {
                    list.push(i + 1);
                }
                list
            })
            .collect()
    }

    #[test]
    fn test_region_helpers() {
        assert!(Region::Ocean.is_water());
        assert!(Region::Lake(2).is_water());
        assert!(Region::Mainland.is_land());
        assert!(Region::Island(0).is_land());

        assert_eq!(Region::Ocean.label(), None);
        assert_eq!(Region::Lake(3).label(), Some(3));
        assert_eq!(Region::Island(1).to_string(), "island 1");
        assert_eq!(Region::Mainland.to_string(), "mainland");
    }

    #[test]
    fn test_path_components() {
        // ocean | land | lake | land | lake
        let altitudes = [0.0, 0.5, 0.1, 0.3, 0.0, 0.0, 0.9, 0.05];
        let regions = classify(&path(8), &altitudes, 0, Some(6), 0.2);

        assert_eq!(
            regions,
            vec![
                Region::Ocean,
                Region::Island(0),
                Region::Lake(0),
                Region::Island(1),
                Region::Lake(1),
                Region::Lake(1),
                Region::Mainland,
                Region::Lake(2),
            ]
        );
    }

    #[test]
    fn test_ocean_start_labeled_regardless_of_altitude() {
        let altitudes = [0.8, 0.0, 0.0];
        let regions = classify(&path(3), &altitudes, 0, None, 0.2);
        assert_eq!(regions, vec![Region::Ocean, Region::Ocean, Region::Ocean]);
    }

    #[test]
    fn test_isolated_cells_are_own_components() {
        let neighbors = vec![vec![], vec![], vec![], vec![]];
        let altitudes = [0.0, 0.5, 0.1, 0.6];
        let regions = classify(&neighbors, &altitudes, 0, Some(3), 0.2);

        assert_eq!(
            regions,
            vec![Region::Ocean, Region::Island(0), Region::Lake(0), Region::Mainland]
        );
    }

    #[test]
    #[should_panic(expected = "different cell counts")]
    fn test_mismatched_graph_panics() {
        classify(&path(2), &[0.0, 0.5, 0.0], 0, None, 0.2);
    }

    #[test]
    fn test_every_cell_classified() {
        let altitudes: Vec<f32> = (0..50).map(|i| ((i * 37) % 11) as f32 / 10.0).collect();
        let regions = classify(&path(50), &altitudes, 0, None, 0.2);
        assert_eq!(regions.len(), 50);

        for (region, &alt) in regions.iter().zip(&altitudes).skip(1) {
            assert_eq!(region.is_land(), alt >= 0.2);
        }
    }
}
