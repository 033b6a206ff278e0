//! Spatial indexing for fast position-to-cell lookups
//!
//! With the `spatial-index` feature the lookup is backed by a KD-tree;
//! without it a linear scan over the sites gives the same answers.

use glam::Vec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Nearest-site lookup over cell sites
///
/// The cell whose site is nearest to a point is the cell containing it, so
/// this doubles as point location on the partition.
///
/// # Performance
///
/// - Construction: O(n log n) with the KD-tree
/// - Query: O(log n) with the KD-tree, O(n) otherwise
#[derive(Clone)]
pub struct SpatialIndex {
    #[cfg(feature = "spatial-index")]
    tree: Option<ImmutableKdTree<f32, usize, 2, 32>>,
    #[cfg(not(feature = "spatial-index"))]
    sites: Vec<Vec2>,
    len: usize,
}

impl SpatialIndex {
    /// Build the index from cell sites
    ///
    /// # Example
    ///
    /// ```
    /// use voronoi_island_map::SpatialIndex;
    /// use glam::Vec2;
    ///
    /// let sites = vec![
    ///     Vec2::new(1.0, 1.0),
    ///     Vec2::new(9.0, 1.0),
    ///     Vec2::new(5.0, 8.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&sites);
    /// assert_eq!(index.find_nearest(Vec2::new(8.0, 2.0)), Some(1));
    /// ```
    pub fn new(sites: &[Vec2]) -> Self {
        #[cfg(feature = "spatial-index")]
        {
            let points: Vec<[f32; 2]> = sites.iter().map(|s| [s.x, s.y]).collect();
            let tree = if points.is_empty() {
                None
            } else {
                Some(ImmutableKdTree::new_from_slice(&points))
            };
            Self {
                tree,
                len: sites.len(),
            }
        }

        #[cfg(not(feature = "spatial-index"))]
        {
            Self {
                sites: sites.to_vec(),
                len: sites.len(),
            }
        }
    }

    /// Number of indexed sites
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the site nearest to `position`, or `None` if the index is empty
    pub fn find_nearest(&self, position: Vec2) -> Option<usize> {
        #[cfg(feature = "spatial-index")]
        {
            let query = [position.x, position.y];
            self.tree
                .as_ref()
                .map(|tree| tree.nearest_one::<SquaredEuclidean>(&query).item as usize)
        }

        #[cfg(not(feature = "spatial-index"))]
        {
            self.sites
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    a.distance_squared(position)
                        .total_cmp(&b.distance_squared(position))
                })
                .map(|(i, _)| i)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let sites = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let index = SpatialIndex::new(&sites);

        assert_eq!(index.find_nearest(Vec2::new(1.0, 2.0)), Some(0));
        assert_eq!(index.find_nearest(Vec2::new(9.0, 0.5)), Some(1));
        assert_eq!(index.find_nearest(Vec2::new(7.0, 8.0)), Some(2));
        assert_eq!(index.find_nearest(Vec2::new(-3.0, 12.0)), Some(3));
    }

    #[test]
    fn test_spatial_index_exact_match() {
        let sites = vec![Vec2::new(3.0, 4.0), Vec2::new(5.0, 1.0)];
        let index = SpatialIndex::new(&sites);

        assert_eq!(index.find_nearest(sites[0]), Some(0));
        assert_eq!(index.find_nearest(sites[1]), Some(1));
    }

    #[test]
    fn test_empty_index() {
        let index = SpatialIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.find_nearest(Vec2::ZERO), None);
    }
}
