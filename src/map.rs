//! IslandMap main structure and the generation pipeline

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use crate::cell::MapCell;
use crate::coast::{extract_coast, CoastSegment};
use crate::config::MapConfig;
use crate::error::{MapError, Result};
use crate::generation::{build_neighbors, generate_partition, Edge, Partition};
use crate::geometry::Rect;
use crate::landmass::{diffuse, DiffusionStats, LandmassProfile};
use crate::region::{classify, Region};
use crate::spatial::SpatialIndex;

/// Central window (as fractions of the bounds) the mainland seed is drawn from
const MAINLAND_WINDOW: (f32, f32) = (0.4, 0.2);

/// Window island seeds are drawn from, keeping them off the map edge
const ISLAND_WINDOW: (f32, f32) = (0.1, 0.8);

/// Cell containing `point`, or `None` outside the bounds
fn locate(bounds: &Rect, index: &SpatialIndex, point: Vec2) -> Option<usize> {
    if !bounds.contains(point) {
        return None;
    }
    index.find_nearest(point)
}

/// Random point inside the `(offset, span)` window of `bounds`
fn point_in_window<R: Rng + ?Sized>(bounds: &Rect, window: (f32, f32), rng: &mut R) -> Vec2 {
    let (offset, span) = window;
    let u = offset + span * rng.gen::<f32>();
    let v = offset + span * rng.gen::<f32>();
    bounds.lerp(u, v)
}

/// Mutable state of one generation run
///
/// Owns the partition, the neighbor graph and the per-cell altitudes, and
/// exposes each pipeline stage so callers can drive generation step by step.
/// Nothing here is shared with other runs.
///
/// # Example
///
/// ```
/// use voronoi_island_map::*;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let config = MapConfigBuilder::new()
///     .seed(7)
///     .num_points(500).unwrap()
///     .size(500.0, 500.0).unwrap()
///     .build()
///     .unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let mut context = GenerationContext::new(config, &mut rng).unwrap();
/// let stats = context
///     .grow(glam::Vec2::new(250.0, 250.0), &LandmassProfile::mainland(), &mut rng)
///     .unwrap();
/// assert_eq!(context.altitudes()[stats.seed_cell], 0.9);
///
/// let regions = context.classify().unwrap();
/// let coastline = context.extract_coast(&regions);
/// let map = context.finish(regions, coastline);
/// assert_eq!(map.cell_count(), 500);
/// ```
pub struct GenerationContext {
    config: MapConfig,
    partition: Partition,
    neighbors: Vec<Vec<usize>>,
    altitudes: Vec<f32>,
    spatial_index: SpatialIndex,
    mainland_cell: Option<usize>,
}

impl GenerationContext {
    /// Validate the config, build the relaxed partition and its neighbor graph
    ///
    /// Every altitude starts at 0.
    pub fn new<R: Rng + ?Sized>(config: MapConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let partition = generate_partition(&config, rng)?;
        Self::from_partition(config, partition)
    }

    /// Start a run from an existing partition
    ///
    /// # Errors
    ///
    /// `DegeneratePartition` if the partition is empty, its bounds differ from
    /// the config, its per-cell lists disagree in length, a cell has fewer than
    /// three boundary points, or an edge id or edge side is out of range.
    pub fn from_partition(config: MapConfig, partition: Partition) -> Result<Self> {
        if partition.is_empty() {
            return Err(MapError::DegeneratePartition("partition has no cells".into()));
        }
        if partition.bounds != config.bounds() {
            return Err(MapError::DegeneratePartition(
                "partition bounds do not match the configuration".into(),
            ));
        }
        let count = partition.len();
        if partition.polygons.len() != count || partition.cell_edges.len() != count {
            return Err(MapError::DegeneratePartition(format!(
                "{} sites but {} polygons and {} edge lists",
                count,
                partition.polygons.len(),
                partition.cell_edges.len()
            )));
        }
        if let Some(i) = partition.polygons.iter().position(|p| p.len() < 3) {
            return Err(MapError::DegeneratePartition(format!(
                "cell {} has {} boundary points",
                i,
                partition.polygons[i].len()
            )));
        }
        for (i, edge_ids) in partition.cell_edges.iter().enumerate() {
            if let Some(&e) = edge_ids.iter().find(|&&e| e >= partition.edges.len()) {
                return Err(MapError::DegeneratePartition(format!(
                    "cell {} refers to edge {} of {}",
                    i,
                    e,
                    partition.edges.len()
                )));
            }
        }
        if let Some(e) = partition
            .edges
            .iter()
            .position(|edge| edge.left >= count || edge.right.is_some_and(|r| r >= count))
        {
            return Err(MapError::DegeneratePartition(format!(
                "edge {} borders a cell outside the partition",
                e
            )));
        }

        let neighbors = build_neighbors(&partition);
        let altitudes = vec![0.0; partition.len()];
        let spatial_index = SpatialIndex::new(&partition.sites);

        Ok(Self {
            config,
            partition,
            neighbors,
            altitudes,
            spatial_index,
            mainland_cell: None,
        })
    }

    #[inline]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    #[inline]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    #[inline]
    pub fn neighbors(&self) -> &[Vec<usize>] {
        &self.neighbors
    }

    #[inline]
    pub fn altitudes(&self) -> &[f32] {
        &self.altitudes
    }

    /// Seed cell of the first landmass, once one has been grown
    #[inline]
    pub fn mainland_cell(&self) -> Option<usize> {
        self.mainland_cell
    }

    /// Cell containing `point`, or `None` outside the bounds
    pub fn find_cell(&self, point: Vec2) -> Option<usize> {
        locate(&self.partition.bounds, &self.spatial_index, point)
    }

    /// Run one diffusion pass from the cell containing `seed_point`
    ///
    /// The first successful pass defines the mainland.
    ///
    /// # Errors
    ///
    /// - `InvalidSeed` if `seed_point` is outside the bounds
    /// - `InvalidInput` if the profile is out of domain
    pub fn grow<R: Rng + ?Sized>(
        &mut self,
        seed_point: Vec2,
        profile: &LandmassProfile,
        rng: &mut R,
    ) -> Result<DiffusionStats> {
        let seed_cell = self.find_cell(seed_point).ok_or(MapError::InvalidSeed {
            x: seed_point.x,
            y: seed_point.y,
        })?;

        let stats = diffuse(&self.neighbors, &mut self.altitudes, seed_cell, profile, rng)?;
        if self.mainland_cell.is_none() {
            self.mainland_cell = Some(seed_cell);
        }

        log::trace!(
            "landmass at cell {}: {} cells reached, queue peak {}",
            stats.seed_cell,
            stats.visited,
            stats.max_queue_len
        );
        Ok(stats)
    }

    /// Classify every cell, flooding the ocean from the map origin corner
    ///
    /// The origin corner is assumed to be water; if it is not, the corner cell
    /// is still labeled ocean and a warning is logged.
    pub fn classify(&self) -> Result<Vec<Region>> {
        let origin = self.partition.bounds.min;
        let ocean_cell = self.find_cell(origin).ok_or(MapError::InvalidSeed {
            x: origin.x,
            y: origin.y,
        })?;

        if self.altitudes[ocean_cell] >= self.config.land_threshold {
            log::warn!(
                "origin cell {} is land (altitude {:.3}); labeling it ocean anyway",
                ocean_cell,
                self.altitudes[ocean_cell]
            );
        }

        Ok(classify(
            &self.neighbors,
            &self.altitudes,
            ocean_cell,
            self.mainland_cell,
            self.config.land_threshold,
        ))
    }

    /// Extract land/water boundary segments
    pub fn extract_coast(&self, regions: &[Region]) -> Vec<CoastSegment> {
        extract_coast(
            &self.altitudes,
            regions,
            &self.partition.edges,
            &self.partition.cell_edges,
            self.config.land_threshold,
        )
    }

    /// Package the run into an `IslandMap`
    pub fn finish(self, regions: Vec<Region>, coastline: Vec<CoastSegment>) -> IslandMap {
        debug_assert_eq!(regions.len(), self.altitudes.len());
        let Partition {
            bounds,
            sites,
            polygons,
            edges,
            ..
        } = self.partition;

        let cells = sites
            .into_iter()
            .zip(polygons)
            .zip(self.altitudes)
            .zip(regions)
            .zip(self.neighbors)
            .enumerate()
            .map(|(id, ((((site, boundary), altitude), region), neighbors))| {
                MapCell::new(id, site, boundary, altitude, region, neighbors)
            })
            .collect();

        IslandMap {
            config: self.config,
            bounds,
            cells,
            edges,
            coastline,
            spatial_index: self.spatial_index,
        }
    }
}

/// A complete generated island map
///
/// Holds every cell with its geometry, altitude and region, the partition
/// edges, and the coastline. It is the only output handed to renderers.
///
/// # Examples
///
/// ```
/// use voronoi_island_map::*;
///
/// let config = MapConfigBuilder::new()
///     .seed(42)
///     .num_points(1_000).unwrap()
///     .num_islands(3)
///     .build()
///     .unwrap();
///
/// let map = IslandMap::generate(config).unwrap();
/// println!("{} cells, {} coast segments", map.cell_count(), map.coastline().len());
///
/// // Hit-test a position
/// if let Some(id) = map.find_cell(glam::Vec2::new(480.0, 480.0)) {
///     println!("Cell {}: {}", id, map.cells()[id].region);
/// }
/// ```
#[derive(Clone)]
pub struct IslandMap {
    /// Configuration used to generate this map
    config: MapConfig,

    /// Map bounds
    bounds: Rect,

    /// All cells (indexed by cell ID)
    cells: Vec<MapCell>,

    /// Partition edges
    edges: Vec<Edge>,

    /// Coast segments in land-cell order
    coastline: Vec<CoastSegment>,

    /// Nearest-site lookup for hit-testing
    spatial_index: SpatialIndex,
}

impl IslandMap {
    /// Generate a map, seeding the random stream from `config.seed`
    ///
    /// The same configuration always produces the same map.
    pub fn generate(config: MapConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed as u64);
        Self::generate_with_rng(config, &mut rng)
    }

    /// Generate a map drawing all randomness from `rng`
    ///
    /// Runs partition, adjacency, one mainland pass, `config.num_islands`
    /// island passes, classification and coastline extraction. On error
    /// nothing is returned.
    pub fn generate_with_rng<R: Rng + ?Sized>(config: MapConfig, rng: &mut R) -> Result<Self> {
        let start = Instant::now();
        let mut context = GenerationContext::new(config, rng)?;
        let bounds = config.bounds();

        let mainland_seed = point_in_window(&bounds, MAINLAND_WINDOW, rng);
        context.grow(mainland_seed, &LandmassProfile::mainland(), rng)?;

        for _ in 0..config.num_islands {
            let island_seed = point_in_window(&bounds, ISLAND_WINDOW, rng);
            let profile = LandmassProfile::island(rng);
            context.grow(island_seed, &profile, rng)?;
        }

        let regions = context.classify()?;
        let coastline = context.extract_coast(&regions);
        let map = context.finish(regions, coastline);

        log::info!(
            "generated {} cells ({} land, {} islands, {} lakes, {} coast segments) in {:?}",
            map.cell_count(),
            map.land_cells().count(),
            map.island_count(),
            map.lake_count(),
            map.coastline.len(),
            start.elapsed()
        );

        Ok(map)
    }

    #[inline]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get a cell by ID
    ///
    /// Returns `None` if the cell ID is out of bounds.
    #[inline]
    pub fn get_cell(&self, id: usize) -> Option<&MapCell> {
        self.cells.get(id)
    }

    #[inline]
    pub fn cells(&self) -> &[MapCell] {
        &self.cells
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn coastline(&self) -> &[CoastSegment] {
        &self.coastline
    }

    /// Get neighbor IDs for a cell
    ///
    /// Returns empty slice if cell ID is invalid.
    pub fn get_neighbors(&self, cell_id: usize) -> &[usize] {
        self.cells
            .get(cell_id)
            .map(|c| c.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Find the cell containing a position
    ///
    /// Uses the same nearest-site lookup as landmass seeding. Returns `None`
    /// for positions outside the map bounds.
    pub fn find_cell(&self, position: Vec2) -> Option<usize> {
        locate(&self.bounds, &self.spatial_index, position)
    }

    /// Iterate over land cells
    pub fn land_cells(&self) -> impl Iterator<Item = &MapCell> {
        self.cells.iter().filter(|c| c.is_land())
    }

    /// Number of islands besides the mainland
    pub fn island_count(&self) -> usize {
        self.count_labels(|r| matches!(r, Region::Island(_)))
    }

    /// Number of lakes
    pub fn lake_count(&self) -> usize {
        self.count_labels(|r| matches!(r, Region::Lake(_)))
    }

    // Labels are dense from 0, so the count is the largest label + 1
    fn count_labels(&self, kind: impl Fn(&Region) -> bool) -> usize {
        self.cells
            .iter()
            .filter(|c| kind(&c.region))
            .filter_map(|c| c.region.label())
            .max()
            .map_or(0, |n| n + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfigBuilder;
    use crate::landmass::Falloff;
    use std::collections::HashSet;

    fn config(seed: u32, points: usize, islands: usize) -> MapConfig {
        MapConfigBuilder::new()
            .seed(seed)
            .num_points(points)
            .unwrap()
            .size(500.0, 500.0)
            .unwrap()
            .num_islands(islands)
            .build()
            .unwrap()
    }

    #[test]
    fn test_map_generation() {
        let map = IslandMap::generate(config(42, 800, 4)).unwrap();

        assert_eq!(map.cell_count(), 800);
        for (i, cell) in map.cells().iter().enumerate() {
            assert_eq!(cell.id, i);
            assert!(cell.boundary.len() >= 3);
            assert!((0.0..=1.0).contains(&cell.altitude));
        }
        assert!(map.land_cells().count() > 0);
        assert!(!map.coastline().is_empty());
    }

    #[test]
    fn test_neighbor_symmetry() {
        let map = IslandMap::generate(config(9, 600, 2)).unwrap();
        for cell in map.cells() {
            for &j in &cell.neighbors {
                assert!(map.get_cell(j).unwrap().is_neighbor_of(cell.id));
            }
        }
    }

    #[test]
    fn test_coastline_separates_land_from_water() {
        let map = IslandMap::generate(config(3, 1_000, 6)).unwrap();
        let threshold = map.config().land_threshold;

        for segment in map.coastline() {
            let land = &map.cells()[segment.land_cell];
            let water = &map.cells()[segment.water_cell];
            assert!(land.altitude >= threshold);
            assert!(water.altitude < threshold);
            assert_eq!(segment.water, water.region);
            assert_eq!(segment.land, land.region);
            assert!(land.is_neighbor_of(water.id));
        }
    }

    #[test]
    fn test_every_cell_classified_consistently() {
        let map = IslandMap::generate(config(17, 1_000, 8)).unwrap();
        let threshold = map.config().land_threshold;
        let origin = map.find_cell(Vec2::ZERO).unwrap();

        for cell in map.cells() {
            if cell.id == origin {
                assert_eq!(cell.region, Region::Ocean);
            } else {
                assert_eq!(cell.is_land(), cell.altitude >= threshold);
            }
        }
    }

    #[test]
    fn test_determinism_with_fixed_seed() {
        let a = IslandMap::generate(config(12345, 700, 5)).unwrap();
        let b = IslandMap::generate(config(12345, 700, 5)).unwrap();

        assert_eq!(a.cells(), b.cells());
        assert_eq!(a.coastline(), b.coastline());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = IslandMap::generate(config(1, 300, 0)).unwrap();
        let b = IslandMap::generate(config(2, 300, 0)).unwrap();
        assert_ne!(a.cells()[0].site, b.cells()[0].site);
    }

    #[test]
    fn test_single_mainland_scenario() {
        let config = config(42, 500, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut context = GenerationContext::new(config, &mut rng).unwrap();

        let center = config.bounds().lerp(0.5, 0.5);
        let stats = context.grow(center, &LandmassProfile::mainland(), &mut rng).unwrap();
        assert_eq!(context.altitudes()[stats.seed_cell], 0.9);
        assert_eq!(context.mainland_cell(), Some(stats.seed_cell));
        assert!(stats.max_queue_len <= 500);

        let regions = context.classify().unwrap();
        assert_eq!(regions[stats.seed_cell], Region::Mainland);
        assert!(regions.contains(&Region::Ocean));
        // A single relative-falloff pass grows one connected landmass
        assert!(!regions.iter().any(|r| matches!(r, Region::Island(_))));
    }

    #[test]
    fn test_mainland_leaves_open_ocean() {
        let map = IslandMap::generate(config(42, 2_000, 0)).unwrap();
        let ocean = map.cells().iter().filter(|c| c.region == Region::Ocean).count();
        let mainland = map.cells().iter().filter(|c| c.region == Region::Mainland).count();

        assert!(mainland > 0);
        assert!(ocean > map.cell_count() / 4);
        assert_eq!(map.island_count(), 0);
    }

    #[test]
    fn test_island_on_land_adds_altitude() {
        let config = config(5, 500, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut context = GenerationContext::new(config, &mut rng).unwrap();
        let center = config.bounds().lerp(0.5, 0.5);

        let mainland = context.grow(center, &LandmassProfile::mainland(), &mut rng).unwrap();
        let neighbor = context.neighbors()[mainland.seed_cell][0];
        let before = context.altitudes()[neighbor];
        let neighbor_site = context.partition().sites[neighbor];

        let island = LandmassProfile::island_with_altitude(0.05);
        context.grow(neighbor_site, &island, &mut rng).unwrap();
        let after = context.altitudes()[neighbor];
        assert!((after - (before + 0.05).min(1.0)).abs() < 1e-6);

        // The mainland seed sits at 0.9 and is pushed to the clamp
        let island = LandmassProfile::island_with_altitude(0.3);
        context.grow(center, &island, &mut rng).unwrap();
        assert_eq!(context.altitudes()[mainland.seed_cell], 1.0);
        assert_eq!(context.mainland_cell(), Some(mainland.seed_cell));
    }

    #[test]
    fn test_invalid_seed() {
        let config = config(1, 200, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut context = GenerationContext::new(config, &mut rng).unwrap();

        let result = context.grow(Vec2::new(-10.0, 50.0), &LandmassProfile::mainland(), &mut rng);
        assert_eq!(result, Err(MapError::InvalidSeed { x: -10.0, y: 50.0 }));
        assert!(context.altitudes().iter().all(|&a| a == 0.0));
        assert_eq!(context.mainland_cell(), None);
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let config = config(1, 200, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut context = GenerationContext::new(config, &mut rng).unwrap();
        let profile = LandmassProfile {
            initial_altitude: 0.5,
            decay: 1.5,
            sharpness: 0.0,
            falloff: Falloff::Radial,
        };

        let result = context.grow(Vec2::new(100.0, 100.0), &profile, &mut rng);
        assert!(matches!(result, Err(MapError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_config_fails_before_partitioning() {
        let mut config = config(1, 200, 0);
        config.num_points = 3;
        assert!(matches!(IslandMap::generate(config), Err(MapError::InvalidInput(_))));

        config.num_points = 200;
        config.width = -5.0;
        assert!(matches!(IslandMap::generate(config), Err(MapError::InvalidInput(_))));
    }

    #[test]
    fn test_find_cell() {
        let map = IslandMap::generate(config(8, 400, 1)).unwrap();

        for cell in map.cells().iter().take(50) {
            assert_eq!(map.find_cell(cell.site), Some(cell.id));
        }
        assert_eq!(map.find_cell(Vec2::new(501.0, 10.0)), None);
        assert!(map.find_cell(Vec2::new(500.0, 500.0)).is_some());
    }

    #[test]
    fn test_get_neighbors_invalid_id() {
        let map = IslandMap::generate(config(8, 100, 0)).unwrap();
        assert!(map.get_cell(map.cell_count()).is_none());
        assert!(map.get_neighbors(999_999).is_empty());
        assert!(!map.get_neighbors(0).is_empty());
    }

    #[test]
    fn test_region_labels_are_dense() {
        let map = IslandMap::generate(config(21, 1_500, 12)).unwrap();

        let islands: HashSet<usize> = map
            .cells()
            .iter()
            .filter_map(|c| match c.region {
                Region::Island(n) => Some(n),
                _ => None,
            })
            .collect();
        assert_eq!(islands, (0..map.island_count()).collect());

        let lakes: HashSet<usize> = map
            .cells()
            .iter()
            .filter_map(|c| match c.region {
                Region::Lake(n) => Some(n),
                _ => None,
            })
            .collect();
        assert_eq!(lakes, (0..map.lake_count()).collect());
    }

    #[test]
    fn test_injected_rng_matches_seeded_generation() {
        let config = config(77, 300, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let injected = IslandMap::generate_with_rng(config, &mut rng).unwrap();
        let seeded = IslandMap::generate(config).unwrap();
        assert_eq!(injected.cells(), seeded.cells());
    }

    /// Two unit squares side by side, sharing edge 1
    fn two_cell_partition() -> Partition {
        let square = |x: f32| {
            vec![
                Vec2::new(x, 0.0),
                Vec2::new(x + 1.0, 0.0),
                Vec2::new(x + 1.0, 1.0),
                Vec2::new(x, 1.0),
            ]
        };
        let edge = |start: Vec2, end: Vec2, left: usize, right: Option<usize>| Edge {
            start,
            end,
            left,
            right,
        };
        Partition {
            bounds: Rect::from_size(2.0, 1.0),
            sites: vec![Vec2::new(0.5, 0.5), Vec2::new(1.5, 0.5)],
            polygons: vec![square(0.0), square(1.0)],
            edges: vec![
                edge(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 0, None),
                edge(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), 0, Some(1)),
                edge(Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0), 0, None),
                edge(Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0), 0, None),
                edge(Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0), 1, None),
                edge(Vec2::new(2.0, 0.0), Vec2::new(2.0, 1.0), 1, None),
                edge(Vec2::new(2.0, 1.0), Vec2::new(1.0, 1.0), 1, None),
            ],
            cell_edges: vec![vec![0, 1, 2, 3], vec![4, 5, 6, 1]],
        }
    }

    fn two_cell_config() -> MapConfig {
        MapConfigBuilder::new()
            .num_points(4)
            .unwrap()
            .size(2.0, 1.0)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_from_partition_accepts_hand_built_partition() {
        let context =
            GenerationContext::from_partition(two_cell_config(), two_cell_partition()).unwrap();
        assert_eq!(context.neighbors(), &[vec![1], vec![0]]);
        assert_eq!(context.altitudes(), &[0.0, 0.0]);
    }

    #[test]
    fn test_from_partition_rejects_two_point_cell() {
        let mut partition = two_cell_partition();
        partition.polygons[1].truncate(2);

        let result = GenerationContext::from_partition(two_cell_config(), partition);
        assert!(matches!(result, Err(MapError::DegeneratePartition(_))));
    }

    #[test]
    fn test_from_partition_rejects_other_bounds() {
        let mut partition = two_cell_partition();
        partition.bounds = Rect::from_size(3.0, 1.0);

        let result = GenerationContext::from_partition(two_cell_config(), partition);
        assert!(matches!(result, Err(MapError::DegeneratePartition(_))));
    }

    #[test]
    fn test_from_partition_rejects_dangling_edges() {
        let mut partition = two_cell_partition();
        partition.cell_edges[0].push(99);
        let result = GenerationContext::from_partition(two_cell_config(), partition);
        assert!(matches!(result, Err(MapError::DegeneratePartition(_))));

        let mut partition = two_cell_partition();
        partition.edges[1].right = Some(5);
        let result = GenerationContext::from_partition(two_cell_config(), partition);
        assert!(matches!(result, Err(MapError::DegeneratePartition(_))));

        let mut partition = two_cell_partition();
        partition.cell_edges.pop();
        let result = GenerationContext::from_partition(two_cell_config(), partition);
        assert!(matches!(result, Err(MapError::DegeneratePartition(_))));
    }
}
