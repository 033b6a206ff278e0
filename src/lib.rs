//! Voronoi-based island map generation
//!
//! Partitions a rectangle into relaxed Voronoi cells, grows a mainland and a
//! number of islands over the cell graph by altitude diffusion, classifies
//! every cell as ocean, lake, mainland or island, and extracts the
//! coastline. Rendering is left to the caller.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voronoi_island_map::*;
//!
//! let config = MapConfigBuilder::new()
//!     .seed(42)
//!     .num_points(10_000).unwrap()
//!     .num_islands(10)
//!     .build().unwrap();
//!
//! let map = IslandMap::generate(config).unwrap();
//! for segment in map.coastline() {
//!     // draw segment.start -> segment.end, styled by segment.water
//! }
//! println!("{} islands, {} lakes", map.island_count(), map.lake_count());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): O(log n) position-to-cell lookups using a KD-tree
//! - `serde`: Serialization support for configuration, cells and coastline

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod cell;
pub mod generation;
pub mod landmass;
pub mod region;
pub mod coast;
pub mod spatial;
pub mod map;

// Re-export core types for convenience
pub use error::{MapError, Result};
pub use config::{MapConfig, MapConfigBuilder};
pub use geometry::Rect;
pub use cell::MapCell;
pub use generation::{Edge, LloydOptions, Partition};
pub use landmass::{DiffusionStats, Falloff, LandmassProfile};
pub use region::Region;
pub use coast::CoastSegment;
pub use spatial::SpatialIndex;
pub use map::{GenerationContext, IslandMap};

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
