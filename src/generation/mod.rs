//! Core Voronoi partition pipeline
//!
//! Places random sites in the map bounds, relaxes them with Lloyd's
//! algorithm, partitions the bounds into convex cells and derives the cell
//! adjacency graph.

mod adjacency;
mod lloyd;
mod partition;
mod points;

pub use adjacency::build_neighbors;
pub use lloyd::{lloyd_relaxation, lloyd_relaxation_with_options, LloydOptions};
pub use partition::{partition, Edge, Partition};
pub use points::generate_sites;

use rand::Rng;

use crate::config::MapConfig;
use crate::error::Result;

/// Generate the relaxed partition for a configuration
///
/// Draws `config.num_points` sites from `rng`, relaxes them and returns the
/// partition of the final sites.
pub fn generate_partition<R: Rng + ?Sized>(config: &MapConfig, rng: &mut R) -> Result<Partition> {
    let bounds = config.bounds();

    // Step 1: Random sites in the bounds
    let sites = generate_sites(config.num_points, bounds, rng);

    // Step 2: Relax towards cell centroids
    let options = LloydOptions {
        max_iterations: config.relax_iterations,
        convergence_threshold: config.relax_convergence,
    };
    let sites = lloyd_relaxation_with_options(sites, bounds, options)?;

    // Step 3: Partition the relaxed sites
    partition(&sites, bounds)
}
