//! Example: Generate an island map
//!
//! Demonstrates the generation pipeline and the queries a renderer needs.

use voronoi_island_map::*;

fn main() -> Result<()> {
    println!("Island Map Generation Example");
    println!("=============================\n");

    let config = MapConfigBuilder::new()
        .seed(42)
        .num_points(8_000)?
        .size(960.0, 960.0)?
        .num_islands(10)
        .build()?;

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Sites: {}", config.num_points);
    println!("  Bounds: {} x {}", config.width, config.height);
    println!("  Islands: {}", config.num_islands);
    println!();

    println!("Generating map...");
    let map = IslandMap::generate(config)?;
    println!("Generated {} cells\n", map.cell_count());

    let land = map.land_cells().count();
    let total_neighbors: usize = map.cells().iter().map(|c| c.neighbor_count()).sum();
    let avg_neighbors = total_neighbors as f32 / map.cell_count() as f32;

    println!("Statistics:");
    println!("  Land cells: {} ({:.1}%)", land, land as f32 / map.cell_count() as f32 * 100.0);
    println!("  Islands besides the mainland: {}", map.island_count());
    println!("  Lakes: {}", map.lake_count());
    println!("  Coast segments: {}", map.coastline().len());
    println!("  Average neighbors per cell: {:.2}", avg_neighbors);
    println!();

    println!("Sample positions:");
    for (x, y) in [(0.0, 0.0), (480.0, 480.0), (300.0, 650.0)] {
        if let Some(id) = map.find_cell(Vec2::new(x, y)) {
            let cell = &map.cells()[id];
            println!(
                "  ({:.0}, {:.0}) -> cell {}: {} (altitude {:.3})",
                x, y, id, cell.region, cell.altitude
            );
        }
    }

    println!("\nGeneration complete!");
    Ok(())
}
