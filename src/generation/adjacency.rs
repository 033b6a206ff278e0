//! Cell adjacency from partition edges

use super::partition::Partition;

/// Build the undirected neighbor lists of every cell
///
/// Walks each cell's bounding edges; an edge with cells on both sides makes
/// them neighbors, boundary edges contribute nothing. Lists keep edge
/// visitation order and never contain duplicates or the cell itself.
pub fn build_neighbors(partition: &Partition) -> Vec<Vec<usize>> {
    partition
        .cell_edges
        .iter()
        .enumerate()
        .map(|(i, edge_ids)| {
            let mut neighbors = Vec::with_capacity(edge_ids.len());
            for &e in edge_ids {
                if let Some(j) = partition.edges[e].other_side(i) {
                    if j != i && !neighbors.contains(&j) {
                        neighbors.push(j);
                    }
                }
            }
            neighbors
        })
        .collect()
}
