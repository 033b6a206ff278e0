//! Bounded Voronoi partition construction
//!
//! Builds one convex cell per site by clipping the bounds rectangle with the
//! perpendicular bisectors between the site and each of its Delaunay
//! neighbors, then stitches the clipped edges into a shared edge list.

use glam::Vec2;
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::collections::HashMap;

use crate::error::{MapError, Result};
use crate::geometry::{clip_to_bisector, remove_short_edges, Rect, TaggedVertex};

/// Edges shorter than this fraction of the longer bounds side are dropped
const EDGE_EPSILON_FRACTION: f32 = 1e-6;

/// An edge of the partition
///
/// `left` is the cell that first produced the edge. `right` is the cell on
/// the other side, or `None` for edges on the outer bounds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First endpoint, in the winding order of `left`
    pub start: Vec2,
    /// Second endpoint
    pub end: Vec2,
    /// Cell that owns the edge
    pub left: usize,
    /// Cell across the edge, if any
    pub right: Option<usize>,
}

impl Edge {
    /// The cell across this edge as seen from `cell`
    ///
    /// Returns `None` for boundary edges or when `cell` is not on either side.
    #[inline]
    pub fn other_side(&self, cell: usize) -> Option<usize> {
        match self.right {
            Some(right) if self.left == cell => Some(right),
            Some(right) if right == cell => Some(self.left),
            _ => None,
        }
    }

    /// Whether this edge lies on the outer bounds
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.right.is_none()
    }
}

/// A bounded partition of the plane into convex cells
#[derive(Debug, Clone)]
pub struct Partition {
    /// Map bounds covered by the cells
    pub bounds: Rect,
    /// Site of each cell
    pub sites: Vec<Vec2>,
    /// Boundary polygon of each cell (winding order)
    pub polygons: Vec<Vec<Vec2>>,
    /// All edges, each stored once
    pub edges: Vec<Edge>,
    /// Edge ids bounding each cell, in polygon order
    pub cell_edges: Vec<Vec<usize>>,
}

impl Partition {
    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Partition `bounds` into one convex cell per site
///
/// # Errors
///
/// - `InvalidInput` if a site lies outside `bounds`
/// - `DegeneratePartition` if there are no sites, two sites coincide, the
///   triangulation rejects a site, or a cell ends up with fewer than three
///   boundary points
pub fn partition(sites: &[Vec2], bounds: Rect) -> Result<Partition> {
    if sites.is_empty() {
        return Err(MapError::DegeneratePartition("no sites to partition".into()));
    }
    if let Some((i, site)) = sites.iter().enumerate().find(|(_, s)| !bounds.contains(**s)) {
        return Err(MapError::InvalidInput(format!(
            "site {} at ({}, {}) lies outside the bounds",
            i, site.x, site.y
        )));
    }

    let delaunay_neighbors = compute_delaunay_neighbors(sites)?;
    let epsilon = bounds.width().max(bounds.height()) * EDGE_EPSILON_FRACTION;

    let corners: Vec<TaggedVertex> = bounds
        .corners()
        .iter()
        .map(|&point| TaggedVertex { point, edge: None })
        .collect();

    let mut cells = Vec::with_capacity(sites.len());
    for (i, &site) in sites.iter().enumerate() {
        let mut polygon = corners.clone();
        for &j in &delaunay_neighbors[i] {
            polygon = clip_to_bisector(&polygon, site, sites[j], j);
        }
        remove_short_edges(&mut polygon, epsilon);

        if polygon.len() < 3 {
            return Err(MapError::DegeneratePartition(format!(
                "cell {} has {} boundary points",
                i,
                polygon.len()
            )));
        }
        cells.push(polygon);
    }

    let (edges, cell_edges) = stitch_edges(&cells);
    let polygons = cells
        .into_iter()
        .map(|polygon| polygon.into_iter().map(|v| v.point).collect())
        .collect();

    Ok(Partition {
        bounds,
        sites: sites.to_vec(),
        polygons,
        edges,
        cell_edges,
    })
}

/// Delaunay neighbors of every site, indexed like `sites`
fn compute_delaunay_neighbors(sites: &[Vec2]) -> Result<Vec<Vec<usize>>> {
    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();

    for (i, site) in sites.iter().enumerate() {
        let handle = triangulation
            .insert(Point2::new(site.x as f64, site.y as f64))
            .map_err(|err| {
                MapError::DegeneratePartition(format!("site {} rejected: {:?}", i, err))
            })?;

        // Vertex indices follow insertion order unless the site was merged
        if handle.index() != i {
            return Err(MapError::DegeneratePartition(format!(
                "site {} coincides with site {}",
                i,
                handle.index()
            )));
        }
    }

    let mut neighbors = vec![Vec::new(); sites.len()];
    for vertex in triangulation.vertices() {
        neighbors[vertex.fix().index()] = vertex
            .out_edges()
            .map(|edge| edge.to().fix().index())
            .collect();
    }
    Ok(neighbors)
}

/// Turn tagged cell polygons into a shared edge list
///
/// An edge tagged with neighbor `j` in cell `i` is matched with the edge
/// tagged `i` in cell `j`. Only matched edges get a `right` side, so the
/// resulting adjacency is symmetric even when one side lost a tiny edge.
fn stitch_edges(cells: &[Vec<TaggedVertex>]) -> (Vec<Edge>, Vec<Vec<usize>>) {
    let mut edges = Vec::new();
    let mut cell_edges = Vec::with_capacity(cells.len());
    let mut shared: HashMap<(usize, usize), usize> = HashMap::new();

    for (i, polygon) in cells.iter().enumerate() {
        let mut ids = Vec::with_capacity(polygon.len());
        for k in 0..polygon.len() {
            let start = polygon[k].point;
            let end = polygon[(k + 1) % polygon.len()].point;

            let id = match polygon[k].edge {
                None => {
                    edges.push(Edge { start, end, left: i, right: None });
                    edges.len() - 1
                }
                Some(j) => {
                    let key = (i.min(j), i.max(j));
                    match shared.get(&key) {
                        Some(&id) => {
                            edges[id].right = Some(i);
                            id
                        }
                        None => {
                            edges.push(Edge { start, end, left: i, right: None });
                            shared.insert(key, edges.len() - 1);
                            edges.len() - 1
                        }
                    }
                }
            };
            ids.push(id);
        }
        cell_edges.push(ids);
    }

    (edges, cell_edges)
}
