//! Planar geometry helpers for cell construction
//!
//! Bounding rectangles, polygon centroids and half-plane clipping of convex
//! polygons whose edges remember which neighbor site produced them.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Lower corner (the map origin)
    pub min: Vec2,
    /// Upper corner
    pub max: Vec2,
}

impl Rect {
    /// Rectangle `[0, width] x [0, height]`
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Closed containment test (edges count as inside)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Point at fractional position `(u, v)` inside the rectangle
    #[inline]
    pub fn lerp(&self, u: f32, v: f32) -> Vec2 {
        Vec2::new(
            self.min.x + u * self.width(),
            self.min.y + v * self.height(),
        )
    }

    /// Corners in winding order, starting at the origin
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

/// Polygon vertex plus the origin of the edge leaving it
///
/// `edge` is `None` when the outgoing edge lies on the bounds and
/// `Some(j)` when it lies on the bisector with site `j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedVertex {
    pub point: Vec2,
    pub edge: Option<usize>,
}

/// Signed area of a closed polygon (positive for counter-clockwise winding)
pub fn polygon_area(polygon: &[Vec2]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        twice_area += a.perp_dot(b);
    }
    twice_area * 0.5
}

/// Area-weighted centroid of a closed polygon
///
/// Falls back to the vertex average for (near) zero-area polygons and
/// returns `None` for an empty slice.
pub fn polygon_centroid(polygon: &[Vec2]) -> Option<Vec2> {
    if polygon.is_empty() {
        return None;
    }

    // Work relative to the first vertex to keep f32 error small
    let origin = polygon[0];
    let mut twice_area = 0.0;
    let mut weighted = Vec2::ZERO;
    for i in 0..polygon.len() {
        let a = polygon[i] - origin;
        let b = polygon[(i + 1) % polygon.len()] - origin;
        let cross = a.perp_dot(b);
        twice_area += cross;
        weighted += (a + b) * cross;
    }

    if twice_area.abs() <= f32::EPSILON {
        let sum: Vec2 = polygon.iter().copied().sum();
        return Some(sum / polygon.len() as f32);
    }

    Some(origin + weighted / (3.0 * twice_area))
}

/// Clip a convex polygon to the half of the plane closer to `site` than to `other`
///
/// Edges created along the bisector are tagged with `other_id`; surviving
/// pieces of existing edges keep their tags.
pub fn clip_to_bisector(
    polygon: &[TaggedVertex],
    site: Vec2,
    other: Vec2,
    other_id: usize,
) -> Vec<TaggedVertex> {
    let midpoint = (site + other) * 0.5;
    let normal = other - site;
    let side = |p: Vec2| (p - midpoint).dot(normal);

    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for i in 0..polygon.len() {
        let current = polygon[i];
        let next = polygon[(i + 1) % polygon.len()];
        let d_current = side(current.point);
        let d_next = side(next.point);
        let current_inside = d_current <= 0.0;
        let next_inside = d_next <= 0.0;

        match (current_inside, next_inside) {
            (true, true) => clipped.push(current),
            (true, false) => {
                clipped.push(current);
                let t = d_current / (d_current - d_next);
                clipped.push(TaggedVertex {
                    point: current.point.lerp(next.point, t),
                    edge: Some(other_id),
                });
            }
            (false, true) => {
                let t = d_current / (d_current - d_next);
                clipped.push(TaggedVertex {
                    point: current.point.lerp(next.point, t),
                    edge: current.edge,
                });
            }
            (false, false) => {}
        }
    }
    clipped
}

/// Drop vertices whose outgoing edge is shorter than `epsilon`
pub fn remove_short_edges(polygon: &mut Vec<TaggedVertex>, epsilon: f32) {
    let epsilon_sq = epsilon * epsilon;
    let mut i = 0;
    while polygon.len() > 1 && i < polygon.len() {
        let next = (i + 1) % polygon.len();
        if polygon[i].point.distance_squared(polygon[next].point) <= epsilon_sq {
            polygon.remove(i);
        } else {
            i += 1;
        }
    }
}
