//! Polygon area by the shoelace (Gauss lacing) formula.
//!
//! Model
//! - `GaussLacing` walks the vertices in order and yields one signed term
//!   `(p × q) / 2` per edge `p → q`; the first vertex yields `0`.
//! - Re-feeding the first vertex after the last one closes the boundary, so
//!   the summed terms are the signed area (positive for CCW order).
//!
//! Cross products are taken in `i128` via `Point::to_vec`, so any pair of
//! `i32` coordinates is exact before the halving.

use crate::codec::{Point, Polygon};

/// Incremental shoelace accumulator over an ordered vertex walk.
///
/// Holds the previous vertex by value; build a fresh one per polygon.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussLacing {
    prev: Option<Point>,
}

impl GaussLacing {
    #[inline]
    pub fn new() -> Self {
        Self { prev: None }
    }

    /// Signed area term for the edge from the previous vertex to `point`.
    pub fn step(&mut self, point: Point) -> f64 {
        let term = match self.prev {
            None => 0.0,
            Some(prev) => prev.to_vec().perp(&point.to_vec()) as f64 / 2.0,
        };
        self.prev = Some(point);
        term
    }
}

/// Signed area; positive when the vertices run counter-clockwise.
///
/// Empty polygons have area `0.0`.
pub fn signed_area(polygon: &Polygon) -> f64 {
    let Some(&first) = polygon.points.first() else {
        return 0.0;
    };
    let mut lacing = GaussLacing::new();
    polygon
        .points
        .iter()
        .copied()
        .chain(std::iter::once(first))
        .map(|p| lacing.step(p))
        .sum()
}

/// Unsigned area of the closed boundary through `polygon.points`.
pub fn get_area(polygon: &Polygon) -> f64 {
    signed_area(polygon).abs()
}

#[inline]
pub fn count_vertexes(polygon: &Polygon) -> usize {
    polygon.points.len()
}
