//! Polygon predicates.
//!
//! Convexity and containment share one sign-consistency scan: walk a cyclic
//! sequence of cross products, remember the sign of the first non-zero one,
//! and fail on the first non-zero product with the opposite sign. Zero
//! products (collinear edges, points on an edge line) never break the scan.
//!
//! Point containment is defined for convex polygons only; a non-convex
//! polygon contains no point.

use super::primitives::{area, pseudo_scalar, shortest_side};
use super::types::{Point, Polygon};

/// True iff all non-zero values share one sign.
fn same_sign(products: impl Iterator<Item = f64>) -> bool {
    let mut sign = 0.0_f64;
    for p in products {
        if p == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = p.signum();
        } else if sign * p < 0.0 {
            return false;
        }
    }
    true
}

/// Convexity via the turn direction at every vertex, either winding.
pub fn is_convex(poly: &Polygon) -> bool {
    let n = poly.vertex_count();
    same_sign((0..n).map(|k| {
        let side = poly.vertex(k + 1) - poly.vertex(k);
        let next_side = poly.vertex(k + 2) - poly.vertex(k + 1);
        pseudo_scalar(&side, &next_side)
    }))
}

/// Exact match against one of the vertices.
pub fn has_vertex_at(poly: &Polygon, point: &Point) -> bool {
    poly.vertices().iter().any(|v| v == point)
}

pub fn area_less_than(poly: &Polygon, threshold: f64) -> bool {
    area(poly) < threshold
}

pub fn shortest_side_less_than(poly: &Polygon, threshold: f64) -> bool {
    shortest_side(poly) < threshold
}

/// Point in convex polygon, boundary included. Always false for non-convex
/// input.
pub fn point_inside(poly: &Polygon, point: &Point) -> bool {
    if !is_convex(poly) {
        return false;
    }
    same_sign(
        poly.edges()
            .map(|(start, end)| pseudo_scalar(&(end - start), &(point - start))),
    )
}

/// True iff at least one vertex equals one of `others` exactly.
pub fn shares_vertex_with(poly: &Polygon, others: &[Point]) -> bool {
    others.iter().any(|p| has_vertex_at(poly, p))
}
