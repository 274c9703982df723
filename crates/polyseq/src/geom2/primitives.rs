//! Measurements on points and polygons.
//!
//! Plain floating-point arithmetic, no tolerances. All functions are total on
//! valid `Polygon` values (at least 3 vertices).

use nalgebra::Vector2;

use super::types::{Point, Polygon};

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    (p2 - p1).norm()
}

/// 2D cross product `x1*y2 - y1*x2`.
/// Positive for a counter-clockwise turn from `v1` to `v2`.
#[inline]
pub fn pseudo_scalar(v1: &Vector2<f64>, v2: &Vector2<f64>) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Edge lengths in vertex order; edge `i` joins vertex `i` and `i+1 mod n`.
pub fn sides(poly: &Polygon) -> Vec<f64> {
    poly.edges().map(|(p, q)| distance(&p, &q)).collect()
}

/// Shoelace area, `0.5 * |Σ (x_i y_{i+1} - x_{i+1} y_i)|`.
///
/// Winding-independent. Self-intersecting input is not detected; the result
/// is then the absolute signed sum and carries no geometric meaning.
pub fn area(poly: &Polygon) -> f64 {
    0.5 * poly.edges().map(|(p, q)| p.x * q.y - q.x * p.y).sum::<f64>().abs()
}

/// Sum of edge lengths.
pub fn perimeter(poly: &Polygon) -> f64 {
    poly.edges().map(|(p, q)| distance(&p, &q)).sum()
}

pub fn shortest_side(poly: &Polygon) -> f64 {
    poly.edges()
        .map(|(p, q)| distance(&p, &q))
        .fold(f64::INFINITY, f64::min)
}

pub fn longest_side(poly: &Polygon) -> f64 {
    poly.edges()
        .map(|(p, q)| distance(&p, &q))
        .fold(f64::NEG_INFINITY, f64::max)
}
