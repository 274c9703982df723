//! Value types for planar polygons.
//!
//! - `Point`: a plain `nalgebra::Vector2<f64>`; equality is exact.
//! - `Polygon`: ordered vertex list, implicitly closed, at least 3 vertices.
//! - `Bounds2`: axis-aligned bounding box.
//! - `Axis`: the two reflection axes.
//! - `Affine2`: `x ↦ M x + t`, used by the rotation/scaling transforms.
//!
//! Nothing here is mutated after construction; transforms build new values.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix2, Vector2};

use crate::error::{ensure_finite, Error, Result};

/// A point (or a difference vector) in the plane.
pub type Point = Vector2<f64>;

/// Simple polygon given by its vertices in order; the last vertex connects
/// back to the first. Winding direction is not normalized.
///
/// Invariants:
/// - At least 3 vertices.
/// - `Polygon::new` rejects non-finite coordinates. Transforms use plain
///   IEEE arithmetic, so a result that overflows holds infinite coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Minimum vertex count of a polygon.
    pub const MIN_VERTICES: usize = 3;

    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(Error::invalid(format!(
                "polygon needs at least {} vertices, got {}",
                Self::MIN_VERTICES,
                vertices.len()
            )));
        }
        for (i, v) in vertices.iter().enumerate() {
            if !(v.x.is_finite() && v.y.is_finite()) {
                return Err(Error::invalid(format!(
                    "vertex {i} has non-finite coordinates ({}, {})",
                    v.x, v.y
                )));
            }
        }
        Ok(Self { vertices })
    }

    /// Build from `(x, y)` pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Used by transforms, which preserve the vertex count of a valid input.
    #[inline]
    pub(crate) fn from_vertices_unchecked(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= Self::MIN_VERTICES);
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex at a cyclic index (`i mod n`).
    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i % self.vertices.len()]
    }

    /// Edges `(v_i, v_{i+1 mod n})` in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Edge vectors `v_{i+1} - v_i` in vertex order.
    pub fn edge_vectors(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.edges().map(|(p, q)| q - p)
    }

    /// New polygon with `f` applied to every vertex, order preserved.
    pub fn map_vertices(&self, f: impl FnMut(&Point) -> Point) -> Polygon {
        Self::from_vertices_unchecked(self.vertices.iter().map(f).collect())
    }

    pub fn bounds(&self) -> Bounds2 {
        Bounds2::of_points(&self.vertices)
    }

    /// Vertex average. Equals the area centroid for regular polygons.
    pub fn centroid(&self) -> Point {
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<f64>, v| acc + v);
        sum / self.vertices.len() as f64
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    /// Bounding box of a non-empty point set.
    fn of_points(points: &[Point]) -> Self {
        let first = points[0];
        points.iter().skip(1).fold(
            Self {
                min: first,
                max: first,
            },
            |b, p| b.including(*p),
        )
    }

    #[inline]
    fn including(self, p: Point) -> Self {
        Self {
            min: Vector2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Vector2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    #[inline]
    pub fn union(self, other: Bounds2) -> Self {
        self.including(other.min).including(other.max)
    }

    /// Grow by `margin` on every side.
    #[inline]
    pub fn padded(self, margin: f64) -> Self {
        let m = Vector2::new(margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Reflection axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Mirror across the x-axis (negate y).
    X,
    /// Mirror across the y-axis (negate x).
    Y,
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x" | "0" => Ok(Axis::X),
            "y" | "1" => Ok(Axis::Y),
            other => Err(Error::invalid(format!(
                "unknown axis {other:?}; expected \"x\", \"y\", 0 or 1"
            ))),
        }
    }
}

impl TryFrom<i64> for Axis {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            other => Err(Error::invalid(format!(
                "unknown axis code {other}; expected 0 (x) or 1 (y)"
            ))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    pub fn translation(dx: f64, dy: f64) -> Result<Self> {
        Ok(Self {
            m: Matrix2::identity(),
            t: Vector2::new(ensure_finite("dx", dx)?, ensure_finite("dy", dy)?),
        })
    }

    /// Counter-clockwise rotation about the origin, angle in degrees.
    pub fn rotation_deg(angle_degrees: f64) -> Result<Self> {
        let th = ensure_finite("angle", angle_degrees)?.to_radians();
        let (s, c) = th.sin_cos();
        Ok(Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        })
    }

    pub fn reflection(axis: Axis) -> Self {
        let m = match axis {
            Axis::X => Matrix2::new(1.0, 0.0, 0.0, -1.0),
            Axis::Y => Matrix2::new(-1.0, 0.0, 0.0, 1.0),
        };
        Self {
            m,
            t: Vector2::zeros(),
        }
    }

    /// Uniform scaling by `k` about `center`: `v ↦ c + k (v - c)`.
    ///
    /// `k == 0` collapses every polygon to a point and is rejected.
    pub fn homothety(center: Point, k: f64) -> Result<Self> {
        let cx = ensure_finite("center.x", center.x)?;
        let cy = ensure_finite("center.y", center.y)?;
        let k = ensure_finite("k", k)?;
        if k == 0.0 {
            return Err(Error::domain("homothety factor k must be non-zero"));
        }
        let c = Vector2::new(cx, cy);
        Ok(Self {
            m: Matrix2::identity() * k,
            t: c * (1.0 - k),
        })
    }

    /// Axis-aligned scaling about the origin: `(x, y) ↦ (cx x, cy y)`.
    pub fn stretch(cx: f64, cy: f64) -> Result<Self> {
        let cx = ensure_finite("cx", cx)?;
        let cy = ensure_finite("cy", cy)?;
        if cx == 0.0 || cy == 0.0 {
            return Err(Error::domain("stretch factors must be non-zero"));
        }
        Ok(Self {
            m: Matrix2::new(cx, 0.0, 0.0, cy),
            t: Vector2::zeros(),
        })
    }

    /// Composition `self ∘ other` (apply `other` first).
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    #[inline]
    pub fn apply(&self, p: &Point) -> Point {
        self.m * p + self.t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn polygon_needs_three_finite_vertices() {
        assert!(Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0)])
            .unwrap_err()
            .is_invalid_argument());
        assert!(Polygon::from_xy(&[(0.0, 0.0), (1.0, f64::NAN), (0.0, 1.0)])
            .unwrap_err()
            .is_invalid_argument());
        let tri = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        assert_eq!(tri.vertex_count(), 3);
        assert_eq!(tri.vertex(4), vector![1.0, 0.0]);
    }

    #[test]
    fn edges_wrap_around() {
        let sq = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let last = sq.edges().last().unwrap();
        assert_eq!(last, (vector![0.0, 1.0], vector![0.0, 0.0]));
        let ev: Vec<_> = sq.edge_vectors().collect();
        assert_eq!(ev[1], vector![0.0, 1.0]);
    }

    #[test]
    fn bounds_and_padding() {
        let tri = Polygon::from_xy(&[(-1.0, 2.0), (3.0, 0.5), (0.0, -4.0)]).unwrap();
        let b = tri.bounds();
        assert_eq!(b.min, vector![-1.0, -4.0]);
        assert_eq!(b.max, vector![3.0, 2.0]);
        assert_eq!(b.width(), 4.0);
        let p = b.padded(1.0);
        assert_eq!(p.height(), 8.0);
        let u = b.union(Bounds2 {
            min: vector![5.0, 5.0],
            max: vector![6.0, 6.0],
        });
        assert_eq!(u.max, vector![6.0, 6.0]);
        assert_eq!(u.min, b.min);
    }

    #[test]
    fn axis_parsing_accepts_tokens_and_codes() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("1".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!(Axis::try_from(0).unwrap(), Axis::X);
        assert!("z".parse::<Axis>().unwrap_err().is_invalid_argument());
        assert!(Axis::try_from(2).unwrap_err().is_invalid_argument());
        assert_eq!(Axis::Y.to_string(), "y");
    }

    #[test]
    fn affine_compose_applies_right_operand_first() {
        let r = Affine2::rotation_deg(90.0).unwrap();
        let t = Affine2::translation(1.0, 0.0).unwrap();
        let p = vector![1.0, 0.0];
        // Shift to (2, 0), then rotate to (0, 2).
        assert!((r.compose(&t).apply(&p) - vector![0.0, 2.0]).norm() < 1e-12);
        // Rotate to (0, 1), then shift to (1, 1).
        assert!((t.compose(&r).apply(&p) - vector![1.0, 1.0]).norm() < 1e-12);
        let m = Affine2::reflection(Axis::X);
        assert_eq!(m.compose(&m), Affine2::identity());
    }

    #[test]
    fn affine_constructors_validate() {
        assert!(Affine2::homothety(vector![0.0, 0.0], 0.0)
            .unwrap_err()
            .is_domain());
        assert!(Affine2::homothety(vector![f64::NAN, 0.0], 2.0)
            .unwrap_err()
            .is_invalid_argument());
        assert!(Affine2::stretch(1.0, 0.0).unwrap_err().is_domain());
        assert!(Affine2::rotation_deg(f64::INFINITY)
            .unwrap_err()
            .is_invalid_argument());
        assert!(Affine2::translation(f64::NAN, 0.0)
            .unwrap_err()
            .is_invalid_argument());
        assert_eq!(
            Affine2::identity().apply(&vector![2.0, 3.0]),
            vector![2.0, 3.0]
        );
    }
}
