//! Polygon transforms. Each returns a new polygon with the same vertex count
//! and order; parameters are validated before any vertex is touched.
//!
//! `translate` and `reflect` work coordinate-wise so that applying them twice
//! with inverse parameters reproduces the input bit for bit (for offsets that
//! do not lose precision). Rotation and scaling go through `Affine2`.
//!
//! Only the parameters are checked. Results that overflow `f64` come back
//! with infinite coordinates instead of an error.

use super::types::{Affine2, Axis, Point, Polygon};
use crate::error::{ensure_finite, Result};

/// Shift every vertex by `(dx, dy)`.
pub fn translate(poly: &Polygon, dx: f64, dy: f64) -> Result<Polygon> {
    let dx = ensure_finite("dx", dx)?;
    let dy = ensure_finite("dy", dy)?;
    Ok(shift(poly, dx, dy))
}

#[inline]
pub(crate) fn shift(poly: &Polygon, dx: f64, dy: f64) -> Polygon {
    poly.map_vertices(|v| Point::new(v.x + dx, v.y + dy))
}

/// Rotate counter-clockwise about the origin (not the centroid).
pub fn rotate(poly: &Polygon, angle_degrees: f64) -> Result<Polygon> {
    Ok(transform(poly, &Affine2::rotation_deg(angle_degrees)?))
}

/// Mirror across the given coordinate axis.
pub fn reflect(poly: &Polygon, axis: Axis) -> Polygon {
    match axis {
        Axis::X => poly.map_vertices(|v| Point::new(v.x, -v.y)),
        Axis::Y => poly.map_vertices(|v| Point::new(-v.x, v.y)),
    }
}

/// Scale by `k` about `center`. Negative `k` also inverts through the center.
pub fn homothety(poly: &Polygon, center: Point, k: f64) -> Result<Polygon> {
    Ok(transform(poly, &Affine2::homothety(center, k)?))
}

/// Scale x by `cx` and y by `cy`, about the origin.
pub fn stretch(poly: &Polygon, cx: f64, cy: f64) -> Result<Polygon> {
    Ok(transform(poly, &Affine2::stretch(cx, cy)?))
}

/// Push every vertex through an affine map.
pub fn transform(poly: &Polygon, f: &Affine2) -> Polygon {
    poly.map_vertices(|v| f.apply(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Polygon {
        Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    fn assert_close(a: &Polygon, b: &[(f64, f64)], tol: f64) {
        assert_eq!(a.vertex_count(), b.len());
        for (v, &(x, y)) in a.vertices().iter().zip(b) {
            assert!(
                (v.x - x).abs() < tol && (v.y - y).abs() < tol,
                "got ({}, {}), want ({x}, {y})",
                v.x,
                v.y
            );
        }
    }

    #[test]
    fn translate_shifts_all_vertices() {
        let t = translate(&square(), 1.0, 2.0).unwrap();
        assert_close(&t, &[(1.0, 2.0), (2.0, 2.0), (2.0, 3.0), (1.0, 3.0)], 1e-12);
        assert!(translate(&square(), f64::NAN, 1.0)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn rotate_quarter_turn_ccw() {
        let r = rotate(&square(), 90.0).unwrap();
        assert_close(&r, &[(0.0, 0.0), (0.0, 1.0), (-1.0, 1.0), (-1.0, 0.0)], 1e-9);
        assert!(rotate(&square(), f64::NAN).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn reflect_both_axes() {
        let rx = reflect(&square(), Axis::X);
        assert_close(&rx, &[(0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (0.0, -1.0)], 1e-12);
        let ry = reflect(&square(), "1".parse().unwrap());
        assert_close(&ry, &[(0.0, 0.0), (-1.0, 0.0), (-1.0, 1.0), (0.0, 1.0)], 1e-12);
    }

    #[test]
    fn homothety_scales_about_center() {
        let up = homothety(&square(), vector![0.0, 0.0], 2.0).unwrap();
        assert_close(&up, &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)], 1e-9);
        let down = homothety(&square(), vector![0.0, 0.0], 0.5).unwrap();
        assert_close(&down, &[(0.0, 0.0), (0.5, 0.0), (0.5, 0.5), (0.0, 0.5)], 1e-9);
        let inv = homothety(&square(), vector![0.0, 0.0], -1.0).unwrap();
        assert_close(&inv, &[(0.0, 0.0), (-1.0, 0.0), (-1.0, -1.0), (0.0, -1.0)], 1e-9);
        let off = homothety(&square(), vector![1.0, 1.0], 2.0).unwrap();
        assert_close(&off, &[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)], 1e-9);
    }

    #[test]
    fn homothety_rejects_bad_parameters() {
        assert!(homothety(&square(), vector![0.0, 0.0], 0.0)
            .unwrap_err()
            .is_domain());
        assert!(homothety(&square(), vector![0.0, 0.0], f64::NAN)
            .unwrap_err()
            .is_invalid_argument());
        assert!(homothety(&square(), vector![f64::INFINITY, 0.0], 2.0)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn stretch_is_axis_aligned() {
        let s = stretch(&square(), 1.0, 3.0).unwrap();
        assert_close(&s, &[(0.0, 0.0), (1.0, 0.0), (1.0, 3.0), (0.0, 3.0)], 1e-12);
        assert!(stretch(&square(), 0.0, 1.0).unwrap_err().is_domain());
    }

    #[test]
    fn overflow_yields_infinite_coordinates() {
        let huge = Polygon::from_xy(&[(f64::MAX, 0.0), (f64::MAX, 1.0), (0.0, 1.0)]).unwrap();
        let moved = translate(&huge, f64::MAX, 0.0).unwrap();
        assert_eq!(moved.vertex_count(), 3);
        assert!(moved.vertices()[0].x.is_infinite());
        assert_eq!(moved.vertices()[2].x, f64::MAX);
        let scaled = stretch(&huge, 2.0, 1.0).unwrap();
        assert!(scaled.vertices()[1].x.is_infinite());
        // Rebuilding through the checked constructor rejects the overflow.
        assert!(Polygon::new(scaled.into_vertices())
            .unwrap_err()
            .is_invalid_argument());
    }
}
