//! Tapes of regular polygons.
//!
//! The base polygon has its circumcenter at the origin and a vertex pointing
//! along +y. Polygon `i` of the tape is the base shifted by `i * (width +
//! step)` along x, so the gap between consecutive bounding boxes is `step`.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use nalgebra::Vector2;

use crate::error::{ensure_finite, Error, Result};
use crate::geom2::{transform, transform::shift, Affine2, Polygon};
use crate::seq::Count;

/// Regular polygon with vertex `k` at angle `2πk/n` on the circumcircle of
/// radius `side_length / (2 sin(π/n))`, which makes every edge `side_length`
/// long.
pub fn regular_polygon(n_sides: usize, side_length: f64) -> Result<Polygon> {
    if n_sides < Polygon::MIN_VERTICES {
        return Err(Error::domain(format!(
            "regular polygon needs at least 3 sides, got {n_sides}"
        )));
    }
    let l = ensure_finite("side_length", side_length)?;
    let n = n_sides as f64;
    let radius = l / (2.0 * (PI / n).sin());
    let vertices = (0..n_sides)
        .map(|k| {
            let theta = 2.0 * PI * k as f64 / n;
            Vector2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    Polygon::new(vertices)
}

/// Tape parameters. `TapeCfg::new(n)` gives step 1, unbounded count and unit
/// side length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapeCfg {
    pub n_sides: usize,
    /// Gap between the bounding boxes of consecutive polygons.
    pub step: f64,
    pub count: Count,
    pub side_length: f64,
}

impl TapeCfg {
    pub fn new(n_sides: usize) -> Self {
        Self {
            n_sides,
            step: 1.0,
            count: Count::Unbounded,
            side_length: 1.0,
        }
    }

    pub fn build(self) -> Result<RegularTape> {
        let step = ensure_finite("step", self.step)?;
        let upright = Affine2::rotation_deg(90.0)?;
        let base = transform(&regular_polygon(self.n_sides, self.side_length)?, &upright);
        let x_shift = base.bounds().width() + step;
        Ok(RegularTape {
            base,
            x_shift,
            index: 0,
            count: self.count,
        })
    }
}

/// Convenience wrapper around [`TapeCfg`].
pub fn regular_polygon_tape(
    n_sides: usize,
    step: f64,
    count: Count,
    side_length: f64,
) -> Result<RegularTape> {
    TapeCfg {
        n_sides,
        step,
        count,
        side_length,
    }
    .build()
}

/// Iterator over a tape. Unbounded tapes never return `None`.
#[derive(Clone, Debug)]
pub struct RegularTape {
    base: Polygon,
    x_shift: f64,
    index: usize,
    count: Count,
}

impl RegularTape {
    /// The un-shifted polygon at index 0.
    #[inline]
    pub fn base(&self) -> &Polygon {
        &self.base
    }

    /// Distance between consecutive polygons along x.
    #[inline]
    pub fn x_shift(&self) -> f64 {
        self.x_shift
    }

    /// Polygon at absolute index `i`, regardless of iteration state.
    pub fn polygon_at(&self, i: usize) -> Polygon {
        shift(&self.base, i as f64 * self.x_shift, 0.0)
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.count.limit().map(|n| n.saturating_sub(self.index))
    }
}

impl Iterator for RegularTape {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        if self.remaining() == Some(0) {
            return None;
        }
        let poly = self.polygon_at(self.index);
        self.index += 1;
        Some(poly)
    }

    fn nth(&mut self, n: usize) -> Option<Polygon> {
        match self.remaining() {
            Some(left) if n >= left => {
                self.index = self.index.saturating_add(left);
                None
            }
            _ => {
                self.index = self.index.saturating_add(n);
                self.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(left) => (left, Some(left)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RegularTape {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{is_convex, sides};

    #[test]
    fn regular_polygon_side_length() {
        let poly = regular_polygon(6, 5.0).unwrap();
        for s in sides(&poly) {
            assert!((s - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn regular_polygon_center() {
        let c = regular_polygon(5, 1.0).unwrap().centroid();
        assert!(c.x.abs() < 1e-12 && c.y.abs() < 1e-12);
    }

    #[test]
    fn regular_polygon_rejects_digons() {
        assert!(regular_polygon(2, 1.0).unwrap_err().is_domain());
        assert!(regular_polygon(4, f64::NAN).unwrap_err().is_invalid_argument());
        assert!(regular_polygon_tape(2, 1.0, Count::Finite(3), 1.0).is_err());
    }

    #[test]
    fn base_points_up() {
        let tape = regular_polygon_tape(3, 1.0, Count::Finite(1), 2.0).unwrap();
        let top = tape.base().vertices()[0];
        assert!(top.x.abs() < 1e-12);
        assert!(top.y > 0.0);
        assert!(is_convex(tape.base()));
    }

    #[test]
    fn count_and_constant_shift() {
        let seq: Vec<Polygon> = regular_polygon_tape(4, 2.0, Count::Finite(4), 1.0)
            .unwrap()
            .collect();
        assert_eq!(seq.len(), 4);
        let x0 = seq[0].vertices()[0].x;
        let d1 = seq[1].vertices()[0].x - x0;
        let d2 = seq[2].vertices()[0].x - seq[1].vertices()[0].x;
        let expected = seq[0].bounds().width() + 2.0;
        assert!((d1 - d2).abs() < 1e-9);
        assert!((d1 - expected).abs() < 1e-9);
    }

    #[test]
    fn gap_between_boxes_equals_step() {
        let tape = regular_polygon_tape(5, 0.75, Count::Finite(3), 3.0).unwrap();
        let boxes: Vec<_> = tape.map(|p| p.bounds()).collect();
        for pair in boxes.windows(2) {
            assert!((pair[1].min.x - pair[0].max.x - 0.75).abs() < 1e-9);
        }
    }

    #[test]
    fn size_hint_and_nth() {
        let mut tape = regular_polygon_tape(3, 1.0, Count::Finite(5), 1.0).unwrap();
        assert_eq!(tape.size_hint(), (5, Some(5)));
        let third = tape.nth(2).unwrap();
        assert_eq!(third, tape.polygon_at(2));
        assert_eq!(tape.size_hint(), (2, Some(2)));
        assert!(tape.nth(5).is_none());
        assert!(tape.next().is_none());

        let mut endless = regular_polygon_tape(3, 1.0, Count::Unbounded, 1.0).unwrap();
        assert_eq!(endless.size_hint().1, None);
        assert!(endless.nth(1_000_000).is_some());
    }

    #[test]
    fn empty_tape() {
        let mut tape = regular_polygon_tape(3, 1.0, Count::Finite(0), 1.0).unwrap();
        assert!(tape.next().is_none());
    }

    #[test]
    fn defaults() {
        let cfg = TapeCfg::new(6);
        assert_eq!(cfg.count, Count::Unbounded);
        assert_eq!(cfg.step, 1.0);
        assert_eq!(cfg.side_length, 1.0);
        assert!(TapeCfg { step: f64::NAN, ..cfg }.build().is_err());
    }
}
