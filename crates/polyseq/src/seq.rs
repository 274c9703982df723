//! Lazy polygon sequences.
//!
//! A polygon sequence is any `Iterator<Item = Polygon>`: the consumer pulls
//! one polygon at a time and production happens only on demand. Generators
//! may be unbounded; those must be drained through a bounded adapter
//! (`window`, `take`) before anything that consumes the whole sequence.
//!
//! - `Count`: declared length of a generated sequence, with an explicit
//!   `Unbounded` variant.
//! - `window`: index-range slice `[start, stop)` with a step.
//! - `PolygonSeqExt`: transforms and predicates as lazy adapters. Parameters
//!   are checked when the adapter is built, so iteration itself cannot fail.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::{ensure_finite, Error, Result};
use crate::geom2::{
    area_less_than, has_vertex_at, is_convex, point_inside, reflect, shares_vertex_with,
    shortest_side_less_than, transform, transform::shift, Affine2, Axis, Point, Polygon,
};

/// Number of polygons a generator yields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Count {
    Finite(usize),
    Unbounded,
}

impl Count {
    /// Parse the numeric encoding where `+inf` means unbounded.
    ///
    /// Negative or NaN → `InvalidArgument`; a finite value with a fractional
    /// part → `Domain`.
    pub fn from_f64(value: f64) -> Result<Self> {
        if value.is_nan() || value < 0.0 {
            return Err(Error::invalid(format!(
                "count must be a non-negative whole number or unbounded, got {value}"
            )));
        }
        if value.is_infinite() {
            return Ok(Count::Unbounded);
        }
        if value.fract() != 0.0 {
            return Err(Error::domain(format!("count must be integral, got {value}")));
        }
        if value > usize::MAX as f64 {
            return Err(Error::invalid(format!("count {value} does not fit in usize")));
        }
        Ok(Count::Finite(value as usize))
    }

    /// `Some(n)` for finite counts.
    #[inline]
    pub fn limit(self) -> Option<usize> {
        match self {
            Count::Finite(n) => Some(n),
            Count::Unbounded => None,
        }
    }

    #[inline]
    pub fn is_unbounded(self) -> bool {
        matches!(self, Count::Unbounded)
    }
}

impl From<usize> for Count {
    #[inline]
    fn from(n: usize) -> Self {
        Count::Finite(n)
    }
}

impl FromStr for Count {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "inf" | "unbounded" => Ok(Count::Unbounded),
            other => {
                let v: f64 = other
                    .parse()
                    .map_err(|_| Error::invalid(format!("count {other:?} is not a number")))?;
                Count::from_f64(v)
            }
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Finite(n) => write!(f, "{n}"),
            Count::Unbounded => f.write_str("inf"),
        }
    }
}

/// Lazy slice of an iterator by index: `start`, `start + step`, ... while
/// below `stop` (`None` = no upper bound).
pub fn window<I: Iterator>(
    iter: I,
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> Result<Window<I>> {
    if step == 0 {
        return Err(Error::invalid("window step must be at least 1"));
    }
    Ok(Window {
        inner: iter,
        consumed: 0,
        next: start,
        stop,
        step,
        done: false,
    })
}

/// Iterator returned by [`window`].
#[derive(Clone, Debug)]
pub struct Window<I> {
    inner: I,
    /// Number of items pulled from `inner` so far.
    consumed: usize,
    /// Index (in `inner`) of the next item to yield.
    next: usize,
    stop: Option<usize>,
    step: usize,
    done: bool,
}

impl<I: Iterator> Iterator for Window<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done || self.stop.is_some_and(|stop| self.next >= stop) {
            self.done = true;
            return None;
        }
        let Some(item) = self.inner.nth(self.next - self.consumed) else {
            self.done = true;
            return None;
        };
        self.consumed = self.next + 1;
        match self.next.checked_add(self.step) {
            Some(n) => self.next = n,
            None => self.done = true,
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.inner.size_hint();
        let remaining = |end: usize| -> usize {
            if end <= self.next {
                0
            } else {
                (end - self.next - 1) / self.step + 1
            }
        };
        let inner_end_lo = self.consumed.saturating_add(lo);
        let lower = remaining(self.stop.map_or(inner_end_lo, |s| s.min(inner_end_lo)));
        let upper = match (self.stop, hi.map(|h| self.consumed.saturating_add(h))) {
            (Some(s), Some(h)) => Some(remaining(s.min(h))),
            (Some(s), None) => Some(remaining(s)),
            (None, Some(h)) => Some(remaining(h)),
            (None, None) => None,
        };
        (lower, upper)
    }
}

impl<I: Iterator> FusedIterator for Window<I> {}

/// Lazy transforms and filters on polygon sequences.
pub trait PolygonSeqExt: Iterator<Item = Polygon> + Sized {
    fn translated(self, dx: f64, dy: f64) -> Result<impl Iterator<Item = Polygon>> {
        let dx = ensure_finite("dx", dx)?;
        let dy = ensure_finite("dy", dy)?;
        Ok(self.map(move |p| shift(&p, dx, dy)))
    }

    fn rotated(self, angle_degrees: f64) -> Result<impl Iterator<Item = Polygon>> {
        Ok(self.transformed(Affine2::rotation_deg(angle_degrees)?))
    }

    fn reflected(self, axis: Axis) -> impl Iterator<Item = Polygon> {
        self.map(move |p| reflect(&p, axis))
    }

    /// Homothety about `center` with factor `k`.
    fn scaled(self, center: Point, k: f64) -> Result<impl Iterator<Item = Polygon>> {
        Ok(self.transformed(Affine2::homothety(center, k)?))
    }

    fn stretched(self, cx: f64, cy: f64) -> Result<impl Iterator<Item = Polygon>> {
        Ok(self.transformed(Affine2::stretch(cx, cy)?))
    }

    fn transformed(self, f: Affine2) -> impl Iterator<Item = Polygon> {
        self.map(move |p| transform(&p, &f))
    }

    fn convex_only(self) -> impl Iterator<Item = Polygon> {
        self.filter(is_convex)
    }

    /// Keep convex polygons that contain `point` (boundary included).
    fn containing(self, point: Point) -> Result<impl Iterator<Item = Polygon>> {
        ensure_finite("point.x", point.x)?;
        ensure_finite("point.y", point.y)?;
        Ok(self.filter(move |p| point_inside(p, &point)))
    }

    fn area_below(self, threshold: f64) -> Result<impl Iterator<Item = Polygon>> {
        let t = ensure_finite("area threshold", threshold)?;
        Ok(self.filter(move |p| area_less_than(p, t)))
    }

    fn shortest_side_below(self, threshold: f64) -> Result<impl Iterator<Item = Polygon>> {
        let t = ensure_finite("side threshold", threshold)?;
        Ok(self.filter(move |p| shortest_side_less_than(p, t)))
    }

    fn with_vertex(self, point: Point) -> impl Iterator<Item = Polygon> {
        self.filter(move |p| has_vertex_at(p, &point))
    }

    fn sharing_vertex_with(self, points: Vec<Point>) -> impl Iterator<Item = Polygon> {
        self.filter(move |p| shares_vertex_with(p, &points))
    }

    fn window(self, start: usize, stop: Option<usize>, step: usize) -> Result<Window<Self>> {
        window(self, start, stop, step)
    }
}

impl<I: Iterator<Item = Polygon>> PolygonSeqExt for I {}
