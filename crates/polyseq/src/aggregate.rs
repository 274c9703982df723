//! Reductions over a polygon sequence.
//!
//! Every reduction drains its input. Pass only finite sequences; an
//! unbounded generator must be bounded first (`window`, `take`). An input
//! that yields no polygon is a `Domain` error for every reduction, sums
//! included.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geom2::{area, longest_side, perimeter, Polygon};

fn reduce<I, M, C>(seq: I, measure: M, combine: C) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Borrow<Polygon>,
    M: Fn(&Polygon) -> f64,
    C: Fn(f64, f64) -> f64,
{
    seq.into_iter()
        .map(|p| measure(p.borrow()))
        .reduce(combine)
        .ok_or_else(|| Error::domain("empty sequence"))
}

/// Smallest distance from the origin to any vertex.
pub fn nearest_to_origin<I>(seq: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Borrow<Polygon>,
{
    reduce(
        seq,
        |p| p.vertices().iter().map(|v| v.norm()).fold(f64::INFINITY, f64::min),
        f64::min,
    )
}

/// Longest single edge.
pub fn max_side<I>(seq: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Borrow<Polygon>,
{
    reduce(seq, longest_side, f64::max)
}

/// Smallest polygon area.
pub fn min_area<I>(seq: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Borrow<Polygon>,
{
    reduce(seq, area, f64::min)
}

/// Sum of perimeters.
pub fn total_perimeter<I>(seq: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Borrow<Polygon>,
{
    reduce(seq, perimeter, |a, b| a + b)
}

/// Sum of areas.
pub fn total_area<I>(seq: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Borrow<Polygon>,
{
    reduce(seq, area, |a, b| a + b)
}

/// A reduction chosen at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aggregate {
    NearestToOrigin,
    MaxSide,
    MinArea,
    TotalPerimeter,
    TotalArea,
}

impl Aggregate {
    pub const ALL: [Aggregate; 5] = [
        Aggregate::NearestToOrigin,
        Aggregate::MaxSide,
        Aggregate::MinArea,
        Aggregate::TotalPerimeter,
        Aggregate::TotalArea,
    ];

    pub fn apply<I>(self, seq: I) -> Result<f64>
    where
        I: IntoIterator,
        I::Item: Borrow<Polygon>,
    {
        match self {
            Aggregate::NearestToOrigin => nearest_to_origin(seq),
            Aggregate::MaxSide => max_side(seq),
            Aggregate::MinArea => min_area(seq),
            Aggregate::TotalPerimeter => total_perimeter(seq),
            Aggregate::TotalArea => total_area(seq),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Aggregate::NearestToOrigin => "nearest",
            Aggregate::MaxSide => "max-side",
            Aggregate::MinArea => "min-area",
            Aggregate::TotalPerimeter => "perimeter",
            Aggregate::TotalArea => "area",
        }
    }
}

impl FromStr for Aggregate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Aggregate::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::invalid(format!("unknown aggregate {s:?}")))
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
