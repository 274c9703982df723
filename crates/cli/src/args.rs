//! Command-line argument types shared by the generator subcommands.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use serde::Serialize;

/// `X,Y` pair of finite numbers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pair(pub f64, pub f64);

impl FromStr for Pair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match parse_numbers(s)?.as_slice() {
            &[a, b] => Ok(Pair(a, b)),
            other => Err(format!("expected X,Y, got {} value(s)", other.len())),
        }
    }
}

/// `CX,CY,K` homothety parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scaling {
    pub cx: f64,
    pub cy: f64,
    pub k: f64,
}

impl FromStr for Scaling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match parse_numbers(s)?.as_slice() {
            &[cx, cy, k] => Ok(Scaling { cx, cy, k }),
            other => Err(format!("expected CX,CY,K, got {} value(s)", other.len())),
        }
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("{part:?} is not a number"))
        })
        .collect()
}

/// Transforms, filters, window and output shared by `tape` and `random`.
///
/// Transforms run in the order listed here, then filters, then the window.
#[derive(Args, Clone, Debug, Serialize)]
pub struct PipelineArgs {
    /// Shift by DX,DY
    #[arg(long, allow_hyphen_values = true)]
    pub translate: Option<Pair>,
    /// Rotate counter-clockwise about the origin (degrees)
    #[arg(long, allow_hyphen_values = true)]
    pub rotate: Option<f64>,
    /// Mirror across an axis: x, y, 0 or 1
    #[arg(long)]
    pub reflect: Option<String>,
    /// Scale about CX,CY by K
    #[arg(long, allow_hyphen_values = true)]
    pub homothety: Option<Scaling>,
    /// Scale x and y independently by CX,CY
    #[arg(long, allow_hyphen_values = true)]
    pub stretch: Option<Pair>,

    /// Keep convex polygons only
    #[arg(long)]
    pub convex: bool,
    /// Keep convex polygons containing X,Y
    #[arg(long, allow_hyphen_values = true)]
    pub contains: Option<Pair>,
    /// Keep polygons with area below T
    #[arg(long)]
    pub area_lt: Option<f64>,
    /// Keep polygons whose shortest side is below T
    #[arg(long)]
    pub shortest_side_lt: Option<f64>,
    /// Keep polygons with a vertex exactly at X,Y
    #[arg(long, allow_hyphen_values = true)]
    pub vertex: Option<Pair>,

    /// First index to keep
    #[arg(long, default_value_t = 0)]
    pub start: usize,
    /// Stop before this index (required for unbounded tapes)
    #[arg(long)]
    pub stop: Option<usize>,
    /// Keep every N-th polygon of the window
    #[arg(long, default_value_t = 1)]
    pub every: usize,

    /// Print one reduction instead of the polygons:
    /// nearest, max-side, min-area, perimeter, area
    #[arg(long)]
    pub aggregate: Option<String>,
    /// Write polygons to a .json file or a .csv measurement table
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl Default for PipelineArgs {
    /// Same values as an empty command line.
    fn default() -> Self {
        Self {
            translate: None,
            rotate: None,
            reflect: None,
            homothety: None,
            stretch: None,
            convex: false,
            contains: None,
            area_lt: None,
            shortest_side_lt: None,
            vertex: None,
            start: 0,
            stop: None,
            every: 1,
            aggregate: None,
            out: None,
        }
    }
}

impl PipelineArgs {
    /// True if any flag can drop polygons before the window.
    pub fn has_filters(&self) -> bool {
        self.convex
            || self.contains.is_some()
            || self.area_lt.is_some()
            || self.shortest_side_lt.is_some()
            || self.vertex.is_some()
    }
}
