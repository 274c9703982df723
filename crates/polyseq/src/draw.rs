//! Drawing contract for plotting back ends.
//!
//! The crate does not render anything. A back end implements `Canvas`;
//! `draw` slices a window out of a polygon sequence, hands each polygon over
//! with its style, and sets the axis limits to the padded union of the
//! polygons' bounding boxes. Colors, colormaps and figure sizes are opaque
//! values passed through to the back end.

use crate::error::{Error, Result};
use crate::geom2::{Bounds2, Polygon};
use crate::seq::window;

/// Margin added on every side of the drawn polygons' bounding box.
pub const LIMIT_MARGIN: f64 = 1.0;

/// Style options understood by back ends.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotStyle {
    /// Overrides the colormap fill when set.
    pub fill_color: Option<String>,
    /// Outline color; the back end picks one from the colormap when unset.
    pub edge_color: Option<String>,
    pub alpha: f64,
    pub fill: bool,
    pub colormap: String,
    pub grid: bool,
    /// Figure size in inches, used when the back end creates a figure.
    pub figsize: (f64, f64),
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            fill_color: None,
            edge_color: None,
            alpha: 0.8,
            fill: true,
            colormap: "plasma".to_string(),
            grid: false,
            figsize: (7.0, 7.0),
        }
    }
}

impl PlotStyle {
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::invalid(format!(
                "alpha must lie in [0, 1], got {}",
                self.alpha
            )));
        }
        let (w, h) = self.figsize;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(Error::invalid(format!(
                "figsize must be positive, got ({w}, {h})"
            )));
        }
        Ok(())
    }
}

/// Per-polygon drawing instructions.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch<'a> {
    pub style: &'a PlotStyle,
    /// Position in the colormap, `index / count`, in `[0, 1)`.
    pub color_position: f64,
}

/// Plotting back end.
pub trait Canvas {
    fn add_patch(&mut self, polygon: &Polygon, patch: &Patch<'_>);
    fn set_limits(&mut self, limits: Bounds2);
}

/// Draw polygons `start, start + step, ...` below `stop` and return how many
/// were drawn. An empty window is a `Domain` error.
pub fn draw<C, I>(
    canvas: &mut C,
    seq: I,
    start: usize,
    stop: Option<usize>,
    step: usize,
    style: &PlotStyle,
) -> Result<usize>
where
    C: Canvas + ?Sized,
    I: IntoIterator<Item = Polygon>,
{
    style.validate()?;
    let polygons: Vec<Polygon> = window(seq.into_iter(), start, stop, step)?.collect();
    let limits = polygons
        .iter()
        .map(Polygon::bounds)
        .reduce(Bounds2::union)
        .ok_or_else(|| Error::domain("nothing to draw in the requested window"))?;
    let count = polygons.len();
    for (i, poly) in polygons.iter().enumerate() {
        let patch = Patch {
            style,
            color_position: i as f64 / count as f64,
        };
        canvas.add_patch(poly, &patch);
    }
    canvas.set_limits(limits.padded(LIMIT_MARGIN));
    Ok(count)
}
