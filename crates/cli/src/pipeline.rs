//! Turns the shared command-line flags into an adapter chain.

use anyhow::{Context, Result};
use polyseq::{Axis, Point, Polygon, PolygonSeqExt};

use crate::args::PipelineArgs;

pub type PolygonStream = Box<dyn Iterator<Item = Polygon>>;

/// Wrap `seq` in the transforms, filters and window selected by `args`.
///
/// All parameters are checked here, before the first polygon is produced.
pub fn build<I>(seq: I, args: &PipelineArgs) -> Result<PolygonStream>
where
    I: Iterator<Item = Polygon> + 'static,
{
    tracing::debug!(?args, "pipeline");
    let mut seq: PolygonStream = Box::new(seq);

    if let Some(p) = args.translate {
        seq = Box::new(seq.translated(p.0, p.1).context("--translate")?);
    }
    if let Some(angle) = args.rotate {
        seq = Box::new(seq.rotated(angle).context("--rotate")?);
    }
    if let Some(axis) = &args.reflect {
        let axis: Axis = axis.parse().context("--reflect")?;
        seq = Box::new(seq.reflected(axis));
    }
    if let Some(h) = args.homothety {
        seq = Box::new(seq.scaled(Point::new(h.cx, h.cy), h.k).context("--homothety")?);
    }
    if let Some(p) = args.stretch {
        seq = Box::new(seq.stretched(p.0, p.1).context("--stretch")?);
    }

    if args.convex {
        seq = Box::new(seq.convex_only());
    }
    if let Some(p) = args.contains {
        seq = Box::new(seq.containing(Point::new(p.0, p.1)).context("--contains")?);
    }
    if let Some(t) = args.area_lt {
        seq = Box::new(seq.area_below(t).context("--area-lt")?);
    }
    if let Some(t) = args.shortest_side_lt {
        seq = Box::new(seq.shortest_side_below(t).context("--shortest-side-lt")?);
    }
    if let Some(p) = args.vertex {
        seq = Box::new(seq.with_vertex(Point::new(p.0, p.1)));
    }

    let windowed = seq
        .window(args.start, args.stop, args.every)
        .context("--every")?;
    Ok(Box::new(windowed))
}
