//! Lazy sequences of simple planar polygons.
//!
//! Layout
//! - `geom2`: polygon values, measurements, transforms and predicates.
//! - `generators`: regular-polygon tapes and random polygon streams.
//! - `seq`: `Count`, index windows, and lazy adapters over any polygon
//!   iterator.
//! - `aggregate`: reductions that drain a finite sequence.
//! - `draw`: the contract a plotting back end implements.
//!
//! Sequences are ordinary iterators. Generators may be unbounded; bound them
//! with `window`/`take` before any reduction.

pub mod aggregate;
pub mod draw;
pub mod error;
pub mod generators;
pub mod geom2;
pub mod seq;

pub use error::{Error, Result};
pub use geom2::{Affine2, Axis, Bounds2, Point, Polygon};
pub use seq::{window, Count, PolygonSeqExt};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::aggregate::{
        max_side, min_area, nearest_to_origin, total_area, total_perimeter, Aggregate,
    };
    pub use crate::draw::{draw, Canvas, Patch, PlotStyle};
    pub use crate::generators::{
        random_polygon_sequence, random_polygon_sequence_seeded, regular_polygon,
        regular_polygon_tape, RandomPolygonCfg, RandomPolygons, RegularTape, TapeCfg,
        VertexCount,
    };
    pub use crate::geom2::{
        area, distance, homothety, is_convex, point_inside, pseudo_scalar, reflect, rotate,
        sides, stretch, translate, Affine2, Axis, Bounds2, Point, Polygon,
    };
    pub use crate::seq::{window, Count, PolygonSeqExt};
    pub use crate::{Error, Result};
    pub use nalgebra::Vector2 as Vec2;
}
