//! Polygon sequence generators.
//!
//! - `tape`: congruent regular polygons marching along +x, finite or
//!   unbounded.
//! - `random`: finite streams of random star-shaped polygons, reproducible
//!   through a seed and replay token.
//!
//! Both are plain iterators; all parameter checks happen in the constructors.

pub mod random;
pub mod tape;

pub use random::{
    draw_random_polygon, random_polygon_sequence, random_polygon_sequence_seeded,
    RandomPolygonCfg, RandomPolygons, ReplayToken, VertexCount,
};
pub use tape::{regular_polygon, regular_polygon_tape, RegularTape, TapeCfg};
