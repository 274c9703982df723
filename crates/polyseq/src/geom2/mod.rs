//! Planar polygon geometry.
//!
//! Purpose
//! - Value types (`Point`, `Polygon`, `Bounds2`, `Axis`, `Affine2`).
//! - Measurements (`primitives`), transforms (`transform`), predicates
//!   (`filters`).
//!
//! Conventions
//! - Ordinary `f64` arithmetic, no tolerances. Comparisons that decide a
//!   predicate (`==`, `<`, sign of a cross product) are exact.
//! - Either winding is accepted everywhere; nothing reorders vertices.
//!
//! Code cross-refs: `crate::seq` lifts transforms and predicates to lazy
//! sequences; `crate::aggregate` reduces sequences with the primitives.

pub mod filters;
pub mod primitives;
pub mod transform;
mod types;

pub use filters::{
    area_less_than, has_vertex_at, is_convex, point_inside, shares_vertex_with,
    shortest_side_less_than,
};
pub use primitives::{
    area, distance, longest_side, perimeter, pseudo_scalar, shortest_side, sides,
};
pub use transform::{homothety, reflect, rotate, stretch, transform, translate};
pub use types::{Affine2, Axis, Bounds2, Point, Polygon};
