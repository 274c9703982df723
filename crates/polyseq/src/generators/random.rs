//! Random polygons by angular sweep.
//!
//! Model
//! - Center uniform in `[center_min, center_max]²`.
//! - `n` angles uniform in `[0, 2π)`, sorted ascending; `n` radii uniform in
//!   `[radius_min, radius_max]`. Vertex `i` is `center + r_i (cos θ_i, sin θ_i)`.
//! - Sorting the angles makes the boundary a monotone sweep around the center,
//!   so the polygon is simple (star-shaped w.r.t. the center) but usually not
//!   convex.
//!
//! Determinism
//! - Polygon `i` of a stream depends only on `(seed, i)` through
//!   `ReplayToken`, so any element can be regenerated without replaying the
//!   stream.

use std::f64::consts::TAU;
use std::iter::FusedIterator;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::geom2::Polygon;
use crate::seq::Count;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexCount {
    Fixed(usize),
    /// Uniform over `min..=max`.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn validate(&self) -> Result<()> {
        match *self {
            VertexCount::Fixed(n) if n < Polygon::MIN_VERTICES => Err(Error::domain(format!(
                "polygon needs at least 3 sides, got {n}"
            ))),
            VertexCount::Uniform { min, .. } if min < Polygon::MIN_VERTICES => Err(
                Error::domain(format!("minimum side count must be at least 3, got {min}")),
            ),
            VertexCount::Uniform { min, max } if min > max => Err(Error::invalid(format!(
                "side count range is empty: {min}..={max}"
            ))),
            _ => Ok(()),
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => rng.gen_range(min..=max),
        }
    }
}

/// Sampler configuration. The default draws 3 to 12 vertices around a
/// center in `[0, 50]²` with radii in `[0.1, 10]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomPolygonCfg {
    pub vertex_count: VertexCount,
    pub center_min: f64,
    pub center_max: f64,
    pub radius_min: f64,
    pub radius_max: f64,
}

impl Default for RandomPolygonCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            center_min: 0.0,
            center_max: 50.0,
            radius_min: 0.1,
            radius_max: 10.0,
        }
    }
}

impl RandomPolygonCfg {
    /// Default configuration with a fixed side count when given.
    pub fn with_sides(n_sides: Option<usize>) -> Self {
        let mut cfg = Self::default();
        if let Some(n) = n_sides {
            cfg.vertex_count = VertexCount::Fixed(n);
        }
        cfg
    }

    fn validate(&self) -> Result<()> {
        self.vertex_count.validate()?;
        let bounds = [
            self.center_min,
            self.center_max,
            self.radius_min,
            self.radius_max,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(Error::invalid("center and radius bounds must be finite"));
        }
        if self.center_min > self.center_max {
            return Err(Error::invalid("center_min <= center_max required"));
        }
        if self.radius_min <= 0.0 {
            return Err(Error::domain("radius_min must be > 0"));
        }
        if self.radius_min > self.radius_max {
            return Err(Error::invalid("radius_min <= radius_max required"));
        }
        Ok(())
    }
}

/// Replay token: `(seed, index)` addresses one polygon of a seeded stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw the polygon addressed by `tok`.
///
/// Rejects the same configurations as [`RandomPolygons::new`].
pub fn draw_random_polygon(cfg: &RandomPolygonCfg, tok: ReplayToken) -> Result<Polygon> {
    cfg.validate()?;
    Ok(draw_validated(cfg, tok))
}

fn draw_validated(cfg: &RandomPolygonCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let center = Vector2::new(
        rng.gen_range(cfg.center_min..=cfg.center_max),
        rng.gen_range(cfg.center_min..=cfg.center_max),
    );
    let n = cfg.vertex_count.sample(&mut rng);
    let mut angles: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..TAU)).collect();
    angles.sort_by(f64::total_cmp);
    let vertices = angles
        .into_iter()
        .map(|th| {
            let r = rng.gen_range(cfg.radius_min..=cfg.radius_max);
            center + Vector2::new(th.cos(), th.sin()) * r
        })
        .collect();
    Polygon::from_vertices_unchecked(vertices)
}

/// Finite stream of random polygons.
#[derive(Clone, Debug)]
pub struct RandomPolygons {
    cfg: RandomPolygonCfg,
    seed: u64,
    next_index: u64,
    count: u64,
}

impl RandomPolygons {
    /// Unbounded counts are rejected; a random stream always has a length.
    pub fn new(cfg: RandomPolygonCfg, count: Count, seed: u64) -> Result<Self> {
        cfg.validate()?;
        let count = count.limit().ok_or_else(|| {
            Error::invalid("random polygon sequences need a finite count")
        })?;
        Ok(Self {
            cfg,
            seed,
            next_index: 0,
            count: count as u64,
        })
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn cfg(&self) -> &RandomPolygonCfg {
        &self.cfg
    }

    /// Polygon `index` of this stream, independent of iteration state.
    pub fn regenerate(&self, index: u64) -> Polygon {
        draw_validated(
            &self.cfg,
            ReplayToken {
                seed: self.seed,
                index,
            },
        )
    }
}

impl Iterator for RandomPolygons {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        if self.next_index >= self.count {
            return None;
        }
        let poly = self.regenerate(self.next_index);
        self.next_index += 1;
        Some(poly)
    }

    fn nth(&mut self, n: usize) -> Option<Polygon> {
        self.next_index = self.next_index.saturating_add(n as u64).min(self.count);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count - self.next_index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RandomPolygons {}
impl FusedIterator for RandomPolygons {}

/// `count` random polygons with a fresh seed. `n_sides = None` draws 3 to 12
/// vertices per polygon.
pub fn random_polygon_sequence(
    count: Count,
    n_sides: Option<usize>,
) -> Result<RandomPolygons> {
    random_polygon_sequence_seeded(count, n_sides, rand::random())
}

/// Deterministic variant of [`random_polygon_sequence`].
pub fn random_polygon_sequence_seeded(
    count: Count,
    n_sides: Option<usize>,
    seed: u64,
) -> Result<RandomPolygons> {
    RandomPolygons::new(RandomPolygonCfg::with_sides(n_sides), count, seed)
}
