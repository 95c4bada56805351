//! Reproducible random point clouds (replay tokens + `StdRng`).
//!
//! Purpose
//! - Feed benches, property tests, and the `sample` CLI command with integer
//!   point sets that can be regenerated from `(seed, index)` alone.
//!
//! Model
//! - `Square`: coordinates uniform in `[-radius, radius]²`.
//! - `Disk`: rejection sampling of the same square, keeping lattice points with
//!   `x² + y² <= radius²`. Disk clouds have many more interior points than hull
//!   vertices, which is the typical workload.

use crate::cfg::COORD_MAX;
use crate::point::{Point, ORIGIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Region the points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Square,
    Disk,
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Half-width of the bounding square. Clamped to `[0, COORD_MAX]`.
    pub radius: i64,
    pub shape: CloudShape,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            radius: 1_000,
            shape: CloudShape::Disk,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

/// Draw `cfg.count` points (duplicates possible) for replay token `tok`.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r = cfg.radius.clamp(0, COORD_MAX);
    let r2 = (r as i128) * (r as i128);
    let mut out = Vec::with_capacity(cfg.count);
    while out.len() < cfg.count {
        let p = Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r));
        if cfg.shape == CloudShape::Disk && p.dist2(ORIGIN) > r2 {
            continue;
        }
        out.push(p);
    }
    out
}
