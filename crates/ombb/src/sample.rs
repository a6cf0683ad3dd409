//! Seeded random point clouds for property tests and benchmarks.
//!
//! Model
//! - Draw `n` points from a shape (disc, rotated ellipse, jittered grid or a
//!   segment), then scale and translate.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the i-th cloud of a run can be regenerated in isolation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Region the points are drawn from (before `scale`/`center`).
#[derive(Clone, Copy, Debug)]
pub enum CloudShape {
    /// Uniform in the unit disc.
    Disc,
    /// Unit disc stretched by `aspect` along x, then rotated by `angle` radians.
    Ellipse { aspect: f64, angle: f64 },
    /// Lattice points of a `side × side` grid with relative jitter `jitter`.
    /// With zero jitter many points are collinear, which exercises the hull tie-break.
    Grid { side: usize, jitter: f64 },
    /// Points on the segment from (−1, −1) to (1, 1): no enclosed area.
    Segment,
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    pub shape: CloudShape,
    pub scale: f64,
    pub center: Point,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(64),
            shape: CloudShape::Ellipse {
                aspect: 3.0,
                angle: 0.4,
            },
            scale: 100.0,
            center: Point::zeros(),
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
        // SplitMix64-style mixing, cheap and stable.
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

    #[inline]
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }
}

/// Draw one cloud. Grid shapes ignore `count` and return `side²` points.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let raw: Vec<Point> = match cfg.shape {
        CloudShape::Disc => {
            let n = cfg.count.sample(&mut rng);
            (0..n).map(|_| unit_disc(&mut rng)).collect()
        }
        CloudShape::Ellipse { aspect, angle } => {
            let n = cfg.count.sample(&mut rng);
            let (s, c) = angle.sin_cos();
            (0..n)
                .map(|_| {
                    let p = unit_disc(&mut rng);
                    let x = p.x * aspect;
                    Point::new(c * x - s * p.y, s * x + c * p.y)
                })
                .collect()
        }
        CloudShape::Grid { side, jitter } => {
            let step = 2.0 / (side.max(2) - 1) as f64;
            let mut pts = Vec::with_capacity(side * side);
            for i in 0..side {
                for j in 0..side {
                    let mut p = Point::new(-1.0 + i as f64 * step, -1.0 + j as f64 * step);
                    if jitter > 0.0 {
                        p.x += (rng.gen::<f64>() * 2.0 - 1.0) * jitter * step;
                        p.y += (rng.gen::<f64>() * 2.0 - 1.0) * jitter * step;
                    }
                    pts.push(p);
                }
            }
            pts
        }
        CloudShape::Segment => {
            let n = cfg.count.sample(&mut rng);
            (0..n)
                .map(|_| {
                    let t = rng.gen_range(-1.0..=1.0);
                    Point::new(t, t)
                })
                .collect()
        }
    };
    raw.into_iter().map(|p| p * cfg.scale + cfg.center).collect()
}

/// Rejection sampling in the unit disc.
fn unit_disc<R: Rng>(rng: &mut R) -> Point {
    loop {
        let p = Point::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        if p.norm_squared() <= 1.0 {
            return p;
        }
    }
}
