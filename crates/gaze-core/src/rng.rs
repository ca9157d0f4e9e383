//! Deterministic engine-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! There is exactly one pair of eyes, so one `GazeRng` (seeded from
//! `EngineConfig::seed`) feeds every stochastic choice in the engine:
//! aversion intervals, aversion targets, and micro-saccade jitter.  The
//! engine owns it and passes it `&mut` into behaviors each tick, which keeps
//! call order — and therefore the whole run — reproducible from the seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for all stochastic gaze timing and jitter.
pub struct GazeRng(SmallRng);

impl GazeRng {
    pub fn new(seed: u64) -> Self {
        GazeRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
