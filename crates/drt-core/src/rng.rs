//! Random streams for request generation and start-node draws.
//!
//! Nothing in the harness touches a global generator.  Each sweep owns one
//! `SimRng` and lends it (`&mut`) to the start-node draw and to the arrival
//! process of every grid point, so a sweep's draws depend only on its own
//! seed.
//!
//! An orchestrated run derives the seed of experiment `i` from a master seed:
//!
//! ```text
//! seed_i = master ^ (i * 0x9e37_79b9_7f4a_7c15)
//! ```
//!
//! The multiplier (2^64 / golden ratio) scatters neighbouring indices across
//! the seed space, so experiments can run in any order, or concurrently, and
//! still reproduce.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Distribution, Standard};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const STREAM_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable generator owned by one sweep.  Not shared between threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// OS-seeded; draws differ on every run.
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }

    /// Independent stream `stream` of the run seeded with `master`.
    pub fn for_stream(master: u64, stream: u64) -> Self {
        Self::new(master ^ stream.wrapping_mul(STREAM_SPREAD))
    }

    /// Underlying generator, for `rand` APIs that take an `Rng`
    /// (`index::sample`, `Distribution::sample`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.sample(Standard)
    }

    /// Uniform draw from `range`.
    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }
}
