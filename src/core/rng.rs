//! Deterministic point outcome generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical point sequence
//! - **Forkable**: Independent streams, e.g. one per simulated match
//!
//! ```
//! use tennis_points::core::PointRng;
//!
//! let mut rng = PointRng::new(42);
//! let points = rng.points(10, 0.65);
//!
//! let mut again = PointRng::new(42);
//! assert_eq!(points, again.points(10, 0.65));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded stream of "server won the point" outcomes.
#[derive(Clone, Debug)]
pub struct PointRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl PointRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Draw one point: `true` with probability `p_server` (server wins).
    ///
    /// # Panics
    ///
    /// Panics if `p_server` is outside `[0, 1]`.
    pub fn point(&mut self, p_server: f64) -> bool {
        self.inner.gen_bool(p_server)
    }

    /// Draw `count` points.
    pub fn points(&mut self, count: usize, p_server: f64) -> Vec<bool> {
        (0..count).map(|_| self.point(p_server)).collect()
    }
}
