//! Random source for the position walk.
//!
//! # Reproducibility
//!
//! A `WalkRng` is either seeded (`WalkRng::new(seed)`), in which case the
//! same seed always yields the same sequence of steps, or drawn from OS
//! entropy (`WalkRng::from_entropy()`), which is the default for a live map.
//! Neither is cryptographically secure; none of this needs to be.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// RNG driving the per-tick random walk.
///
/// Owned by a single walker; never shared across threads.
pub struct WalkRng(SmallRng);

impl WalkRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        WalkRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        WalkRng(SmallRng::from_entropy())
    }

    /// `Some(seed)` → [`new`](Self::new), `None` → [`from_entropy`](Self::from_entropy).
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Uniform integer step count in `[-half_steps, half_steps)`.
    ///
    /// `half_steps` must be non-zero; [`WalkConfig::validate`] guarantees it
    /// for configured walks.
    ///
    /// [`WalkConfig::validate`]: crate::WalkConfig::validate
    #[inline]
    pub fn step(&mut self, half_steps: i32) -> i32 {
        self.0.gen_range(-half_steps..half_steps)
    }
}

impl std::fmt::Debug for WalkRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("WalkRng")
    }
}
