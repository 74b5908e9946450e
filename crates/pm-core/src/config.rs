//! Random-walk configuration.

use crate::{PmError, PmResult};

/// Parameters of the per-tick random walk applied to other people.
///
/// Each tick, each coordinate of each moving point gets a delta of
/// `k / steps_per_deg` degrees with `k` drawn uniformly from
/// `[-half_steps, half_steps)`.  The defaults give `{-50, …, 49} / 10000`.
///
/// The step is stored as an integer divisor rather than a fractional step
/// size: `k / 10000.0` is the closest `f64` to the intended value, while
/// `k * 0.0001` is not for about a third of the `k`s.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkConfig {
    /// Steps per degree.  Default: 10 000 (one step = 0.0001°).
    pub steps_per_deg: u32,

    /// Number of steps either side of zero.  Default: 50.
    pub half_steps: i32,

    /// `Some(seed)` makes the walk reproducible.  `None` draws from OS
    /// entropy, so two runs never match.
    pub seed: Option<u64>,
}

impl WalkConfig {
    pub const DEFAULT_STEPS_PER_DEG: u32 = 10_000;
    pub const DEFAULT_HALF_STEPS: i32 = 50;

    /// Default walk with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// Largest absolute per-axis displacement a single tick can produce.
    #[inline]
    pub fn max_delta(&self) -> f64 {
        self.half_steps as f64 / self.steps_per_deg as f64
    }

    /// Reject parameters that would make the walk meaningless or panic.
    pub fn validate(&self) -> PmResult<()> {
        if self.steps_per_deg == 0 {
            return Err(PmError::Config("steps_per_deg must be positive, got 0".into()));
        }
        if self.half_steps <= 0 {
            return Err(PmError::Config(format!(
                "half_steps must be positive, got {}",
                self.half_steps
            )));
        }
        Ok(())
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            steps_per_deg: Self::DEFAULT_STEPS_PER_DEG,
            half_steps:    Self::DEFAULT_HALF_STEPS,
            seed:          None,
        }
    }
}
