//! The `Mover` trait: how non-user points move each tick.

use pm_core::{GeoPoint, PmResult, WalkConfig, WalkRng};

/// Pluggable per-tick movement for the other people in a roster.
///
/// [`Roster::update_positions`][crate::Roster::update_positions] hands the
/// mover exactly the slice of other people; the user point is never part of
/// it, so implementations cannot disturb the user even by accident.
pub trait Mover {
    fn move_points(&mut self, points: &mut [GeoPoint]);
}

/// Uniform random walk on a grid of `1 / steps_per_deg`-degree steps.
///
/// Latitude and longitude each get an independent delta of
/// `k / steps_per_deg` with `k` uniform in `[-half_steps, half_steps)`.
#[derive(Debug)]
pub struct RandomWalk {
    steps_per_deg: f64,
    half_steps:    i32,
    rng:           WalkRng,
}

impl RandomWalk {
    /// Build from a validated config.
    ///
    /// # Errors
    ///
    /// Returns `PmError::Config` if `config` fails [`WalkConfig::validate`].
    pub fn new(config: &WalkConfig) -> PmResult<Self> {
        config.validate()?;
        Ok(Self {
            steps_per_deg: config.steps_per_deg as f64,
            half_steps:    config.half_steps,
            rng:           WalkRng::from_seed_option(config.seed),
        })
    }

    /// Default step parameters with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(WalkRng::new(seed))
    }

    /// Default step parameters driven by a caller-supplied RNG.
    pub fn with_rng(rng: WalkRng) -> Self {
        Self {
            steps_per_deg: WalkConfig::DEFAULT_STEPS_PER_DEG as f64,
            half_steps:    WalkConfig::DEFAULT_HALF_STEPS,
            rng,
        }
    }

    /// Largest absolute per-axis displacement of one tick.
    #[inline]
    pub fn max_delta(&self) -> f64 {
        self.half_steps as f64 / self.steps_per_deg
    }

    #[inline]
    fn delta(&mut self) -> f64 {
        self.rng.step(self.half_steps) as f64 / self.steps_per_deg
    }
}

impl Default for RandomWalk {
    /// Default steps, seeded from OS entropy.
    fn default() -> Self {
        Self::with_rng(WalkRng::from_entropy())
    }
}

impl Mover for RandomWalk {
    fn move_points(&mut self, points: &mut [GeoPoint]) {
        for p in points {
            let d_lat = self.delta();
            let d_lon = self.delta();
            p.nudge(d_lat, d_lon);
        }
    }
}

/// A [`Mover`] that leaves every point where it is.
///
/// Useful in tests and for hosts that want a frozen map.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stationary;

impl Mover for Stationary {
    fn move_points(&mut self, _points: &mut [GeoPoint]) {}
}
