//! Frame loop configuration.

use pm_core::{TickClock, Tick, WalkConfig};

use crate::{SimError, SimResult};

/// Top-level driver configuration.
///
/// Typically built in code; with the `serde` feature a host can load it from
/// JSON instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Milliseconds per frame.  Default: 50.
    pub tick_interval_ms: u32,

    /// Frames to run in [`Sim::run`][crate::Sim::run].  Default: 200 (10 s).
    pub total_ticks: u64,

    /// Emit `on_frame` every N ticks.  1 = every tick, 0 = never.
    pub frame_interval_ticks: u64,

    /// Random-walk parameters for other people.
    pub walk: WalkConfig,
}

impl SimConfig {
    /// Defaults with a reproducible walk.
    pub fn seeded(seed: u64) -> Self {
        Self { walk: WalkConfig::seeded(seed), ..Self::default() }
    }

    /// The tick at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> TickClock {
        TickClock::new(self.tick_interval_ms)
    }

    /// Check the whole config, walk included.
    pub fn validate(&self) -> SimResult<()> {
        self.validate_timing()?;
        self.walk.validate()?;
        Ok(())
    }

    /// Check only the frame loop settings.  Used when the roster brings its
    /// own mover and `walk` is never read.
    pub fn validate_timing(&self) -> SimResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(SimError::ZeroTickInterval);
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms:     TickClock::DEFAULT_INTERVAL_MS,
            total_ticks:          200,
            frame_interval_ticks: 1,
            walk:                 WalkConfig::default(),
        }
    }
}
