//! Tick counter and frame clock.
//!
//! A tick is one invocation of the position update, conceptually one
//! animation frame.  `TickClock` maps ticks to elapsed milliseconds:
//!
//!   elapsed_ms = tick * tick_interval_ms
//!
//! The default interval is 50 ms (20 frames per second), matching the rate
//! a browser host polls the roster at.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to elapsed wall time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// Milliseconds between frames.  Default: 50.
    pub tick_interval_ms: u32,
    /// The current tick, advanced by `TickClock::advance()` each frame.
    pub current_tick: Tick,
}

impl TickClock {
    pub const DEFAULT_INTERVAL_MS: u32 = 50;

    pub fn new(tick_interval_ms: u32) -> Self {
        Self {
            tick_interval_ms,
            current_tick: Tick::ZERO,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Milliseconds of animation elapsed since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_interval_ms as u64
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS)
    }
}
