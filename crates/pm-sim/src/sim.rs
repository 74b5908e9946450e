//! The `Sim` struct and its frame loop.

use pm_core::{TickClock, Tick};
use pm_roster::{Mover, RandomWalk, Roster};
use tracing::debug;

use crate::{Frame, SimConfig, SimObserver, SimResult};

/// Owns a roster and advances it one frame at a time.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or [`Sim::with_roster`].
pub struct Sim<M: Mover = RandomWalk> {
    pub config: SimConfig,

    /// Tracks the current tick and elapsed animation time.
    pub clock: TickClock,

    roster: Roster<M>,
}

impl<M: Mover> Sim<M> {
    /// Wrap an existing roster.  The roster's own mover drives movement, so
    /// `config.walk` is neither read nor validated here.
    pub fn with_roster(config: SimConfig, roster: Roster<M>) -> SimResult<Self> {
        config.validate_timing()?;
        Ok(Self {
            clock: config.make_clock(),
            config,
            roster,
        })
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn roster(&self) -> &Roster<M> {
        &self.roster
    }

    /// Mutable access for placing the user or adding people between ticks.
    pub fn roster_mut(&mut self) -> &mut Roster<M> {
        &mut self.roster
    }

    /// Snapshot of the roster at the current tick.
    pub fn frame(&self) -> Frame<'_> {
        Frame::new(self.now(), &self.roster)
    }

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        debug!(
            from = self.now().0,
            to = self.config.total_ticks,
            people = self.roster.people_count(),
            "sim start"
        );
        while self.now() < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.now());
        debug!(ticks = self.now().0, elapsed_ms = self.clock.elapsed_ms(), "sim end");
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.now();
        observer.on_tick_start(now);
        self.roster.update_positions();
        let every = self.config.frame_interval_ticks;
        if every > 0 && now.0.is_multiple_of(every) {
            observer.on_frame(&Frame::new(now, &self.roster));
        }
        self.clock.advance();
    }
}
