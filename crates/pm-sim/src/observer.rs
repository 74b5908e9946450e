//! Observer trait for progress reporting and rendering hooks.

use pm_core::Tick;

use crate::Frame;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — frame printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_frame(&mut self, frame: &Frame<'_>) {
///         for (p, kind) in frame.markers() {
///             println!("{} {kind:?} {p}", frame.tick);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before positions move.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after positions move, every `config.frame_interval_ticks`
    /// ticks.  Also called for an empty roster; check `frame.is_empty()`.
    fn on_frame(&mut self, _frame: &Frame<'_>) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
