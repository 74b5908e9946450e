//! `pm-sim` — frame loop driver for the people roster.
//!
//! A browser page polls the roster on a timer: advance the walk, then read
//! the count, the user flag, and the coordinates, and redraw.  `Sim` runs the
//! same loop natively so hosts and tests can drive it without a page.
//!
//! # Frame loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① on_tick_start(tick)
//!   ② roster.update_positions()          others move, user stays
//!   ③ on_frame(Frame)                    every frame_interval_ticks
//!   ④ clock.advance()
//! on_sim_end(final_tick)
//! ```
//!
//! Between calls to `run_ticks` the host may place the user or add people
//! through [`Sim::roster_mut`].
//!
//! # Quick-start
//!
//! ```rust
//! use pm_core::GeoPoint;
//! use pm_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let config = SimConfig { total_ticks: 20, ..SimConfig::seeded(42) };
//! let mut sim = SimBuilder::new(config)
//!     .user(GeoPoint::new(51.505, -0.09))
//!     .other(GeoPoint::new(51.51, -0.1))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! assert_eq!(sim.roster().people_count(), 2);
//! # Ok::<(), pm_sim::SimError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod frame;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use frame::{Frame, MarkerKind};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
