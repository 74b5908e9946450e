//! `pm-core` — foundational types for the `people_map` roster.
//!
//! This crate is a dependency of every other `pm-*` crate.  It has no `pm-*`
//! dependencies and few external ones (`rand`, `thiserror`, `bytemuck`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, flat `f64` coordinate views               |
//! | [`time`]        | `Tick`, `TickClock`                                   |
//! | [`config`]      | `WalkConfig` — random-walk step parameters            |
//! | [`rng`]         | `WalkRng` (seedable or entropy-backed)                |
//! | [`error`]       | `PmError`, `PmResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WalkConfig;
pub use error::{PmError, PmResult};
pub use geo::GeoPoint;
pub use rng::WalkRng;
pub use time::{Tick, TickClock};
