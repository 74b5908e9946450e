//! `pm-roster` — the in-memory roster of people shown on the map.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`roster`]  | `Roster<M>` — user slot + append-only other people        |
//! | [`mover`]   | `Mover` trait, `RandomWalk`, `Stationary`                 |
//!
//! # Storage model
//!
//! All points live in one `Vec<GeoPoint>`.  Index 0 is reserved for the user
//! from the start, so placing the user never shifts anyone; the public view
//! simply begins at index 1 until the user appears.  The view handed out by
//! [`Roster::people`] is therefore always one contiguous borrow, user first
//! when present, and can be passed to a renderer without copying.
//!
//! ```rust
//! use pm_roster::Roster;
//!
//! let mut roster = Roster::with_seed(7);
//! roster.add_other_person(1.0, 1.0);
//! roster.set_user_location(0.0, 0.0);
//! assert_eq!(roster.people_count(), 2);
//! assert_eq!(roster.coords(), &[0.0, 0.0, 1.0, 1.0]);
//!
//! roster.update_positions();
//! assert_eq!(roster.user().unwrap().lat, 0.0);
//! ```

pub mod mover;
pub mod roster;

#[cfg(test)]
mod tests;

pub use mover::{Mover, RandomWalk, Stationary};
pub use roster::Roster;
