//! Borrowed per-tick view of the roster handed to observers.

use pm_core::geo::as_coords;
use pm_core::{GeoPoint, Tick};
use pm_roster::{Mover, Roster};

/// How a renderer should draw a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// The local user, always the first point when present.
    User,
    /// Anyone else.
    Other,
}

/// Read-only snapshot of the roster after a tick.
///
/// Borrows the roster's storage directly; nothing is copied.
#[derive(Copy, Clone, Debug)]
pub struct Frame<'a> {
    pub tick: Tick,
    points:   &'a [GeoPoint],
    has_user: bool,
}

impl<'a> Frame<'a> {
    pub fn new<M: Mover>(tick: Tick, roster: &'a Roster<M>) -> Self {
        Self {
            tick,
            points:   roster.people(),
            has_user: roster.user_exists(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, user first if present.
    #[inline]
    pub fn points(&self) -> &'a [GeoPoint] {
        self.points
    }

    /// Interleaved `lat, lon` pairs.
    #[inline]
    pub fn coords(&self) -> &'a [f64] {
        as_coords(self.points)
    }

    pub fn user(&self) -> Option<GeoPoint> {
        if self.has_user { self.points.first().copied() } else { None }
    }

    pub fn others(&self) -> &'a [GeoPoint] {
        &self.points[usize::from(self.has_user)..]
    }

    /// Marker kind of the point at `index`.
    #[inline]
    pub fn kind_of(&self, index: usize) -> MarkerKind {
        if self.has_user && index == 0 { MarkerKind::User } else { MarkerKind::Other }
    }

    /// Each point paired with how it should be drawn, in display order.
    pub fn markers(&self) -> impl Iterator<Item = (GeoPoint, MarkerKind)> + 'a {
        let frame = *self;
        self.points.iter().enumerate().map(move |(i, &p)| (p, frame.kind_of(i)))
    }
}
