//! The `Roster`: user point plus other people, in display order.

use pm_core::geo::{as_coords, as_coords_mut};
use pm_core::{GeoPoint, PmResult, WalkConfig};
use tracing::{debug, trace};

use crate::{Mover, RandomWalk};

/// Index of the reserved user slot in `slots`.
const USER_SLOT: usize = 0;

/// Ordered collection of people on the map.
///
/// The visible sequence is `[user, others...]` once a user location has been
/// set and `[others...]` before that.  Others keep insertion order and are
/// never removed.  The only state transition is `user_exists: false → true`,
/// taken by the first [`set_user_location`](Self::set_user_location) call.
///
/// Views returned by [`people`](Self::people) and [`coords`](Self::coords)
/// borrow the roster, so they cannot outlive the next mutating call; re-query
/// after each `set_user_location`, `add_other_person`, or `update_positions`.
#[derive(Debug)]
pub struct Roster<M: Mover = RandomWalk> {
    /// `slots[0]` is the user slot; it holds a placeholder until
    /// `has_user` is set.  `slots[1..]` are other people.
    slots: Vec<GeoPoint>,

    has_user: bool,

    mover: M,
}

impl Roster<RandomWalk> {
    /// Empty roster with an unseeded random walk.
    pub fn new() -> Self {
        Self::with_mover(RandomWalk::default())
    }

    /// Empty roster whose walk is reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_mover(RandomWalk::seeded(seed))
    }

    /// Empty roster with a configured walk.
    ///
    /// # Errors
    ///
    /// Returns `PmError::Config` if `config` is invalid.
    pub fn with_config(config: &WalkConfig) -> PmResult<Self> {
        Ok(Self::with_mover(RandomWalk::new(config)?))
    }
}

impl Default for Roster<RandomWalk> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mover> Roster<M> {
    /// Empty roster driven by a caller-supplied [`Mover`].
    pub fn with_mover(mover: M) -> Self {
        Self {
            slots: vec![GeoPoint::default()],
            has_user: false,
            mover,
        }
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Set or move the user.  The user is always the first visible point.
    ///
    /// The first call makes the user appear ahead of every existing other
    /// person; later calls overwrite the position in place.
    pub fn set_user_location(&mut self, lat: f64, lon: f64) {
        self.slots[USER_SLOT] = GeoPoint::new(lat, lon);
        if !self.has_user {
            self.has_user = true;
            debug!(lat, lon, others = self.others().len(), "user placed");
        }
    }

    /// Append another person after everyone already present.
    pub fn add_other_person(&mut self, lat: f64, lon: f64) {
        self.slots.push(GeoPoint::new(lat, lon));
    }

    /// Advance one tick: move every other person, never the user.
    pub fn update_positions(&mut self) {
        let others = &mut self.slots[USER_SLOT + 1..];
        self.mover.move_points(others);
        trace!(moved = others.len(), "positions updated");
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn user_exists(&self) -> bool {
        self.has_user
    }

    /// Number of visible points, user included.
    #[inline]
    pub fn people_count(&self) -> usize {
        self.slots.len() - self.first_visible()
    }

    /// `true` if there is nobody on the map.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.people_count() == 0
    }

    /// All visible points, user first if present.
    #[inline]
    pub fn people(&self) -> &[GeoPoint] {
        &self.slots[self.first_visible()..]
    }

    /// Writable view over the same storage as [`people`](Self::people).
    #[inline]
    pub fn people_mut(&mut self) -> &mut [GeoPoint] {
        let start = self.first_visible();
        &mut self.slots[start..]
    }

    /// [`people`](Self::people) as `2 * people_count()` interleaved
    /// `lat, lon` values.  No copy is made.
    #[inline]
    pub fn coords(&self) -> &[f64] {
        as_coords(self.people())
    }

    /// Mutable counterpart of [`coords`](Self::coords).
    #[inline]
    pub fn coords_mut(&mut self) -> &mut [f64] {
        as_coords_mut(self.people_mut())
    }

    /// The user's position, if one has been set.
    #[inline]
    pub fn user(&self) -> Option<GeoPoint> {
        self.has_user.then(|| self.slots[USER_SLOT])
    }

    /// Other people in insertion order.
    #[inline]
    pub fn others(&self) -> &[GeoPoint] {
        &self.slots[USER_SLOT + 1..]
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    #[inline]
    fn first_visible(&self) -> usize {
        if self.has_user { USER_SLOT } else { USER_SLOT + 1 }
    }
}
