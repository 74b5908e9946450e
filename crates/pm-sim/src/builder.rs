//! Fluent builder for constructing a [`Sim`].

use pm_core::GeoPoint;
use pm_roster::{Mover, RandomWalk, Roster};

use crate::{Sim, SimConfig, SimResult};

/// Fluent builder for [`Sim`].
///
/// | Method          | Default                        |
/// |-----------------|--------------------------------|
/// | `.user(p)`      | No user until the host sets one |
/// | `.other(p)`     | No other people                |
/// | `.others(iter)` | —                              |
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::seeded(7))
///     .user(GeoPoint::new(51.505, -0.09))
///     .others(crowd)
///     .build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    user:   Option<GeoPoint>,
    others: Vec<GeoPoint>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            user:   None,
            others: Vec::new(),
        }
    }

    /// Place the user before the first tick.
    pub fn user(mut self, at: GeoPoint) -> Self {
        self.user = Some(at);
        self
    }

    /// Add one other person.
    pub fn other(mut self, at: GeoPoint) -> Self {
        self.others.push(at);
        self
    }

    /// Add other people in order.
    pub fn others<I: IntoIterator<Item = GeoPoint>>(mut self, points: I) -> Self {
        self.others.extend(points);
        self
    }

    /// Validate the config and build a sim walking with `config.walk`.
    pub fn build(self) -> SimResult<Sim<RandomWalk>> {
        self.config.validate()?;
        let roster = Roster::with_config(&self.config.walk)?;
        self.finish(roster)
    }

    /// Build with a caller-supplied mover instead of `config.walk`.
    ///
    /// `config.walk` is ignored, so an invalid walk does not reject the sim;
    /// only the frame loop settings are checked.
    pub fn build_with_mover<M: Mover>(self, mover: M) -> SimResult<Sim<M>> {
        self.finish(Roster::with_mover(mover))
    }

    fn finish<M: Mover>(self, mut roster: Roster<M>) -> SimResult<Sim<M>> {
        for p in self.others {
            roster.add_other_person(p.lat, p.lon);
        }
        if let Some(u) = self.user {
            roster.set_user_location(u.lat, u.lon);
        }
        Sim::with_roster(self.config, roster)
    }
}
