//! Unit and property tests for pm-roster.

use pm_core::{GeoPoint, PmError, WalkConfig, WalkRng};

use crate::{Mover, RandomWalk, Roster, Stationary};

/// Slack for comparing `(x + d) - x` against `d` in floating point.
const EPS: f64 = 1e-9;

fn p(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon)
}

// ── Basic operations ──────────────────────────────────────────────────────────

#[cfg(test)]
mod operations {
    use super::*;

    #[test]
    fn starts_empty() {
        let roster = Roster::with_seed(1);
        assert!(!roster.user_exists());
        assert_eq!(roster.people_count(), 0);
        assert!(roster.is_empty());
        assert!(roster.people().is_empty());
        assert!(roster.coords().is_empty());
        assert_eq!(roster.user(), None);
    }

    #[test]
    fn add_other_appends() {
        let mut roster = Roster::with_seed(1);
        roster.add_other_person(1.0, 2.0);
        roster.add_other_person(3.0, 4.0);
        assert_eq!(roster.people(), &[p(1.0, 2.0), p(3.0, 4.0)]);
        assert!(!roster.user_exists());
    }

    #[test]
    fn first_set_user_goes_in_front() {
        let mut roster = Roster::with_seed(1);
        roster.add_other_person(1.0, 1.0);
        roster.set_user_location(5.0, 6.0);
        assert!(roster.user_exists());
        assert_eq!(roster.people(), &[p(5.0, 6.0), p(1.0, 1.0)]);
        assert_eq!(roster.user(), Some(p(5.0, 6.0)));
    }

    #[test]
    fn set_user_on_empty_roster() {
        let mut roster = Roster::with_seed(1);
        roster.set_user_location(51.505, -0.09);
        assert_eq!(roster.people_count(), 1);
        assert_eq!(roster.people()[0], p(51.505, -0.09));
        assert!(roster.others().is_empty());
    }

    #[test]
    fn add_other_after_user_keeps_user_first() {
        let mut roster = Roster::with_seed(1);
        roster.set_user_location(0.0, 0.0);
        roster.add_other_person(7.0, 7.0);
        assert_eq!(roster.people(), &[p(0.0, 0.0), p(7.0, 7.0)]);
        assert_eq!(roster.others(), &[p(7.0, 7.0)]);
    }

    #[test]
    fn coords_are_interleaved_user_first() {
        let mut roster = Roster::with_seed(1);
        roster.add_other_person(1.5, 2.5);
        roster.set_user_location(-3.0, 4.0);
        assert_eq!(roster.coords(), &[-3.0, 4.0, 1.5, 2.5]);
        assert_eq!(roster.coords().len(), 2 * roster.people_count());
    }

    #[test]
    fn mutable_views_write_through() {
        let mut roster = Roster::with_seed(1);
        roster.add_other_person(1.0, 1.0);
        roster.people_mut()[0].lat = 9.0;
        roster.coords_mut()[1] = 8.0;
        assert_eq!(roster.people(), &[p(9.0, 8.0)]);
    }

    #[test]
    fn with_config_rejects_bad_walk() {
        let cfg = WalkConfig { steps_per_deg: 0, ..WalkConfig::default() };
        assert!(matches!(Roster::with_config(&cfg), Err(PmError::Config(_))));
    }

    #[test]
    fn place_user_then_tick_scenario() {
        let mut roster = Roster::with_seed(42);

        roster.add_other_person(1.0, 1.0);
        roster.add_other_person(2.0, 2.0);
        assert_eq!(roster.people_count(), 2);
        assert!(!roster.user_exists());
        assert_eq!(roster.people(), &[p(1.0, 1.0), p(2.0, 2.0)]);

        roster.set_user_location(0.0, 0.0);
        assert_eq!(roster.people_count(), 3);
        assert!(roster.user_exists());
        assert_eq!(roster.people(), &[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]);

        roster.set_user_location(9.0, 9.0);
        assert_eq!(roster.people_count(), 3);
        assert_eq!(roster.people(), &[p(9.0, 9.0), p(1.0, 1.0), p(2.0, 2.0)]);

        roster.update_positions();
        let after = roster.people();
        assert_eq!(after[0], p(9.0, 9.0));
        assert!(after[1].within_bbox(p(1.0, 1.0), 0.005 + EPS));
        assert!(after[2].within_bbox(p(2.0, 2.0), 0.005 + EPS));
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use super::*;

    #[test]
    fn user_never_moves() {
        let mut roster = Roster::with_seed(5);
        roster.set_user_location(10.0, 20.0);
        for i in 0..10 {
            roster.add_other_person(i as f64, i as f64);
        }
        for _ in 0..500 {
            roster.update_positions();
            assert_eq!(roster.people()[0], p(10.0, 20.0));
        }
    }

    #[test]
    fn all_points_move_without_user() {
        let mut roster = Roster::with_seed(5);
        roster.add_other_person(0.0, 0.0);
        // A tick leaves the point in place only if both axes draw 0.
        let mut moves = 0;
        for _ in 0..20 {
            let before = roster.people()[0];
            roster.update_positions();
            if roster.people()[0] != before {
                moves += 1;
            }
        }
        assert!(moves >= 19, "only {moves} of 20 ticks moved the point");
    }

    #[test]
    fn deltas_are_exact_ten_thousandths() {
        let grid: Vec<f64> = (-50..50).map(|k| k as f64 / 10000.0).collect();
        let mut roster = Roster::with_seed(11);
        for _ in 0..500 {
            roster.add_other_person(0.0, 0.0);
        }
        roster.update_positions();
        for moved in roster.people() {
            for d in [moved.lat, moved.lon] {
                // Bitwise membership: no rounding slack allowed.
                assert!(grid.contains(&d), "delta {d:?} is not k / 10000");
            }
        }
    }

    #[test]
    fn delta_grid_hits_values_that_multiplication_misses() {
        // -48 * 0.0001 != -48 / 10000 in f64; the walk must land on the latter.
        let mut roster = Roster::with_seed(2);
        for _ in 0..2_000 {
            roster.add_other_person(0.0, 0.0);
        }
        roster.update_positions();
        assert!(roster.coords().contains(&(-48.0 / 10000.0)));
        assert!(!roster.coords().contains(&(-48.0 * 0.0001)));
    }

    #[test]
    fn same_seed_same_trajectory() {
        let run = |seed| {
            let mut roster = Roster::with_seed(seed);
            roster.set_user_location(0.0, 0.0);
            roster.add_other_person(1.0, 1.0);
            roster.add_other_person(2.0, 2.0);
            for _ in 0..50 {
                roster.update_positions();
            }
            roster.people().to_vec()
        };
        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }

    #[test]
    fn config_seed_matches_with_seed() {
        let mut a = Roster::with_config(&WalkConfig::seeded(3)).unwrap();
        let mut b = Roster::with_seed(3);
        for roster in [&mut a, &mut b] {
            roster.add_other_person(0.0, 0.0);
            roster.update_positions();
        }
        assert_eq!(a.people(), b.people());
    }

    #[test]
    fn wider_config_wider_steps() {
        let cfg = WalkConfig { steps_per_deg: 100, half_steps: 2, seed: Some(8) };
        let mut roster = Roster::with_config(&cfg).unwrap();
        assert!((roster.mover().max_delta() - 0.02).abs() < EPS);
        roster.add_other_person(0.0, 0.0);
        for _ in 0..100 {
            let before = roster.people()[0];
            roster.update_positions();
            assert!(roster.people()[0].within_bbox(before, 0.02 + EPS));
        }
    }

    #[test]
    fn stationary_mover_freezes_roster() {
        let mut roster = Roster::with_mover(Stationary);
        roster.add_other_person(1.0, 2.0);
        roster.update_positions();
        assert_eq!(roster.people(), &[p(1.0, 2.0)]);
    }

    #[test]
    fn custom_mover_only_sees_others() {
        struct Counting(usize);
        impl Mover for Counting {
            fn move_points(&mut self, points: &mut [GeoPoint]) {
                self.0 += points.len();
                for pt in points {
                    pt.lat += 1.0;
                }
            }
        }

        let mut roster = Roster::with_mover(Counting(0));
        roster.add_other_person(0.0, 0.0);
        roster.update_positions();
        roster.set_user_location(5.0, 5.0);
        roster.update_positions();
        assert_eq!(roster.mover().0, 2);
        assert_eq!(roster.people(), &[p(5.0, 5.0), p(2.0, 0.0)]);
    }

    #[test]
    fn random_walk_from_rng() {
        let mut walk = RandomWalk::with_rng(WalkRng::new(1));
        let mut pts = [p(0.0, 0.0); 3];
        walk.move_points(&mut pts);
        for pt in pts {
            assert!(pt.within_bbox(p(0.0, 0.0), walk.max_delta() + EPS));
        }
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    #[derive(Clone, Debug)]
    enum Op {
        SetUser(f64, f64),
        AddOther(f64, f64),
        Update,
    }

    fn coord() -> impl Strategy<Value = f64> {
        -180.0f64..180.0
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (coord(), coord()).prop_map(|(a, b)| Op::SetUser(a, b)),
            (coord(), coord()).prop_map(|(a, b)| Op::AddOther(a, b)),
            Just(Op::Update),
        ]
    }

    proptest! {
        #[test]
        fn count_and_user_flag_track_operations(ops in prop::collection::vec(op(), 0..64)) {
            let mut roster = Roster::with_seed(0);
            let mut expected = 0usize;
            let mut seen_user = false;
            for op in ops {
                match op {
                    Op::SetUser(lat, lon) => {
                        if !seen_user {
                            expected += 1;
                        }
                        seen_user = true;
                        roster.set_user_location(lat, lon);
                        prop_assert_eq!(roster.people()[0], GeoPoint::new(lat, lon));
                    }
                    Op::AddOther(lat, lon) => {
                        expected += 1;
                        roster.add_other_person(lat, lon);
                        prop_assert_eq!(*roster.people().last().unwrap(), GeoPoint::new(lat, lon));
                    }
                    Op::Update => roster.update_positions(),
                }
                prop_assert_eq!(roster.people_count(), expected);
                prop_assert_eq!(roster.user_exists(), seen_user);
            }
        }

        #[test]
        fn update_is_bounded_and_spares_user(
            user in prop::option::of((coord(), coord())),
            others in prop::collection::vec((coord(), coord()), 0..16),
            seed in any::<u64>(),
        ) {
            let mut roster = Roster::with_seed(seed);
            for &(lat, lon) in &others {
                roster.add_other_person(lat, lon);
            }
            if let Some((lat, lon)) = user {
                roster.set_user_location(lat, lon);
            }
            let before = roster.people().to_vec();
            roster.update_positions();
            let after = roster.people();

            prop_assert_eq!(after.len(), before.len());
            let first_other = usize::from(user.is_some());
            if user.is_some() {
                prop_assert_eq!(after[0], before[0]);
            }
            for (b, a) in before[first_other..].iter().zip(&after[first_other..]) {
                prop_assert!(a.within_bbox(*b, 0.005 + EPS), "{} -> {}", b, a);
            }
        }

        #[test]
        fn user_insertion_preserves_other_order(
            others in prop::collection::vec((coord(), coord()), 0..16),
            user in (coord(), coord()),
        ) {
            let mut roster = Roster::with_mover(Stationary);
            for &(lat, lon) in &others {
                roster.add_other_person(lat, lon);
            }
            roster.set_user_location(user.0, user.1);

            let mut expected = vec![GeoPoint::from(user)];
            expected.extend(others.iter().copied().map(GeoPoint::from));
            prop_assert_eq!(roster.people(), expected.as_slice());
        }
    }
}
