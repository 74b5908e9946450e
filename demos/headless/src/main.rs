//! headless — drives a roster the way the browser map page does.
//!
//! The page centres on London, adds a person per map click, finds the user
//! via geolocation a little later, and redraws every 50 ms.  This binary
//! replays that session without a browser, logs per-frame marker counts,
//! and prints the final frame as JSON.
//!
//! `RUST_LOG=debug cargo run -p headless` shows roster and loop events.

use std::time::Instant;

use anyhow::Result;
use serde_json::json;
use tracing::info;

use pm_core::GeoPoint;
use pm_sim::{Frame, MarkerKind, SimBuilder, SimConfig, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 42;
const MAP_CENTER:       GeoPoint = GeoPoint { lat: 51.505, lon: -0.09 };
const CLICKS:           usize = 6;
const TICKS_BEFORE_FIX: u64 = 20; // 1 s at 50 ms frames before geolocation resolves
const TOTAL_TICKS:      u64 = 200;
const LOG_EVERY:        u64 = 40;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs a one-line summary every `LOG_EVERY` frames and counts the rest.
#[derive(Default)]
struct FrameLog {
    frames: u64,
}

impl SimObserver for FrameLog {
    fn on_frame(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        if frame.is_empty() || frame.tick.0 % LOG_EVERY != 0 {
            return;
        }
        let users = frame.markers().filter(|(_, k)| *k == MarkerKind::User).count();
        info!(
            tick = %frame.tick,
            markers = frame.len(),
            users,
            first_other = ?frame.others().first().map(ToString::to_string),
            "frame"
        );
    }
}

/// Fake map clicks on a small ring around the centre.
fn click_positions() -> impl Iterator<Item = GeoPoint> {
    (0..CLICKS).map(|i| {
        let angle = i as f64 * std::f64::consts::TAU / CLICKS as f64;
        GeoPoint::new(MAP_CENTER.lat + 0.01 * angle.sin(), MAP_CENTER.lon + 0.015 * angle.cos())
    })
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = SimConfig { total_ticks: TOTAL_TICKS, ..SimConfig::seeded(SEED) };
    info!(
        clicks = CLICKS,
        ticks = config.total_ticks,
        interval_ms = config.tick_interval_ms,
        seed = SEED,
        "starting headless map session"
    );

    // 1. Map clicks before the user has been located.
    let mut sim = SimBuilder::new(config).others(click_positions()).build()?;
    let mut obs = FrameLog::default();

    // 2. Others drift while geolocation is pending.
    let t0 = Instant::now();
    sim.run_ticks(TICKS_BEFORE_FIX, &mut obs);

    // 3. Geolocation resolves: the user appears first, others keep their order.
    sim.roster_mut().set_user_location(MAP_CENTER.lat, MAP_CENTER.lon);
    info!(at = %MAP_CENTER, people = sim.roster().people_count(), "user located");

    // 4. Run out the session.
    sim.run(&mut obs);
    info!(
        frames = obs.frames,
        elapsed_ms = sim.clock.elapsed_ms(),
        wall_ms = t0.elapsed().as_millis() as u64,
        "session complete"
    );

    // 5. Final frame, in the shape the page would draw it.
    let frame = sim.frame();
    let markers: Vec<_> = frame
        .markers()
        .map(|(p, kind)| {
            json!({
                "lat":  p.lat,
                "lon":  p.lon,
                "kind": match kind { MarkerKind::User => "user", MarkerKind::Other => "other" },
            })
        })
        .collect();
    let out = json!({
        "tick":       frame.tick.0,
        "userExists": sim.roster().user_exists(),
        "count":      frame.len(),
        "markers":    markers,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);

    Ok(())
}
