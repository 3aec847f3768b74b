//! replay — end-to-end demo of the navkit navigation engine.
//!
//! Reproduces the reference client's whole trip flow against in-memory
//! collaborators: search an itinerary across central Paris, snap it, play
//! it back as a simulated drive, pause halfway to report an incident,
//! resume, run to completion, then mirror a short live session with
//! jittered synthetic GPS fixes.
//!
//! Run with `RUST_LOG=info cargo run -p replay` to see the engine's
//! mode-switch and incident logging.

use std::thread;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use nav_core::{Coordinate, ItineraryId, UserId};
use nav_engine::{
    AuthToken, Engine, EngineResult, IncidentGateway, IncidentKind, IncidentRequest,
    LocationSource, PlaybackConfig, PlaybackStatus, PositionSink, PositionUpdate, WatchProfile,
};
use nav_route::{
    ItineraryOption, ItineraryProvider, ItineraryQuery, ItineraryStore, RoadSnapper, plan_route,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const USER: UserId = UserId(1);
const SEED: u64 = 42;
const TICK_PERIOD_MS: u64 = 20; // faster than the client's 100 ms, same step
const STEP_PER_TICK: f64 = 0.02;
const LIVE_FIXES: usize = 15;

// ── In-memory collaborators ───────────────────────────────────────────────────

/// Routing backend scripted with one itinerary: République → Gare de Lyon.
struct CannedBackend;

impl ItineraryProvider for CannedBackend {
    fn search(&mut self, query: &ItineraryQuery) -> nav_route::RouteResult<Vec<ItineraryOption>> {
        log::info!(
            "searching {} → {} (avoid tolls: {})",
            query.start,
            query.end,
            query.avoid_tolls
        );
        Ok(vec![ItineraryOption {
            id: ItineraryId(1),
            distance_m: 3_400.0,
            duration_secs: 540,
            toll_free: true,
            points: paris_route(),
            encoded_polyline: "demo".into(),
        }])
    }
}

impl ItineraryStore for CannedBackend {
    fn save(
        &mut self,
        user: UserId,
        chosen: &ItineraryOption,
        _query: &ItineraryQuery,
    ) -> nav_route::RouteResult<()> {
        log::info!("persisted itinerary {} for {user}", chosen.id);
        Ok(())
    }
}

impl RoadSnapper for CannedBackend {
    fn snap(&mut self, _encoded_polyline: &str) -> nav_route::RouteResult<Vec<Coordinate>> {
        // Snapping unavailable offline: exercises the degrade path.
        Err(nav_route::RouteError::Remote("snap service offline".into()))
    }
}

/// Synthetic GPS: walks the route waypoints with small jitter.
struct SimulatedGps {
    rng:        SmallRng,
    subscribed: bool,
}

impl SimulatedGps {
    fn new(seed: u64) -> Self {
        Self {
            rng:        SmallRng::seed_from_u64(seed),
            subscribed: false,
        }
    }

    fn jittered(&mut self, base: Coordinate) -> Coordinate {
        Coordinate::new(
            base.lat + self.rng.gen_range(-1e-5..1e-5),
            base.lon + self.rng.gen_range(-1e-5..1e-5),
        )
    }
}

impl LocationSource for SimulatedGps {
    fn current_fix(&mut self) -> EngineResult<Coordinate> {
        Ok(self.jittered(paris_route()[0]))
    }

    fn subscribe(&mut self, profile: &WatchProfile) -> EngineResult<()> {
        log::info!(
            "gps subscription: every {} ms / {} m",
            profile.min_interval_ms,
            profile.min_distance_m
        );
        self.subscribed = true;
        Ok(())
    }

    fn unsubscribe(&mut self) {
        if self.subscribed {
            log::info!("gps subscription closed");
        }
        self.subscribed = false;
    }
}

/// Incident backend that always acknowledges.
struct CannedIncidents;

impl IncidentGateway for CannedIncidents {
    fn report(&mut self, request: &IncidentRequest, _token: &AuthToken) -> EngineResult<()> {
        log::info!("incident backend ack: {} at {}", request.kind, request.at);
        Ok(())
    }
}

/// Console "camera": prints every nth update so the drive stays readable.
struct ConsoleCamera {
    every: usize,
    seen:  usize,
}

impl PositionSink for ConsoleCamera {
    fn on_update(&mut self, update: &PositionUpdate) {
        self.seen += 1;
        if self.seen % self.every == 0 {
            println!(
                "  {:>4}  {}  heading {:6.1}°",
                self.seen, update.position, update.heading_deg
            );
        }
    }

    fn on_completed(&mut self) {
        println!("  arrived after {} updates", self.seen);
    }
}

// ── Route geometry ────────────────────────────────────────────────────────────

/// Place de la République → Gare de Lyon, coarsely.
fn paris_route() -> Vec<Coordinate> {
    vec![
        Coordinate::new(48.8673, 2.3633),
        Coordinate::new(48.8632, 2.3655),
        Coordinate::new(48.8590, 2.3680),
        Coordinate::new(48.8553, 2.3696),
        Coordinate::new(48.8517, 2.3712),
        Coordinate::new(48.8480, 2.3721),
        Coordinate::new(48.8443, 2.3730),
    ]
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    // ── Plan ──────────────────────────────────────────────────────────────
    let mut provider = CannedBackend;
    let mut store = CannedBackend;
    let mut snapper = CannedBackend;
    let query = ItineraryQuery::new("Place de la République", "Gare de Lyon, Paris");
    let route = plan_route(&mut provider, &mut store, &mut snapper, USER, &query)?;
    println!(
        "route: {} waypoints, {:.0} m",
        route.len(),
        route.total_length_m()
    );

    let config = PlaybackConfig {
        tick_period_ms: TICK_PERIOD_MS,
        step_per_tick:  STEP_PER_TICK,
    };
    let mut engine = Engine::new(SimulatedGps::new(SEED), config);
    let mut camera = ConsoleCamera { every: 25, seen: 0 };
    let halfway = route.segment_count() / 2;

    // ── Simulated drive with an incident stop ─────────────────────────────
    println!("simulated drive:");
    engine.start_playback(route.clone(), 0)?;

    let mut reported = false;
    while let Some(pc) = engine.playback() {
        if pc.status() == PlaybackStatus::Completed {
            break;
        }
        let period = pc.ticker().period();

        if !reported && pc.status() == PlaybackStatus::Running && pc.segment_index() >= halfway {
            let at = engine.begin_incident()?;
            println!("  incident spotted at {at}, reporting...");
            engine.submit_incident(
                &mut CannedIncidents,
                IncidentKind::Obstacle,
                USER,
                "debris on the road",
                &AuthToken::new("demo-token"),
            )?;
            reported = true;
            continue;
        }

        thread::sleep(period);
        engine.tick(&mut camera);
    }
    engine.stop()?;

    // ── Live session over the same corridor ───────────────────────────────
    println!("live navigation:");
    let mut camera = ConsoleCamera { every: 5, seen: 0 };
    engine.start_navigation(&WatchProfile::default())?;

    let mut gps = SimulatedGps::new(SEED + 1);
    for i in 0..LIVE_FIXES {
        // Walk the corridor, one jittered fix per waypoint span.
        let t = i as f64 / (LIVE_FIXES - 1) as f64;
        let span = t * (route.len() - 1) as f64;
        let (seg, frac) = (span.floor() as usize, span.fract());
        let base = match route.segment(seg) {
            Some((a, b)) => a.interpolate(b, frac),
            None => route.end(), // past the last segment
        };
        engine.push_fix(gps.jittered(base), &mut camera);
    }
    engine.stop()?;

    if let Some(tracker) = engine.tracker() {
        println!(
            "trail: {} fixes, final heading {:.1}°",
            tracker.trail().len(),
            tracker.heading_deg()
        );
    }

    Ok(())
}
