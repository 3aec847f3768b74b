//! Itinerary search, persistence, and road-snapping collaborator seams.
//!
//! # Pluggability
//!
//! The engine never talks HTTP.  Applications implement these traits over
//! their transport of choice (the reference client posts JSON to an
//! itinerary service and a snapping service); tests script them in memory.
//!
//! # Degradation policy
//!
//! [`plan_route`] treats the three collaborators differently:
//!
//! | Collaborator        | On failure                                      |
//! |---------------------|-------------------------------------------------|
//! | `ItineraryProvider` | Fatal for the flow — surfaced to the caller.    |
//! | `ItineraryStore`    | Logged (warn), never retried.                   |
//! | `RoadSnapper`       | Logged (warn), raw route points used instead.   |

use nav_core::{Coordinate, ItineraryId, UserId};

use crate::{Route, RouteError, RouteResult};

// ── Wire types ────────────────────────────────────────────────────────────────

/// A driving-itinerary request as the user phrased it: free-text addresses
/// plus the toll-avoidance preference (the client defaults it to on).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ItineraryQuery {
    pub start: String,
    pub end: String,
    pub avoid_tolls: bool,
}

impl ItineraryQuery {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            avoid_tolls: true,
        }
    }
}

/// One itinerary candidate returned by the routing backend.
///
/// `points` is the drivable geometry; `encoded_polyline` is the backend's
/// compact encoding of the same geometry, forwarded verbatim to the
/// road-snapping collaborator.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ItineraryOption {
    pub id: ItineraryId,
    pub distance_m: f64,
    pub duration_secs: u32,
    pub toll_free: bool,
    pub points: Vec<Coordinate>,
    pub encoded_polyline: String,
}

// ── Collaborator traits ───────────────────────────────────────────────────────

/// The routing backend: turns two addresses into zero or more itinerary
/// candidates, ranked best-first by the backend.
pub trait ItineraryProvider {
    fn search(&mut self, query: &ItineraryQuery) -> RouteResult<Vec<ItineraryOption>>;
}

/// Persists the chosen itinerary for the user's history.
///
/// Fire-and-forget from the engine's perspective: [`plan_route`] logs a
/// failure and moves on.
pub trait ItineraryStore {
    fn save(
        &mut self,
        user: UserId,
        chosen: &ItineraryOption,
        query: &ItineraryQuery,
    ) -> RouteResult<()>;
}

/// Best-effort refinement of itinerary geometry against the road network.
pub trait RoadSnapper {
    fn snap(&mut self, encoded_polyline: &str) -> RouteResult<Vec<Coordinate>>;
}

// ── Planning flow ─────────────────────────────────────────────────────────────

/// Search, persist, snap, and build the [`Route`] for one query.
///
/// Zero search results surface as [`RouteError::NoItinerary`] — no route
/// model is constructed.  Snapping that fails, or that returns fewer than
/// two points, silently degrades to the option's raw `points`.
pub fn plan_route(
    provider: &mut impl ItineraryProvider,
    store: &mut impl ItineraryStore,
    snapper: &mut impl RoadSnapper,
    user: UserId,
    query: &ItineraryQuery,
) -> RouteResult<Route> {
    let options = provider.search(query)?;
    let chosen = options.first().ok_or(RouteError::NoItinerary)?;

    if let Err(e) = store.save(user, chosen, query) {
        log::warn!("itinerary persistence failed for {user}: {e}");
    }

    let points = match snapper.snap(&chosen.encoded_polyline) {
        Ok(snapped) if snapped.len() >= 2 => snapped,
        Ok(snapped) => {
            log::warn!(
                "road snapping returned {} points; using raw route points",
                snapped.len()
            );
            chosen.points.clone()
        }
        Err(e) => {
            log::warn!("road snapping failed ({e}); using raw route points");
            chosen.points.clone()
        }
    };

    Route::new(points)
}
