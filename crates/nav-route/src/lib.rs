//! `nav-route` — the route data model and the itinerary boundary.
//!
//! A [`Route`] is the engine's only input geometry: an immutable, ordered,
//! validated sequence of waypoints.  How one comes to exist is the business
//! of external collaborators reached through the traits in [`itinerary`]:
//! a routing backend searches, a persistence backend records the choice,
//! and a road-snapping backend optionally refines the geometry.
//!
//! [`plan_route`] ties the three together with the client's degradation
//! policy: persistence and snapping are best-effort, search is not.

pub mod error;
pub mod itinerary;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use itinerary::{
    ItineraryOption, ItineraryProvider, ItineraryQuery, ItineraryStore, RoadSnapper, plan_route,
};
pub use route::Route;
