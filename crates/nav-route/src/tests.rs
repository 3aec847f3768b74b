//! Unit tests for nav-route.

use nav_core::{Coordinate, ItineraryId, UserId};

use crate::{
    ItineraryOption, ItineraryProvider, ItineraryQuery, ItineraryStore, RoadSnapper, Route,
    RouteError, plan_route,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pt(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon)
}

fn three_point_route() -> Route {
    Route::new(vec![pt(0.0, 0.0), pt(0.0, 1.0), pt(0.0, 2.0)]).unwrap()
}

fn option_with(points: Vec<Coordinate>) -> ItineraryOption {
    ItineraryOption {
        id: ItineraryId(1),
        distance_m: 1200.0,
        duration_secs: 180,
        toll_free: true,
        points,
        encoded_polyline: "encoded".into(),
    }
}

/// Scripted provider returning a fixed option list.
struct FixedProvider(Vec<ItineraryOption>);

impl ItineraryProvider for FixedProvider {
    fn search(&mut self, _query: &ItineraryQuery) -> crate::RouteResult<Vec<ItineraryOption>> {
        Ok(self.0.clone())
    }
}

/// Store that records calls and optionally fails.
struct RecordingStore {
    saved: usize,
    fail: bool,
}

impl RecordingStore {
    fn ok() -> Self {
        Self { saved: 0, fail: false }
    }
    fn failing() -> Self {
        Self { saved: 0, fail: true }
    }
}

impl ItineraryStore for RecordingStore {
    fn save(
        &mut self,
        _user: UserId,
        _chosen: &ItineraryOption,
        _query: &ItineraryQuery,
    ) -> crate::RouteResult<()> {
        if self.fail {
            return Err(RouteError::Remote("itinerary backend down".into()));
        }
        self.saved += 1;
        Ok(())
    }
}

/// Snapper scripted with a fixed outcome.
enum ScriptedSnapper {
    Returns(Vec<Coordinate>),
    Fails,
}

impl RoadSnapper for ScriptedSnapper {
    fn snap(&mut self, _encoded_polyline: &str) -> crate::RouteResult<Vec<Coordinate>> {
        match self {
            ScriptedSnapper::Returns(points) => Ok(points.clone()),
            ScriptedSnapper::Fails => Err(RouteError::Remote("snap service down".into())),
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn too_few_points_rejected() {
        assert!(matches!(Route::new(vec![]), Err(RouteError::TooFewPoints(0))));
        assert!(matches!(
            Route::new(vec![pt(0.0, 0.0)]),
            Err(RouteError::TooFewPoints(1))
        ));
    }

    #[test]
    fn segment_count_is_len_minus_one() {
        let r = three_point_route();
        assert_eq!(r.len(), 3);
        assert_eq!(r.segment_count(), 2);
        assert!(!r.is_empty());
    }

    #[test]
    fn segment_endpoints_in_index_order() {
        let r = three_point_route();
        let (a, b) = r.segment(0).unwrap();
        assert_eq!(a, pt(0.0, 0.0));
        assert_eq!(b, pt(0.0, 1.0));
        let (a, b) = r.segment(1).unwrap();
        assert_eq!(a, pt(0.0, 1.0));
        assert_eq!(b, pt(0.0, 2.0));
        assert!(r.segment(2).is_none());
    }

    #[test]
    fn point_out_of_range_is_none() {
        let r = three_point_route();
        assert_eq!(r.point(2), Some(pt(0.0, 2.0)));
        assert!(r.point(3).is_none());
    }

    #[test]
    fn start_and_end() {
        let r = three_point_route();
        assert_eq!(r.start(), pt(0.0, 0.0));
        assert_eq!(r.end(), pt(0.0, 2.0));
    }

    #[test]
    fn total_length_sums_segments() {
        let r = three_point_route();
        let expected = pt(0.0, 0.0).distance_m(pt(0.0, 1.0)) + pt(0.0, 1.0).distance_m(pt(0.0, 2.0));
        assert!((r.total_length_m() - expected).abs() < 1e-6);
    }
}

// ── plan_route ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use super::*;

    fn query() -> ItineraryQuery {
        ItineraryQuery::new("Place de la République", "Gare de Lyon, Paris")
    }

    #[test]
    fn zero_options_surfaces_no_itinerary() {
        let mut provider = FixedProvider(vec![]);
        let mut store = RecordingStore::ok();
        let mut snapper = ScriptedSnapper::Fails;
        let result = plan_route(&mut provider, &mut store, &mut snapper, UserId(1), &query());
        assert!(matches!(result, Err(RouteError::NoItinerary)));
        assert_eq!(store.saved, 0);
    }

    #[test]
    fn snapped_points_preferred() {
        let raw = vec![pt(0.0, 0.0), pt(0.0, 1.0)];
        let snapped = vec![pt(0.0, 0.0), pt(0.0005, 0.5), pt(0.0, 1.0)];
        let mut provider = FixedProvider(vec![option_with(raw)]);
        let mut store = RecordingStore::ok();
        let mut snapper = ScriptedSnapper::Returns(snapped.clone());

        let route = plan_route(&mut provider, &mut store, &mut snapper, UserId(1), &query()).unwrap();
        assert_eq!(route.points(), snapped.as_slice());
        assert_eq!(store.saved, 1);
    }

    #[test]
    fn snap_failure_degrades_to_raw_points() {
        let raw = vec![pt(0.0, 0.0), pt(0.0, 1.0)];
        let mut provider = FixedProvider(vec![option_with(raw.clone())]);
        let mut store = RecordingStore::ok();
        let mut snapper = ScriptedSnapper::Fails;

        let route = plan_route(&mut provider, &mut store, &mut snapper, UserId(1), &query()).unwrap();
        assert_eq!(route.points(), raw.as_slice());
    }

    #[test]
    fn degenerate_snap_result_degrades_to_raw_points() {
        let raw = vec![pt(0.0, 0.0), pt(0.0, 1.0)];
        let mut provider = FixedProvider(vec![option_with(raw.clone())]);
        let mut store = RecordingStore::ok();
        let mut snapper = ScriptedSnapper::Returns(vec![pt(0.0, 0.0)]);

        let route = plan_route(&mut provider, &mut store, &mut snapper, UserId(1), &query()).unwrap();
        assert_eq!(route.points(), raw.as_slice());
    }

    #[test]
    fn persistence_failure_does_not_fail_flow() {
        let raw = vec![pt(0.0, 0.0), pt(0.0, 1.0)];
        let mut provider = FixedProvider(vec![option_with(raw.clone())]);
        let mut store = RecordingStore::failing();
        let mut snapper = ScriptedSnapper::Fails;

        let route = plan_route(&mut provider, &mut store, &mut snapper, UserId(1), &query());
        assert!(route.is_ok());
    }

    #[test]
    fn first_option_is_chosen() {
        let first = option_with(vec![pt(0.0, 0.0), pt(0.0, 1.0)]);
        let second = option_with(vec![pt(1.0, 0.0), pt(1.0, 1.0)]);
        let mut provider = FixedProvider(vec![first.clone(), second]);
        let mut store = RecordingStore::ok();
        let mut snapper = ScriptedSnapper::Fails;

        let route = plan_route(&mut provider, &mut store, &mut snapper, UserId(1), &query()).unwrap();
        assert_eq!(route.points(), first.points.as_slice());
    }

    #[test]
    fn avoid_tolls_defaults_on() {
        assert!(query().avoid_tolls);
    }
}
