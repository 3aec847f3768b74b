//! The immutable route model.

use nav_core::Coordinate;

use crate::{RouteError, RouteResult};

/// An ordered path of waypoints, validated to hold at least two points so
/// every route has at least one playable segment.
///
/// Read-only after construction; choosing a new itinerary replaces the
/// whole value.  Waypoints are consumed strictly in index order — segment
/// `i` runs from `point(i)` to `point(i + 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    /// Build a route from an ordered waypoint list.
    ///
    /// Returns [`RouteError::TooFewPoints`] for fewer than two points;
    /// an unplayable route is unrepresentable downstream.
    pub fn new(points: Vec<Coordinate>) -> RouteResult<Self> {
        if points.len() < 2 {
            return Err(RouteError::TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always at least 2 points by construction, so never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of segments between consecutive waypoints (`len - 1`).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Waypoint at `index`, or `None` past the end.
    #[inline]
    pub fn point(&self, index: usize) -> Option<Coordinate> {
        self.points.get(index).copied()
    }

    /// Endpoints of segment `index`, or `None` when `index >= segment_count()`.
    #[inline]
    pub fn segment(&self, index: usize) -> Option<(Coordinate, Coordinate)> {
        match (self.points.get(index), self.points.get(index + 1)) {
            (Some(&a), Some(&b)) => Some((a, b)),
            _ => None,
        }
    }

    /// First waypoint (the departure).
    #[inline]
    pub fn start(&self) -> Coordinate {
        self.points[0]
    }

    /// Last waypoint (the arrival).
    #[inline]
    pub fn end(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    /// All waypoints in order, for rendering the route polyline.
    #[inline]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Sum of haversine segment lengths in metres.
    pub fn total_length_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum()
    }
}
