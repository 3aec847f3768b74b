//! Position sink trait for camera follow and rendering.

use nav_core::Coordinate;

/// Where an update came from: the simulated playback clock or a real
/// device fix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpdateSource {
    Playback,
    Live,
}

/// One position+heading sample, emitted at most once per accepted tick or
/// fix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionUpdate {
    pub position:    Coordinate,
    /// Degrees clockwise from true north, in `[0, 360)`.
    pub heading_deg: f64,
    pub source:      UpdateSource,
}

/// Callbacks the engine invokes on every position/heading update.
///
/// Implementations drive the map camera and the moving marker.  Calls are
/// fire-and-forget from the engine's side and must not block; anything
/// slow belongs on the application's own queue.
pub trait PositionSink {
    /// A new position for the camera to follow.
    fn on_update(&mut self, update: &PositionUpdate);

    /// Simulated playback reached the final waypoint.
    fn on_completed(&mut self) {}
}

/// A [`PositionSink`] that does nothing.  Use when driving the engine
/// without a camera (tests, headless runs).
pub struct NoopSink;

impl PositionSink for NoopSink {
    fn on_update(&mut self, _update: &PositionUpdate) {}
}
