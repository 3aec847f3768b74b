//! The simulated-trip state machine.
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Running ──pause──▶ Paused
//!                   ▲  │               │
//!                   │  └──── resume ───┘
//!                   │
//!                   └─(last segment finishes)─▶ Completed
//!
//! stop(): Running | Paused | Completed ──▶ Idle
//! ```
//!
//! # Clock model
//!
//! Playback is a fixed-step clock, not wall-clock-synced: every accepted
//! tick advances `progress` by `step_per_tick`, regardless of how late the
//! timer fired.  With the defaults (100 ms period, 0.02 step) one segment
//! takes ~5 s of real time.

use nav_core::Coordinate;
use nav_route::Route;

use crate::{
    EngineError, EngineResult, PositionSink, PositionUpdate, Ticker, UpdateSource,
};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Playback clock parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Milliseconds between ticks (advisory; the application's timer uses it).
    pub tick_period_ms: u64,
    /// Progress fraction added per tick.  `0.02` traverses a segment in 50
    /// ticks.
    pub step_per_tick: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 100,
            step_per_tick:  0.02,
        }
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

impl PlaybackStatus {
    /// Lowercase name for error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            PlaybackStatus::Idle => "idle",
            PlaybackStatus::Running => "running",
            PlaybackStatus::Paused => "paused",
            PlaybackStatus::Completed => "completed",
        }
    }
}

// ── PlaybackController ────────────────────────────────────────────────────────

/// Advances a simulated position along a [`Route`], one fixed step per
/// accepted tick.
///
/// The controller exclusively owns its [`Ticker`]; `pause`/`stop` cancel it
/// synchronously, so a tick still queued on the scheduler when either call
/// returns is dropped without touching state.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    route:  Route,
    step:   f64,
    ticker: Ticker,

    status:        PlaybackStatus,
    /// Index of the current segment's starting waypoint;
    /// `< route.segment_count()` whenever playback has started.
    segment_index: usize,
    /// Fraction of the current segment traversed, in `[0, 1)`.
    progress:      f64,
    heading_deg:   f64,
}

impl PlaybackController {
    /// Wrap a route for playback.  The controller starts `Idle`; nothing
    /// is scheduled until [`start`][Self::start].
    pub fn new(route: Route, config: PlaybackConfig) -> Self {
        Self {
            route,
            step: config.step_per_tick,
            ticker: Ticker::new(config.tick_period_ms),
            status: PlaybackStatus::Idle,
            segment_index: 0,
            progress: 0.0,
            heading_deg: 0.0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[inline]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    #[inline]
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    /// The tick schedule, for the application's timer.
    #[inline]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Begin playback at the start of `from_segment`.
    ///
    /// Valid from `Idle` or `Completed` (replaying a finished route).
    pub fn start(&mut self, from_segment: usize) -> EngineResult<()> {
        match self.status {
            PlaybackStatus::Idle | PlaybackStatus::Completed => {}
            s => {
                return Err(EngineError::InvalidTransition {
                    op:    "start playback",
                    state: s.name(),
                });
            }
        }
        self.check_segment(from_segment)?;

        self.segment_index = from_segment;
        self.progress = 0.0;
        self.refresh_heading();
        self.ticker.arm();
        self.status = PlaybackStatus::Running;
        Ok(())
    }

    /// Process one timer tick.
    ///
    /// Ignored unless the controller is `Running` and the ticker is still
    /// armed; a stale tick delivered after `pause`/`stop` is dropped here.
    pub fn on_tick(&mut self, sink: &mut impl PositionSink) {
        if self.status != PlaybackStatus::Running || !self.ticker.is_armed() {
            return;
        }

        self.progress += self.step;

        if self.progress >= 1.0 {
            let last_segment = self.segment_index + 1 == self.route.segment_count();
            if last_segment {
                // Arrival: emit the final waypoint, then stop the clock.
                self.progress = 0.0;
                self.status = PlaybackStatus::Completed;
                self.ticker.cancel();
                self.emit(self.route.end(), sink);
                sink.on_completed();
                return;
            }
            // Segment rollover: land exactly on the shared waypoint and
            // face down the next segment.
            self.segment_index += 1;
            self.progress = 0.0;
            self.refresh_heading();
        }

        let Some((a, b)) = self.route.segment(self.segment_index) else {
            return; // unreachable: segment_index is bounds-checked above
        };
        self.emit(a.interpolate(b, self.progress), sink);
    }

    /// Suspend playback, preserving `segment_index`/`progress` exactly.
    pub fn pause(&mut self) -> EngineResult<()> {
        if self.status != PlaybackStatus::Running {
            return Err(EngineError::InvalidTransition {
                op:    "pause playback",
                state: self.status.name(),
            });
        }
        self.ticker.cancel();
        self.status = PlaybackStatus::Paused;
        Ok(())
    }

    /// Continue a paused playback.
    ///
    /// With `Some(segment)`, progress restarts at 0 from that segment (the
    /// incident-resume path).  With `None`, the preserved
    /// `segment_index`/`progress` pair is resumed with no position loss.
    pub fn resume(&mut self, from_segment: Option<usize>) -> EngineResult<()> {
        if self.status != PlaybackStatus::Paused {
            return Err(EngineError::InvalidTransition {
                op:    "resume playback",
                state: self.status.name(),
            });
        }
        if let Some(segment) = from_segment {
            self.check_segment(segment)?;
            self.segment_index = segment;
            self.progress = 0.0;
            self.refresh_heading();
        }
        self.ticker.arm();
        self.status = PlaybackStatus::Running;
        Ok(())
    }

    /// Abort playback and discard position state.
    pub fn stop(&mut self) -> EngineResult<()> {
        if self.status == PlaybackStatus::Idle {
            return Err(EngineError::InvalidTransition {
                op:    "stop playback",
                state: self.status.name(),
            });
        }
        self.halt();
        Ok(())
    }

    /// Unconditional reset to `Idle`.  Used by the façade when the other
    /// mode displaces this one.
    pub(crate) fn halt(&mut self) {
        self.ticker.cancel();
        self.status = PlaybackStatus::Idle;
        self.segment_index = 0;
        self.progress = 0.0;
        self.heading_deg = 0.0;
    }

    /// Whether a timer should currently be delivering ticks.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.status, PlaybackStatus::Running | PlaybackStatus::Paused)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_segment(&self, index: usize) -> EngineResult<()> {
        let segments = self.route.segment_count();
        if index >= segments {
            return Err(EngineError::SegmentOutOfRange { index, segments });
        }
        Ok(())
    }

    /// Recompute heading from the current segment.  Duplicate waypoints
    /// (same point twice in a row) keep the previous heading instead of
    /// snapping to an arbitrary value.
    fn refresh_heading(&mut self) {
        if let Some((a, b)) = self.route.segment(self.segment_index)
            && a != b
        {
            self.heading_deg = a.bearing_deg(b);
        }
    }

    fn emit(&self, position: Coordinate, sink: &mut impl PositionSink) {
        sink.on_update(&PositionUpdate {
            position,
            heading_deg: self.heading_deg,
            source: UpdateSource::Playback,
        });
    }
}
