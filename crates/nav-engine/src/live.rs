//! The live-trip state machine.
//!
//! `Idle → Active → Idle`.  While active, every raw device fix extends the
//! trail and recomputes the heading from the previous fix; the trail and
//! last fix survive `stop` so the traveled path can still be rendered, and
//! are cleared by the next `start`.

use nav_core::Coordinate;

use crate::{
    EngineError, EngineResult, LocationSource, PositionSink, PositionUpdate, UpdateSource,
    WatchProfile,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LiveStatus {
    Idle,
    Active,
}

impl LiveStatus {
    pub fn name(self) -> &'static str {
        match self {
            LiveStatus::Idle => "idle",
            LiveStatus::Active => "active",
        }
    }
}

impl Default for LiveStatus {
    fn default() -> Self {
        LiveStatus::Idle
    }
}

/// Mirrors real device movement: accumulates a trail of fixes and keeps a
/// continuously recomputed heading.
#[derive(Debug, Clone, Default)]
pub struct LiveTracker {
    status:      LiveStatus,
    /// Fixes received this session, in delivery order.  Append-only while
    /// `Active`; only the last two matter for heading, the rest exist for
    /// rendering the traveled polyline.
    trail:       Vec<Coordinate>,
    last_fix:    Option<Coordinate>,
    heading_deg: f64,
}

impl LiveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn status(&self) -> LiveStatus {
        self.status
    }

    #[inline]
    pub fn trail(&self) -> &[Coordinate] {
        &self.trail
    }

    #[inline]
    pub fn last_fix(&self) -> Option<Coordinate> {
        self.last_fix
    }

    #[inline]
    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Subscribe to the fix stream and begin a fresh session.
    ///
    /// On subscription failure (permission denied, no hardware) the error
    /// is surfaced and the tracker stays `Idle` with the previous trail
    /// intact.
    pub fn start(
        &mut self,
        source: &mut impl LocationSource,
        profile: &WatchProfile,
    ) -> EngineResult<()> {
        if self.status == LiveStatus::Active {
            return Err(EngineError::InvalidTransition {
                op:    "start live tracking",
                state: self.status.name(),
            });
        }
        source.subscribe(profile)?;

        self.trail.clear();
        self.last_fix = None;
        self.heading_deg = 0.0;
        self.status = LiveStatus::Active;
        Ok(())
    }

    /// Process one raw device fix.
    ///
    /// Fixes are processed in delivery order; a fix delivered after `stop`
    /// is dropped here.  A fix identical to the previous one (stationary
    /// GPS noise) keeps the last known heading rather than recomputing an
    /// undefined bearing.
    pub fn on_fix(&mut self, fix: Coordinate, sink: &mut impl PositionSink) {
        if self.status != LiveStatus::Active {
            return;
        }

        if let Some(prev) = self.last_fix
            && prev != fix
        {
            self.heading_deg = prev.bearing_deg(fix);
        }
        self.last_fix = Some(fix);
        self.trail.push(fix);

        sink.on_update(&PositionUpdate {
            position:    fix,
            heading_deg: self.heading_deg,
            source:      UpdateSource::Live,
        });
    }

    /// End the session.  The trail and last fix are retained until the
    /// next [`start`][Self::start].
    pub fn stop(&mut self, source: &mut impl LocationSource) -> EngineResult<()> {
        if self.status != LiveStatus::Active {
            return Err(EngineError::InvalidTransition {
                op:    "stop live tracking",
                state: self.status.name(),
            });
        }
        self.halt(source);
        Ok(())
    }

    /// Unconditional return to `Idle`.  Used by the façade when the other
    /// mode displaces this one.
    pub(crate) fn halt(&mut self, source: &mut impl LocationSource) {
        if self.status == LiveStatus::Active {
            source.unsubscribe();
        }
        self.status = LiveStatus::Idle;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == LiveStatus::Active
    }
}
