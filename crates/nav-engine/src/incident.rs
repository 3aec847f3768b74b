//! The incident-report interrupt protocol.
//!
//! Reporting an incident must not lose the trip: the interrupt pauses the
//! running playback, remembers where it was, hands the report to the
//! backend, and resumes from the remembered segment once the report lands.
//!
//! Only simulated playback is interruptible.  Live navigation mirrors the
//! real device, which keeps moving whether or not a report is in flight,
//! so there is nothing to suspend — this asymmetry is deliberate.

use std::fmt;

use nav_core::{Coordinate, UserId};

use crate::{EngineError, EngineResult, PlaybackController};

// ── Wire types ────────────────────────────────────────────────────────────────

/// Road-incident categories the backend understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    Accident,
    Traffic,
    ClosedRoad,
    Police,
    Obstacle,
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IncidentKind::Accident => "accident",
            IncidentKind::Traffic => "traffic",
            IncidentKind::ClosedRoad => "closed road",
            IncidentKind::Police => "police",
            IncidentKind::Obstacle => "obstacle",
        };
        f.write_str(s)
    }
}

/// One report, created on user action and discarded after submission
/// succeeds or fails.
///
/// `at` is the route waypoint preserved at pause time, not a live device
/// fix — the user is reporting what they see at the simulated position.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IncidentRequest {
    pub kind:        IncidentKind,
    pub at:          Coordinate,
    pub reporter:    UserId,
    pub description: String,
}

/// Bearer token for the incident backend.  Opaque; `Debug` redacts it so
/// it can never leak through error logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// The incident-report backend.
pub trait IncidentGateway {
    fn report(&mut self, request: &IncidentRequest, token: &AuthToken) -> EngineResult<()>;
}

// ── IncidentInterrupt ─────────────────────────────────────────────────────────

/// Coordinates pause → report → resume against a [`PlaybackController`].
///
/// Holds at most one captured resume point.  The capture survives a failed
/// submission so the user can retry, and is cleared by a successful
/// [`submit`][Self::submit] or an [`abandon`][Self::abandon].
#[derive(Debug, Clone, Default)]
pub struct IncidentInterrupt {
    resume_segment: Option<usize>,
}

impl IncidentInterrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment the interrupted playback will resume from, if a capture is
    /// pending.
    #[inline]
    pub fn pending(&self) -> Option<usize> {
        self.resume_segment
    }

    /// Suspend a running playback and capture its position.
    ///
    /// Returns the waypoint at the captured segment for the incident-type
    /// selection UI.  Fails (and captures nothing) unless playback is
    /// `Running`.
    pub fn begin(&mut self, playback: &mut PlaybackController) -> EngineResult<Coordinate> {
        playback.pause()?;
        let segment = playback.segment_index();
        self.resume_segment = Some(segment);
        self.waypoint_at(playback, segment)
    }

    /// Submit the report and, on success, resume playback from the start
    /// of the captured segment.
    ///
    /// On gateway failure playback stays `Paused` and the capture is kept,
    /// so the caller can retry `submit` or fall back to `abandon`.
    pub fn submit(
        &mut self,
        playback: &mut PlaybackController,
        gateway: &mut impl IncidentGateway,
        kind: IncidentKind,
        reporter: UserId,
        description: impl Into<String>,
        token: &AuthToken,
    ) -> EngineResult<()> {
        let Some(segment) = self.resume_segment else {
            return Err(EngineError::InvalidTransition {
                op:    "submit incident",
                state: "no incident pending",
            });
        };
        let at = self.waypoint_at(playback, segment)?;

        let request = IncidentRequest {
            kind,
            at,
            reporter,
            description: description.into(),
        };
        gateway.report(&request, token)?;
        log::info!("incident ({kind}) reported at {at} by {reporter}");

        playback.resume(Some(segment))?;
        self.resume_segment = None;
        Ok(())
    }

    /// Resume without reporting (the user dismissed the picker).
    pub fn abandon(&mut self, playback: &mut PlaybackController) -> EngineResult<()> {
        let Some(segment) = self.resume_segment else {
            return Err(EngineError::InvalidTransition {
                op:    "abandon incident",
                state: "no incident pending",
            });
        };
        playback.resume(Some(segment))?;
        self.resume_segment = None;
        Ok(())
    }

    /// Drop any capture without touching playback.  Used by the façade when
    /// playback itself is torn down.
    pub(crate) fn clear(&mut self) {
        self.resume_segment = None;
    }

    fn waypoint_at(
        &self,
        playback: &PlaybackController,
        segment: usize,
    ) -> EngineResult<Coordinate> {
        playback
            .route()
            .point(segment)
            .ok_or(EngineError::SegmentOutOfRange {
                index:    segment,
                segments: playback.route().segment_count(),
            })
    }
}
