//! The engine façade: one active mode, ever.
//!
//! The original client kept simulation and live navigation in separate
//! pieces of screen state with nothing stopping both from running at once.
//! Here the façade owns a single [`EngineMode`] slot, and starting either
//! mode displaces whatever occupies it.
//!
//! A finished occupant is not evicted eagerly: a `Completed` playback or a
//! stopped tracker stays in the slot so the UI can keep rendering the
//! route or the traveled trail.  "At most one *active* mode" is the
//! invariant; the slot itself always holds the most recent session.

use nav_core::{Coordinate, UserId};
use nav_route::Route;

use crate::{
    AuthToken, EngineError, EngineResult, IncidentGateway, IncidentInterrupt, IncidentKind,
    LiveTracker, LocationSource, PlaybackConfig, PlaybackController, PositionSink, WatchProfile,
};

// ── EngineMode ────────────────────────────────────────────────────────────────

/// What the engine is currently doing (or most recently did).
#[derive(Debug, Clone, Default)]
pub enum EngineMode {
    /// No trip yet this session.
    #[default]
    None,
    /// Simulated playback of a planned route.
    Simulating(PlaybackController),
    /// Mirroring live device fixes.
    Navigating(LiveTracker),
}

impl EngineMode {
    /// Lowercase name for error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            EngineMode::None => "no active mode",
            EngineMode::Simulating(_) => "simulating",
            EngineMode::Navigating(_) => "navigating",
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Single entry point for the surrounding UI.
///
/// Owns the mode slot, the device-location source, and the incident
/// interrupt; the application drives it with `tick` (from its timer) and
/// `push_fix` (from its location adapter), both plain `&mut self` calls on
/// one cooperative scheduler.
///
/// # Type parameter
///
/// `L` is the platform's [`LocationSource`] adapter.  Swap in a scripted
/// source for tests or replays with no runtime overhead.
pub struct Engine<L: LocationSource> {
    location: L,
    config:   PlaybackConfig,
    incident: IncidentInterrupt,
    mode:     EngineMode,
}

impl<L: LocationSource> Engine<L> {
    pub fn new(location: L, config: PlaybackConfig) -> Self {
        Self {
            location,
            config,
            incident: IncidentInterrupt::new(),
            mode: EngineMode::None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn mode(&self) -> &EngineMode {
        &self.mode
    }

    /// The playback session occupying the slot, if any (in any status).
    pub fn playback(&self) -> Option<&PlaybackController> {
        match &self.mode {
            EngineMode::Simulating(pc) => Some(pc),
            _ => None,
        }
    }

    /// The live session occupying the slot, if any (in any status).
    pub fn tracker(&self) -> Option<&LiveTracker> {
        match &self.mode {
            EngineMode::Navigating(lt) => Some(lt),
            _ => None,
        }
    }

    /// One-shot device fix, e.g. to prefill the departure field.
    pub fn current_fix(&mut self) -> EngineResult<Coordinate> {
        self.location.current_fix()
    }

    // ── Simulated playback ────────────────────────────────────────────────

    /// Displace any active mode and start simulated playback of `route`
    /// from `from_segment`.
    ///
    /// On a start failure (bad segment index) nothing is scheduled and the
    /// slot is left as it was, already halted.
    pub fn start_playback(&mut self, route: Route, from_segment: usize) -> EngineResult<()> {
        self.displace_active("starting playback");
        let mut pc = PlaybackController::new(route, self.config.clone());
        pc.start(from_segment)?;
        self.mode = EngineMode::Simulating(pc);
        Ok(())
    }

    /// Deliver one timer tick to the playback session.
    ///
    /// Silently ignored when nothing is simulating — a stale timer firing
    /// after a mode switch is the normal cancellation race, not an error.
    pub fn tick(&mut self, sink: &mut impl PositionSink) {
        if let EngineMode::Simulating(pc) = &mut self.mode {
            pc.on_tick(sink);
        }
    }

    pub fn pause_playback(&mut self) -> EngineResult<()> {
        match &mut self.mode {
            EngineMode::Simulating(pc) => pc.pause(),
            other => Err(wrong_mode("pause playback", other)),
        }
    }

    pub fn resume_playback(&mut self, from_segment: Option<usize>) -> EngineResult<()> {
        match &mut self.mode {
            EngineMode::Simulating(pc) => pc.resume(from_segment),
            other => Err(wrong_mode("resume playback", other)),
        }
    }

    // ── Live navigation ───────────────────────────────────────────────────

    /// Displace any active mode and start mirroring device fixes.
    ///
    /// A subscription failure surfaces as `LocationUnavailable`; nothing
    /// starts and the slot is left as it was, already halted.
    pub fn start_navigation(&mut self, profile: &WatchProfile) -> EngineResult<()> {
        self.displace_active("starting live navigation");
        let mut tracker = LiveTracker::new();
        tracker.start(&mut self.location, profile)?;
        self.mode = EngineMode::Navigating(tracker);
        Ok(())
    }

    /// Deliver one raw device fix to the live session.
    ///
    /// Silently ignored when nothing is navigating (a fix already in
    /// flight when the subscription was torn down).
    pub fn push_fix(&mut self, fix: Coordinate, sink: &mut impl PositionSink) {
        if let EngineMode::Navigating(lt) = &mut self.mode {
            lt.on_fix(fix, sink);
        }
    }

    // ── Stop ──────────────────────────────────────────────────────────────

    /// Stop whichever mode is active.
    ///
    /// The finished session stays in the slot (a stopped tracker keeps its
    /// trail renderable); only a new start displaces it.
    pub fn stop(&mut self) -> EngineResult<()> {
        match &mut self.mode {
            EngineMode::Simulating(pc) => {
                pc.stop()?;
                self.incident.clear();
                Ok(())
            }
            EngineMode::Navigating(lt) => lt.stop(&mut self.location),
            EngineMode::None => Err(EngineError::InvalidTransition {
                op:    "stop",
                state: "no active mode",
            }),
        }
    }

    // ── Incident interrupt ────────────────────────────────────────────────

    /// Suspend the running playback for an incident report.  Returns the
    /// paused route position for the incident-type picker.
    pub fn begin_incident(&mut self) -> EngineResult<Coordinate> {
        match &mut self.mode {
            EngineMode::Simulating(pc) => self.incident.begin(pc),
            other => Err(wrong_mode("report incident", other)),
        }
    }

    /// Submit the pending incident; on success playback resumes at the
    /// captured segment.
    pub fn submit_incident(
        &mut self,
        gateway: &mut impl IncidentGateway,
        kind: IncidentKind,
        reporter: UserId,
        description: impl Into<String>,
        token: &AuthToken,
    ) -> EngineResult<()> {
        match &mut self.mode {
            EngineMode::Simulating(pc) => {
                self.incident
                    .submit(pc, gateway, kind, reporter, description, token)
            }
            other => Err(wrong_mode("submit incident", other)),
        }
    }

    /// Resume the suspended playback without reporting.
    pub fn abandon_incident(&mut self) -> EngineResult<()> {
        match &mut self.mode {
            EngineMode::Simulating(pc) => self.incident.abandon(pc),
            other => Err(wrong_mode("abandon incident", other)),
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Halt whatever is active so a new mode can take the slot.
    /// Policy (documented in DESIGN.md): starting one mode implicitly
    /// stops the other rather than failing fast.
    fn displace_active(&mut self, reason: &str) {
        match &mut self.mode {
            EngineMode::Simulating(pc) if pc.is_active() => {
                log::info!(
                    "{reason}: stopping simulated playback at segment {}",
                    pc.segment_index()
                );
                pc.halt();
                self.incident.clear();
            }
            EngineMode::Navigating(lt) if lt.is_active() => {
                log::info!("{reason}: stopping live navigation");
                lt.halt(&mut self.location);
            }
            _ => {}
        }
    }
}

fn wrong_mode(op: &'static str, mode: &EngineMode) -> EngineError {
    EngineError::InvalidTransition {
        op,
        state: mode.name(),
    }
}
