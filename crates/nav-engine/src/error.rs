use nav_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The operation is not valid from the current state.  The call is a
    /// no-op: state is left exactly as it was.
    #[error("cannot {op} while {state}")]
    InvalidTransition {
        op:    &'static str,
        state: &'static str,
    },

    #[error("segment index {index} out of range (route has {segments} segments)")]
    SegmentOutOfRange { index: usize, segments: usize },

    /// Location permission denied or fix acquisition failed.  The tracker
    /// stays idle; there is no automatic retry.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    /// The incident-report backend rejected or failed the submission.
    /// Playback stays paused so the user can retry or resume manually.
    #[error("incident report failed: {0}")]
    ReportFailed(String),

    #[error("route error: {0}")]
    Route(#[from] RouteError),
}

pub type EngineResult<T> = Result<T, EngineError>;
