//! Device-location seam.
//!
//! The engine never touches GPS hardware or permission prompts.  The
//! platform adapter implements [`LocationSource`] and, while a watch
//! subscription is active, forwards each raw fix to
//! [`Engine::push_fix`][crate::Engine::push_fix] in delivery order.

use nav_core::Coordinate;

use crate::EngineResult;

/// Requested fix quality.  Maps onto whatever tiers the platform offers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Accuracy {
    Low,
    Balanced,
    High,
}

/// Parameters for a watch subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchProfile {
    pub accuracy:        Accuracy,
    /// Minimum milliseconds between fixes.
    pub min_interval_ms: u64,
    /// Minimum metres moved between fixes.
    pub min_distance_m:  f64,
}

impl Default for WatchProfile {
    /// High-accuracy foreground navigation: a fix at most once a second,
    /// suppressed under one metre of movement.
    fn default() -> Self {
        Self {
            accuracy:        Accuracy::High,
            min_interval_ms: 1_000,
            min_distance_m:  1.0,
        }
    }
}

/// Raw device-location access.
///
/// Permission must already be granted when these are called; a denied
/// permission or hardware failure surfaces as
/// [`EngineError::LocationUnavailable`][crate::EngineError::LocationUnavailable]
/// and the engine does not start.
pub trait LocationSource {
    /// One-shot fix, e.g. to prefill the departure address.
    fn current_fix(&mut self) -> EngineResult<Coordinate>;

    /// Start a fix stream matching `profile`.
    fn subscribe(&mut self, profile: &WatchProfile) -> EngineResult<()>;

    /// Tear down the stream.  Must take effect before returning: no fix
    /// may be delivered after this call.
    fn unsubscribe(&mut self);
}
