//! Cancellable fixed-period tick gate.

use std::time::Duration;

/// The handle for one periodic tick schedule.
///
/// A [`PlaybackController`][crate::PlaybackController] exclusively owns its
/// `Ticker`; nothing else can re-arm or cancel it.  The controller checks
/// [`is_armed`][Ticker::is_armed] before mutating any state on a delivered
/// tick, so a tick that was already queued on the scheduler when `cancel`
/// ran is dropped on delivery.  That makes cancellation synchronous: once
/// `pause()`/`stop()` returns, no further update can be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    armed:  bool,
}

impl Ticker {
    /// Create a disarmed ticker with the given period.
    ///
    /// The period is advisory: the engine does not sleep.  It is exposed so
    /// the driving application knows how often to call `tick`.
    pub fn new(period_ms: u64) -> Self {
        Self {
            period: Duration::from_millis(period_ms),
            armed:  false,
        }
    }

    /// The configured tick period.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Begin accepting ticks.
    #[inline]
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Stop accepting ticks.  Takes effect immediately: any tick delivered
    /// after this call is dropped.
    #[inline]
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Whether a delivered tick should be processed.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
