//! `nav-engine` — route playback and live-navigation state machines.
//!
//! The engine is single-threaded and purely reactive: it owns no threads
//! and never blocks.  The application drives it with two kinds of events,
//! delivered one at a time on a cooperative scheduler:
//!
//! - a fixed-cadence timer calls [`Engine::tick`] while a simulated trip
//!   is playing back, and
//! - the platform's location layer calls [`Engine::push_fix`] while a real
//!   trip is being tracked.
//!
//! Every accepted event produces at most one position+heading update on the
//! caller-supplied [`PositionSink`] (the camera/renderer).  Cancellation is
//! synchronous: once `pause` or `stop` returns, a tick already queued
//! behind it is dropped by the [`Ticker`] gate, never observed.
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`playback`] | `PlaybackController` — fixed-step simulated trips   |
//! | [`live`]     | `LiveTracker` — GPS trail + heading recomputation   |
//! | [`incident`] | pause / report / resume interrupt protocol          |
//! | [`engine`]   | `Engine` façade enforcing one-active-mode           |
//! | [`ticker`]   | cancellable fixed-period tick gate                  |
//! | [`sink`]     | `PositionSink` camera callback trait                |
//! | [`location`] | `LocationSource` device-location seam               |
//! | [`error`]    | `EngineError`, `EngineResult`                       |

pub mod engine;
pub mod error;
pub mod incident;
pub mod live;
pub mod location;
pub mod playback;
pub mod sink;
pub mod ticker;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{Engine, EngineMode};
pub use error::{EngineError, EngineResult};
pub use incident::{AuthToken, IncidentGateway, IncidentInterrupt, IncidentKind, IncidentRequest};
pub use live::{LiveStatus, LiveTracker};
pub use location::{Accuracy, LocationSource, WatchProfile};
pub use playback::{PlaybackConfig, PlaybackController, PlaybackStatus};
pub use sink::{NoopSink, PositionSink, PositionUpdate, UpdateSource};
pub use ticker::Ticker;
