//! `nav-core` — foundational types for the navkit navigation engine.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (optional `serde`
//! only).  Everything here is infallible by construction; fallible
//! operations and their error enums live in the crates that own them
//! (`nav-route`, `nav-engine`).
//!
//! # What lives here
//!
//! | Module  | Contents                                  |
//! |---------|-------------------------------------------|
//! | [`geo`] | `Coordinate`, haversine distance, bearing |
//! | [`ids`] | `UserId`, `ItineraryId`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::Coordinate;
pub use ids::{ItineraryId, UserId};
