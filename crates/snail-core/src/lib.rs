//! `snail-core`: foundational types for the snail sanctuary.
//!
//! This crate is a dependency of every other `snail-*` crate.  It has no
//! `snail-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `SnailId`, `LaneIndex`                                |
//! | [`geo`]         | `Vec2`, `Viewport`                                    |
//! | [`direction`]   | `Direction` (left / right)                            |
//! | [`time`]        | `Timestamp`, `FrameIndex`                             |
//! | [`config`]      | `SanctuaryConfig`                                     |
//! | [`rng`]         | `RandomSource` trait, `SimRng`                        |
//! | [`error`]       | `SnailError`, `SnailResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SanctuaryConfig;
pub use direction::Direction;
pub use error::{SnailError, SnailResult};
pub use geo::{Vec2, Viewport};
pub use ids::{LaneIndex, SnailId};
pub use rng::{RandomSource, SimRng};
pub use time::{FrameIndex, Timestamp};
