//! `snail-sim`: the display-refresh frame loop for the snail sanctuary.
//!
//! # Frame loop
//!
//! ```text
//! start():  request the first frame
//! on each delivered frame (timestamp t):
//!   ① consume the pending request
//!   ② step every snail except the paused one (snail-motion)
//!   ③ swap in the new field; report turns and, at the snapshot
//!      interval, the full field to the observer
//!   ④ request the next frame
//! stop():   cancel the pending request; no further frame is stepped
//! ```
//!
//! Exactly one step runs per delivered frame and steps never overlap: the
//! loop is single-threaded and the next frame is requested only after the
//! current one has started.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `fx-hash` | FxHash for the turn-cooldown table.                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use snail_core::{SanctuaryConfig, Timestamp};
//! use snail_motion::MotionSettings;
//! use snail_sim::{FixedRateSource, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SanctuaryConfig::default(), MotionSettings::default())
//!     .build()?;
//! let mut clock = FixedRateSource::new(Timestamp::ZERO, 60.0).with_limit(600);
//! sim.run(&mut clock, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod selection;
pub mod sim;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{FrameObserver, FrameReport, NoopObserver};
pub use selection::Selection;
pub use sim::{FrameRequest, Sim, StopHandle};
pub use snapshot::SnailSnapshot;
pub use source::{FixedRateSource, FrameSource, ScriptedSource};
