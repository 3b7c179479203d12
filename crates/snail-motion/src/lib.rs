//! `snail-motion`: snail movement state and the per-frame motion step.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`settings`] | `MotionSettings`: speeds, radii, margins, cooldown            |
//! | [`state`]    | `SnailState`: one snail's position, lane, pace, and heading   |
//! | [`cooldown`] | `TurnCooldowns`: last-turn timestamp per snail                |
//! | [`engine`]   | `MotionEngine`: breathing speed, wraparound, lane avoidance   |
//!
//! # Movement model
//!
//! Each frame, every snail except the paused one:
//!
//! 1. takes a "breathing" speed `base * (0.8 + 0.4 * sin((t + offset) * 5e-4))`,
//! 2. crawls that many pixels along its heading (no `dt` scaling),
//! 3. if its turn cooldown has expired, may reverse once, either because it
//!    wandered more than `wrap_margin` past a screen edge, or because it is
//!    closing on a same-lane neighbour.
//!
//! The step reads peers from the *previous* frame only, so the outcome does
//! not depend on iteration order.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the cooldown table.         |
//! | `serde`   | Derives `Serialize`/`Deserialize` on settings and state.  |

pub mod cooldown;
pub mod engine;
pub mod settings;
pub mod state;


pub use cooldown::TurnCooldowns;
pub use engine::{MotionEngine, StepOutcome, TurnCause, TurnEvent};
pub use settings::MotionSettings;
pub use state::SnailState;
