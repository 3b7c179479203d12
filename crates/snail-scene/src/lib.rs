//! `snail-scene`: everything around the motion simulator that a user sees
//! and hears.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`command`]  | `SceneCommand`, `SoundCue`: effects for the outer UI layer    |
//! | [`backdrop`] | `Backdrop`: background filter, clear or dimmed               |
//! | [`overlay`]  | `DetailOverlay`, `DismissReason`, `OverlayTarget`, `Key`      |
//! | [`view`]     | `SnailView`: per-snail draw parameters                       |
//! | [`scene`]    | `Scene`: selection, mute, overlay, and teardown state machine |
//! | [`error`]    | `SceneError`, `SceneResult<T>`                                 |
//!
//! # Design notes
//!
//! `Scene` never touches a window or an audio device.  Every user event
//! returns a `Vec<SceneCommand>`; the embedding layer carries them out in
//! order.  The paused snail lives in the simulator's selection gateway, so the
//! scene takes `&mut Sim` for the events that pause or resume.

pub mod backdrop;
pub mod command;
pub mod error;
pub mod overlay;
pub mod scene;
pub mod view;


pub use backdrop::Backdrop;
pub use command::{SceneCommand, SoundCue};
pub use error::{SceneError, SceneResult};
pub use overlay::{DetailOverlay, DismissReason, Key, OverlayTarget};
pub use scene::Scene;
pub use view::SnailView;
