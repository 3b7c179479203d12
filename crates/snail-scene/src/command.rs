//! Scene commands: the effects a scene event asks the outer layer to perform.

use snail_core::SnailId;

use crate::Backdrop;

/// Which sound a command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// The looping nature ambience.
    Ambient,
    /// The short pop played when a snail is picked.
    Click,
}

/// An effect produced by [`Scene`][crate::Scene] in response to a user event.
///
/// Commands are returned in the order they should be applied.  None of them
/// feed back into the simulator; failures are reported back through
/// [`Scene::ambient_failed`][crate::Scene::ambient_failed] and friends.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Start `cue` from `url`.
    ///
    /// `restart` rewinds a sound that is already playing.
    PlaySound {
        cue:     SoundCue,
        url:     String,
        volume:  f32,
        looping: bool,
        restart: bool,
    },

    /// Pause `cue` if it is playing.
    StopSound(SoundCue),

    /// Show the challenge card for `snail`.
    OpenDetail {
        snail:      SnailId,
        card_image: String,
    },

    /// Hide the detail overlay.
    CloseDetail,

    /// Apply a background filter.
    SetBackdrop(Backdrop),
}
