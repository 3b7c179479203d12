//! The challenge-card detail overlay.

use snail_core::SnailId;

/// Card opacity after the card image failed to load.
pub const FAILED_CARD_OPACITY: f32 = 0.5;

/// The open detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailOverlay {
    pub snail:        SnailId,
    pub card_image:   String,
    pub card_opacity: f32,
}

impl DetailOverlay {
    pub fn new(snail: SnailId, card_image: impl Into<String>) -> Self {
        Self { snail, card_image: card_image.into(), card_opacity: 1.0 }
    }
}

/// How the overlay was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    EscapeKey,
    Backdrop,
}

/// What a click inside the open overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    /// The dark area around the card.
    Backdrop,
    /// The card itself; swallowed.
    Card,
    CloseButton,
}

/// Keys the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}
