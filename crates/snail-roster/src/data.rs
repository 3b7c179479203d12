//! Static per-snail configuration.

use snail_core::SnailId;

/// One roster entry: the snail's id and its two images.
///
/// Fixed at start-up.  The motion model never reads the image references;
/// they travel alongside for the render and detail layers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SnailData {
    pub id:         SnailId,
    /// Sprite drawn in the scene.
    pub image:      String,
    /// Challenge card shown in the detail overlay.
    pub card_image: String,
}

impl SnailData {
    pub fn new(id: SnailId, image: impl Into<String>, card_image: impl Into<String>) -> Self {
        Self { id, image: image.into(), card_image: card_image.into() }
    }
}
