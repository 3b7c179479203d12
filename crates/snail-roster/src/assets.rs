//! Static asset references and the reference roster.

use snail_core::SnailId;

use crate::SnailData;

/// Substitute sprite shown when a snail's own image fails to load.
pub const FALLBACK_SPRITE: &str = "https://img.icons8.com/color/144/snail.png";

const BASE_URL: &str = "https://github.com/fraffee/snail-sanctuary/blob/main/";

/// Image suffixes of the reference roster: `a`..`z`, then `aa`..`ee`.
const SUFFIXES: [&str; 31] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
    "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
    "aa", "bb", "cc", "dd", "ee",
];

/// A sound the scene can play.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundAsset {
    pub url:     String,
    /// Playback volume in `[0, 1]`.
    pub volume:  f32,
    pub looping: bool,
}

/// Every non-snail asset the scene references.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetTable {
    pub background: String,
    /// Ambient nature loop, played while unmuted.
    pub ambient:    SoundAsset,
    /// Short "pop" played when a snail is selected while unmuted.
    pub click:      SoundAsset,
}

impl Default for AssetTable {
    fn default() -> Self {
        Self {
            background: asset_url("background.png"),
            ambient: SoundAsset {
                url:     "https://assets.mixkit.co/active_storage/sfx/2432/2432-preview.mp3".into(),
                volume:  0.15,
                looping: true,
            },
            click: SoundAsset {
                url:     "https://assets.mixkit.co/active_storage/sfx/2571/2571-preview.mp3".into(),
                volume:  0.2,
                looping: false,
            },
        }
    }
}

/// The 31-snail reference roster, ids `1..=31`.
pub fn reference_roster() -> Vec<SnailData> {
    SUFFIXES
        .iter()
        .enumerate()
        .map(|(i, suffix)| {
            SnailData::new(
                SnailId(i as u32 + 1),
                asset_url(&format!("snail_{suffix}.png")),
                asset_url(&format!("card_{suffix}.png")),
            )
        })
        .collect()
}

fn asset_url(file: &str) -> String {
    format!("{BASE_URL}{file}?raw=true")
}
