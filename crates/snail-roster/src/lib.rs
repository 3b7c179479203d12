//! `snail-roster`: who lives in the sanctuary and where they start.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`data`]        | `SnailData`: id plus sprite and card image references     |
//! | [`assets`]      | `AssetTable`, `SoundAsset`, the 31-snail reference roster  |
//! | [`loader`]      | CSV roster loader (`id,image,card_image`)                  |
//! | [`initializer`] | `LaneLayout`, `SnailInitializer`: the initial field       |
//! | [`error`]       | `RosterError`, `RosterResult<T>`                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use snail_core::{SanctuaryConfig, SimRng};
//! use snail_motion::MotionSettings;
//! use snail_roster::{reference_roster, SnailInitializer};
//!
//! let config = SanctuaryConfig::default();
//! let roster = reference_roster();
//! let mut rng = SimRng::new(config.seed);
//! let snails = SnailInitializer::new(&config, &MotionSettings::default())
//!     .initialize(&roster, &mut rng);
//! ```

pub mod assets;
pub mod data;
pub mod error;
pub mod initializer;
pub mod loader;


pub use assets::{reference_roster, AssetTable, SoundAsset, FALLBACK_SPRITE};
pub use data::SnailData;
pub use error::{RosterError, RosterResult};
pub use initializer::{LaneLayout, SnailInitializer};
pub use loader::{load_roster_csv, load_roster_reader};
