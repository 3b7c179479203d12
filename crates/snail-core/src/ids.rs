//! Strongly typed, zero-cost identifier wrappers.
//!
//! Snail ids come from the roster and start at 1, so they are never used as
//! collection indices.

use std::fmt;

/// Newtype id with a `Name(n)` display form for logs.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Stable identifier of one snail, assigned by the roster and never reused.
    pub struct SnailId(u32);
}

typed_id! {
    /// Index of a horizontal lane in `0..lane_count`.
    pub struct LaneIndex(u16);
}
