//! Horizontal heading shared by the motion, sim, and scene crates.

/// Which way a snail is crawling.
///
/// Only two values exist, so the "direction is ±1" invariant holds by
/// construction.  Use [`sign`](Self::sign) where the arithmetic wants `±1.0`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Moving towards negative `x`.
    Left,
    /// Moving towards positive `x`.
    Right,
}

impl Direction {
    /// `-1.0` for `Left`, `+1.0` for `Right`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left  => -1.0,
            Direction::Right =>  1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `true` if travelling this way from `from_x` reduces the gap to `to_x`.
    ///
    /// Coincident positions are never "towards".
    #[inline]
    pub fn is_towards(self, from_x: f64, to_x: f64) -> bool {
        let dx = from_x - to_x;
        match self {
            Direction::Right => dx < 0.0,
            Direction::Left  => dx > 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
