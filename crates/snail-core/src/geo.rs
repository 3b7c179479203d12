//! Screen-space coordinates.
//!
//! Everything is in CSS-style pixels with the origin at the top-left corner
//! and `y` growing downwards.  `f64` keeps the per-frame increments (a few
//! tenths of a pixel) from accumulating rounding error over long runs.

/// A point in screen space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Viewport dimensions, read once at start-up.
///
/// Resizing the window afterwards does not re-layout the lanes or move the
/// wraparound boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width:  f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when both dimensions are finite and strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Viewport {
    /// A 1920 × 1080 desktop window.
    fn default() -> Self {
        Self { width: 1920.0, height: 1080.0 }
    }
}
