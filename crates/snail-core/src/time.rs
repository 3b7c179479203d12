//! Frame time model.
//!
//! # Design
//!
//! The display-refresh callback hands the simulator a high-resolution
//! timestamp in milliseconds since the page (or process) started.  That value
//! is the canonical clock: speed oscillation is a pure function of it, and
//! turn cooldowns are measured against it.  There is no fixed timestep and no
//! delta integration: a dropped frame simply means one fewer position
//! increment.
//!
//! `FrameIndex` counts frames actually stepped.  It exists for observers and
//! logging; the motion model never looks at it.

use std::fmt;

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// A display-refresh timestamp in milliseconds.
///
/// Expected to increase monotonically from frame to frame.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0.0);

    #[inline]
    pub fn from_millis(ms: f64) -> Self {
        Timestamp(ms)
    }

    #[inline]
    pub fn from_secs(secs: f64) -> Self {
        Timestamp(secs * 1_000.0)
    }

    #[inline]
    pub fn as_millis(self) -> f64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self` (negative if `earlier`
    /// is later).
    #[inline]
    pub fn since(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<f64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs_ms: f64) -> Timestamp {
        Timestamp(self.0 + rhs_ms)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}ms", self.0)
    }
}

// ── FrameIndex ────────────────────────────────────────────────────────────────

/// Number of frames stepped since the simulator started.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    pub const ZERO: FrameIndex = FrameIndex(0);

    #[inline]
    pub fn next(self) -> FrameIndex {
        FrameIndex(self.0 + 1)
    }
}

impl fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
