//! Scene-level configuration.

use crate::{SnailError, SnailResult, Viewport};

/// Top-level sanctuary configuration.
///
/// Typically built from defaults or loaded from a JSON file by the
/// application crate and handed to the initializer and the simulator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SanctuaryConfig {
    /// Viewport size at start-up.
    pub viewport: Viewport,

    /// Number of horizontal lanes snails are spread across.  Default: 25.
    pub lane_count: u16,

    /// `y` of lane 0.  Default: 220 (clears the title block).
    pub layout_origin_y: f64,

    /// Height subtracted from the viewport before dividing it into lanes.
    /// Default: 300.
    pub reserved_top: f64,

    /// Half-width of the uniform per-snail lane jitter.  Default: 7.5.
    pub lane_jitter: f64,

    /// Master RNG seed.  The same seed always produces the same initial field.
    pub seed: u64,

    /// Emit a full snapshot to observers every N frames.  0 disables
    /// snapshots; 1 = every frame.
    pub snapshot_interval_frames: u64,
}

impl Default for SanctuaryConfig {
    fn default() -> Self {
        Self {
            viewport:                 Viewport::default(),
            lane_count:               25,
            layout_origin_y:          220.0,
            reserved_top:             300.0,
            lane_jitter:              7.5,
            seed:                     0x5A11_5A11,
            snapshot_interval_frames: 1,
        }
    }
}

impl SanctuaryConfig {
    /// Vertical distance between adjacent lane centres.
    ///
    /// Negative when the viewport is shorter than `reserved_top`; lanes then
    /// stack upwards from the origin, which is odd but harmless.
    #[inline]
    pub fn lane_height(&self) -> f64 {
        (self.viewport.height - self.reserved_top) / f64::from(self.lane_count.max(1))
    }

    /// Reject configurations the initializer cannot lay out.
    pub fn validate(&self) -> SnailResult<()> {
        if !self.viewport.is_valid() {
            return Err(SnailError::Config(format!(
                "viewport must be finite and positive, got {} x {}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.lane_count == 0 {
            return Err(SnailError::Config("lane_count must be at least 1".into()));
        }
        if !(self.lane_jitter.is_finite() && self.lane_jitter >= 0.0) {
            return Err(SnailError::Config(format!(
                "lane_jitter must be finite and non-negative, got {}",
                self.lane_jitter
            )));
        }
        if !(self.layout_origin_y.is_finite() && self.reserved_top.is_finite()) {
            return Err(SnailError::Config("lane layout offsets must be finite".into()));
        }
        Ok(())
    }
}
