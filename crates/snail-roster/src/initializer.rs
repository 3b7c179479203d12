//! Initial field construction: lane layout plus the start-up random draws.
//!
//! This is the only place the sanctuary consumes randomness.  Per snail, in
//! roster order, the draws are:
//!
//! 1. heading (fair coin),
//! 2. lane jitter in `[-jitter, +jitter)`,
//! 3. base speed in `[min_speed, max_speed)`,
//! 4. starting `x` in `[0, viewport.width)`,
//! 5. oscillation phase in `[0, 1000)`.
//!
//! The order is part of the reproducibility contract: the same seed and
//! roster always yield the same field.

use snail_core::{Direction, LaneIndex, RandomSource, SanctuaryConfig};
use snail_motion::{MotionSettings, SnailState};
use tracing::debug;

use crate::SnailData;

/// Upper bound of the oscillation phase draw.
const SPEED_OFFSET_RANGE: f64 = 1_000.0;

// ── LaneLayout ────────────────────────────────────────────────────────────────

/// Evenly spaced horizontal lanes below the title block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneLayout {
    pub origin_y:    f64,
    pub lane_height: f64,
    pub lane_count:  u16,
    pub jitter:      f64,
}

impl LaneLayout {
    pub fn from_config(config: &SanctuaryConfig) -> Self {
        Self {
            origin_y:    config.layout_origin_y,
            lane_height: config.lane_height(),
            lane_count:  config.lane_count.max(1),
            jitter:      config.lane_jitter,
        }
    }

    /// Lane of the snail at roster position `index`: round-robin, so
    /// consecutive snails land in different lanes.
    #[inline]
    pub fn lane_for(&self, index: usize) -> LaneIndex {
        LaneIndex((index % usize::from(self.lane_count)) as u16)
    }

    /// Unjittered `y` of `lane`.
    #[inline]
    pub fn lane_center(&self, lane: LaneIndex) -> f64 {
        self.origin_y + f64::from(lane.0) * self.lane_height
    }
}

// ── SnailInitializer ──────────────────────────────────────────────────────────

/// Builds the initial field from a roster.
///
/// Infallible: configurations are validated before they get here (see
/// [`SanctuaryConfig::validate`] and [`MotionSettings::validate`]).
pub struct SnailInitializer {
    layout:         LaneLayout,
    viewport_width: f64,
    min_speed:      f64,
    max_speed:      f64,
}

impl SnailInitializer {
    pub fn new(config: &SanctuaryConfig, settings: &MotionSettings) -> Self {
        Self {
            layout:         LaneLayout::from_config(config),
            viewport_width: config.viewport.width,
            min_speed:      settings.min_speed,
            max_speed:      settings.max_speed,
        }
    }

    pub fn layout(&self) -> &LaneLayout {
        &self.layout
    }

    /// One [`SnailState`] per roster entry, in roster order.
    pub fn initialize<R: RandomSource>(&self, roster: &[SnailData], rng: &mut R) -> Vec<SnailState> {
        let snails: Vec<SnailState> = roster
            .iter()
            .enumerate()
            .map(|(i, data)| {
                let direction = if rng.coin() { Direction::Right } else { Direction::Left };
                let lane = self.layout.lane_for(i);
                let lane_y = self.layout.lane_center(lane)
                    + rng.uniform(-self.layout.jitter, self.layout.jitter);
                let base_speed = rng.uniform(self.min_speed, self.max_speed);
                let x = rng.uniform(0.0, self.viewport_width);
                let speed_offset = rng.uniform(0.0, SPEED_OFFSET_RANGE);

                SnailState::new(data.id, x, lane_y, base_speed, speed_offset, direction)
            })
            .collect();

        debug!(
            snails = snails.len(),
            lanes = self.layout.lane_count,
            lane_height = self.layout.lane_height,
            "initialized field"
        );
        snails
    }
}
