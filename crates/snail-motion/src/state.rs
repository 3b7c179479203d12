//! Per-snail movement state.

use snail_core::{Direction, SnailId, Vec2};

/// The movement state for a single snail.
///
/// `lane_y`, `base_speed`, and `speed_offset` are fixed when the snail is
/// created; the motion step only ever writes `position.x`, `direction`, and
/// `speed`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnailState {
    pub id: SnailId,

    /// Current position.  `y` equals `lane_y` for initializer-built snails.
    pub position: Vec2,

    /// Vertical coordinate of the snail's lane, used for lane-membership
    /// comparisons.  Never mutated.
    pub lane_y: f64,

    /// Innate pace in px per frame, drawn once from the speed range.
    pub base_speed: f64,

    /// Phase offset of the speed oscillation, drawn once from `[0, 1000)`.
    pub speed_offset: f64,

    pub direction: Direction,

    /// Speed applied in the most recent frame (`base_speed` before the first).
    pub speed: f64,
}

impl SnailState {
    /// A snail sitting in its lane, travelling at its base speed.
    pub fn new(
        id:           SnailId,
        x:            f64,
        lane_y:       f64,
        base_speed:   f64,
        speed_offset: f64,
        direction:    Direction,
    ) -> Self {
        Self {
            id,
            position: Vec2::new(x, lane_y),
            lane_y,
            base_speed,
            speed_offset,
            direction,
            speed: base_speed,
        }
    }

    /// `true` if `other` is within `tolerance` of this snail's lane.
    #[inline]
    pub fn shares_lane(&self, other: &SnailState, tolerance: f64) -> bool {
        (self.lane_y - other.lane_y).abs() < tolerance
    }
}
