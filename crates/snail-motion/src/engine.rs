//! The per-frame motion step: breathing speed, edge wraparound, and lane
//! avoidance.

use snail_core::{Direction, SnailId, Timestamp};
use tracing::trace;

use crate::{MotionSettings, SnailState, TurnCooldowns};

/// Why a snail reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnCause {
    /// Wandered more than `wrap_margin` past the left edge while heading left.
    LeftEdge,
    /// Wandered more than `wrap_margin` past the right edge while heading right.
    RightEdge,
    /// Closing on a same-lane neighbour.
    Avoiding(SnailId),
}

/// One direction change made during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnEvent {
    pub snail: SnailId,
    pub at:    Timestamp,
    /// The new heading.
    pub to:    Direction,
    pub cause: TurnCause,
}

/// Result of stepping the whole field once.
#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    /// The next frame, in the same order as the input.
    pub snails: Vec<SnailState>,
    /// Direction changes made this frame, in collection order.  A snail
    /// appears twice when it turns at the edge and then away from a peer.
    pub turns:  Vec<TurnEvent>,
}

/// Advance every snail in `prev` except `paused` by one frame.
///
/// Peers are read from `prev`, never from the partially built next frame, so
/// the result is independent of iteration order.  The paused snail is cloned
/// through untouched, but still counts as a peer for its neighbours.
///
/// `cooldowns` is read and updated in place; it is the only state that
/// carries over between frames besides the snails themselves.
pub fn step_snails(
    prev:           &[SnailState],
    paused:         Option<SnailId>,
    now:            Timestamp,
    viewport_width: f64,
    settings:       &MotionSettings,
    cooldowns:      &mut TurnCooldowns,
) -> StepOutcome {
    let mut outcome = StepOutcome {
        snails: Vec::with_capacity(prev.len()),
        turns:  Vec::new(),
    };

    for snail in prev {
        if Some(snail.id) == paused {
            outcome.snails.push(snail.clone());
            continue;
        }
        let next = advance_snail(snail, prev, now, viewport_width, settings, cooldowns, &mut outcome.turns);
        outcome.snails.push(next);
    }

    outcome
}

/// Advance a single snail against the previous frame `peers`, appending any
/// direction changes to `turns`.
///
/// The avoidance scan always runs after the boundary check and sees the
/// heading it left behind, so a snail can flip at the edge and flip back in
/// the same frame.  The scan itself reverses at most once.
pub fn advance_snail(
    snail:          &SnailState,
    peers:          &[SnailState],
    now:            Timestamp,
    viewport_width: f64,
    settings:       &MotionSettings,
    cooldowns:      &mut TurnCooldowns,
    turns:          &mut Vec<TurnEvent>,
) -> SnailState {
    let speed = settings.breathing_speed(snail.base_speed, snail.speed_offset, now.as_millis());
    let x = snail.position.x + speed * snail.direction.sign();
    let mut direction = snail.direction;

    if cooldowns.can_turn(snail.id, now, settings.turn_cooldown_ms) {
        if let Some(cause) = boundary_turn(x, direction, viewport_width, settings) {
            direction = turn(snail.id, direction, cause, x, now, cooldowns, turns);
        }
        if let Some(cause) = avoidance_turn(snail, x, direction, peers, settings) {
            direction = turn(snail.id, direction, cause, x, now, cooldowns, turns);
        }
    }

    let mut next = snail.clone();
    next.position.x = x;
    next.direction = direction;
    next.speed = speed;
    next
}

fn turn(
    snail:     SnailId,
    direction: Direction,
    cause:     TurnCause,
    x:         f64,
    now:       Timestamp,
    cooldowns: &mut TurnCooldowns,
    turns:     &mut Vec<TurnEvent>,
) -> Direction {
    let to = direction.reversed();
    cooldowns.record(snail, now);
    trace!(snail = snail.0, ?cause, %to, x, "snail turned");
    turns.push(TurnEvent { snail, at: now, to, cause });
    to
}

/// Edge wraparound: turn only when well past the edge *and* still heading out.
fn boundary_turn(
    x:              f64,
    direction:      Direction,
    viewport_width: f64,
    settings:       &MotionSettings,
) -> Option<TurnCause> {
    let margin = settings.wrap_margin;
    if x < -margin && direction == Direction::Left {
        Some(TurnCause::LeftEdge)
    } else if x > viewport_width + margin && direction == Direction::Right {
        Some(TurnCause::RightEdge)
    } else {
        None
    }
}

/// First same-lane peer (collection order) that `snail`, now at `x`, is
/// closing on within the avoidance distance.
fn avoidance_turn(
    snail:     &SnailState,
    x:         f64,
    direction: Direction,
    peers:     &[SnailState],
    settings:  &MotionSettings,
) -> Option<TurnCause> {
    let threshold = settings.avoidance_distance();
    peers
        .iter()
        .filter(|other| other.id != snail.id)
        .filter(|other| snail.shares_lane(other, settings.lane_tolerance))
        .find(|other| {
            let other_x = other.position.x;
            (x - other_x).abs() < threshold && direction.is_towards(x, other_x)
        })
        .map(|other| TurnCause::Avoiding(other.id))
}

// ── MotionEngine ──────────────────────────────────────────────────────────────

/// Owns the settings, the viewport width, and the cooldown table so callers
/// only have to supply the previous frame, the paused id, and the timestamp.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    pub settings: MotionSettings,

    /// Viewport width read at start-up; the right-hand wraparound boundary is
    /// `viewport_width + wrap_margin`.
    pub viewport_width: f64,

    /// Last-turn timestamps, persistent across frames.
    pub cooldowns: TurnCooldowns,
}

impl MotionEngine {
    pub fn new(settings: MotionSettings, viewport_width: f64) -> Self {
        Self {
            settings,
            viewport_width,
            cooldowns: TurnCooldowns::new(),
        }
    }

    /// Step the whole field once.  See [`step_snails`].
    pub fn step(
        &mut self,
        prev:   &[SnailState],
        paused: Option<SnailId>,
        now:    Timestamp,
    ) -> StepOutcome {
        step_snails(prev, paused, now, self.viewport_width, &self.settings, &mut self.cooldowns)
    }
}
