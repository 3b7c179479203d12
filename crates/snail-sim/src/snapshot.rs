//! What the render layer sees each frame.

use snail_core::{Direction, SnailId, Vec2};

/// Read-only per-snail state handed to the render consumer.
///
/// The simulator is the single source of truth for these fields; renderers
/// must not keep their own copies between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnailSnapshot {
    pub id:        SnailId,
    pub position:  Vec2,
    pub direction: Direction,
    pub is_paused: bool,
}
