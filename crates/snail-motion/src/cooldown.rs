//! The `TurnCooldowns` table: last direction change per snail.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use snail_core::{SnailId, Timestamp};

/// Timestamp of each snail's most recent direction change.
///
/// Sparse: a snail has an entry only after its first turn, and entries are
/// never removed.  A missing entry reads as [`Timestamp::ZERO`], so a snail
/// becomes eligible to turn once the clock passes the cooldown for the first
/// time.
#[derive(Debug, Default, Clone)]
pub struct TurnCooldowns {
    last_turn: HashMap<SnailId, Timestamp>,
}

impl TurnCooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// When `snail` last changed direction (`Timestamp::ZERO` if never).
    #[inline]
    pub fn last_turn(&self, snail: SnailId) -> Timestamp {
        self.last_turn.get(&snail).copied().unwrap_or(Timestamp::ZERO)
    }

    /// `true` once strictly more than `cooldown_ms` has passed since the last
    /// turn.
    #[inline]
    pub fn can_turn(&self, snail: SnailId, now: Timestamp, cooldown_ms: f64) -> bool {
        now.since(self.last_turn(snail)) > cooldown_ms
    }

    /// Record a direction change at `now`.
    #[inline]
    pub fn record(&mut self, snail: SnailId, now: Timestamp) {
        self.last_turn.insert(snail, now);
    }

    /// Number of snails that have turned at least once.
    pub fn len(&self) -> usize {
        self.last_turn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_turn.is_empty()
    }
}
