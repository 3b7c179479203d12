//! The selection/pause gateway.

use snail_core::SnailId;

/// Which snail, if any, is currently paused by user selection.
///
/// Holds nothing but the optional id.  The simulator reads it at the start of
/// every frame and never writes it; the click handler and the overlay
/// dismissal are the only writers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    paused: Option<SnailId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause `snail`, replacing any earlier selection.  Returns the snail
    /// that was paused before, if it differs.
    pub fn select(&mut self, snail: SnailId) -> Option<SnailId> {
        self.paused.replace(snail).filter(|&prev| prev != snail)
    }

    /// Resume whichever snail was paused.
    pub fn clear(&mut self) -> Option<SnailId> {
        self.paused.take()
    }

    /// Set the paused id wholesale, e.g. mirrored from an outer UI state.
    pub fn set(&mut self, paused: Option<SnailId>) {
        self.paused = paused;
    }

    #[inline]
    pub fn paused(&self) -> Option<SnailId> {
        self.paused
    }

    #[inline]
    pub fn is_paused(&self, snail: SnailId) -> bool {
        self.paused == Some(snail)
    }
}
