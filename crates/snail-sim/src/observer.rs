//! Frame observer trait for render hand-off and data collection.

use snail_core::{FrameIndex, SnailId, Timestamp};
use snail_motion::{SnailState, TurnEvent};

/// Summary of one stepped frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame:  FrameIndex,
    pub at:     Timestamp,
    /// The snail excluded from this step, if any.
    pub paused: Option<SnailId>,
    /// Direction changes made this frame, in field order.
    pub turns:  Vec<TurnEvent>,
}

/// Callbacks invoked by [`Sim`][crate::Sim] around every frame.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: turn logger
///
/// ```rust,ignore
/// struct TurnLogger;
///
/// impl FrameObserver for TurnLogger {
///     fn on_frame_end(&mut self, report: &FrameReport) {
///         for turn in &report.turns {
///             println!("{}: snail {} now heading {}", report.frame, turn.snail, turn.to);
///         }
///     }
/// }
/// ```
pub trait FrameObserver {
    /// Called when a frame is delivered, before the step.
    fn on_frame_start(&mut self, _frame: FrameIndex, _at: Timestamp) {}

    /// Called after the step, once the new field is in place.
    fn on_frame_end(&mut self, _report: &FrameReport) {}

    /// Called every `snapshot_interval_frames` frames with the full field.
    fn on_snapshot(
        &mut self,
        _frame:  FrameIndex,
        _at:     Timestamp,
        _snails: &[SnailState],
        _paused: Option<SnailId>,
    ) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns.
    fn on_run_end(&mut self, _frames: FrameIndex) {}
}

/// A [`FrameObserver`] that does nothing.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}
