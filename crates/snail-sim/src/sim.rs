//! The `Sim` struct and its frame loop.

use std::cell::Cell;
use std::rc::Rc;

use snail_core::{FrameIndex, SanctuaryConfig, SnailError, SnailId, Timestamp};
use snail_motion::{MotionEngine, SnailState};
use snail_roster::SnailData;
use tracing::{debug, trace};

use crate::{FrameObserver, FrameReport, FrameSource, Selection, SimError, SimResult, SnailSnapshot};

// ── Frame requests ────────────────────────────────────────────────────────────

/// Handle of a requested, not yet delivered, display-refresh frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest(pub u64);

/// Shared flag that asks a running loop to tear down before its next frame.
///
/// Clone it into an observer or an outer event handler; `Sim::run` checks it
/// before pulling each frame from the source.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Idle,
    Pending(FrameRequest),
    TornDown,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The sanctuary simulator.
///
/// Owns the field of snails and steps it once per delivered display frame:
///
/// 1. **Consume** the pending frame request.
/// 2. **Step** every snail except the paused one through [`MotionEngine`],
///    reading peers from the previous frame only.
/// 3. **Publish** the new field: observer hooks, snapshot at the configured
///    interval.
/// 4. **Request** the next frame.
///
/// [`stop`][Sim::stop] cancels the outstanding request; a torn-down simulator
/// never steps again.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SanctuaryConfig,

    /// Roster entries, in field order.
    pub roster: Vec<SnailData>,

    /// Per-frame motion step and the cooldown table it carries.
    pub motion: MotionEngine,

    snails:       Vec<SnailState>,
    selection:    Selection,
    frame:        FrameIndex,
    state:        LoopState,
    next_request: u64,
    stop:         StopHandle,
}

impl Sim {
    pub(crate) fn new(
        config: SanctuaryConfig,
        roster: Vec<SnailData>,
        snails: Vec<SnailState>,
        motion: MotionEngine,
    ) -> Self {
        Self {
            config,
            roster,
            motion,
            snails,
            selection:    Selection::new(),
            frame:        FrameIndex::ZERO,
            state:        LoopState::Idle,
            next_request: 0,
            stop:         StopHandle::default(),
        }
    }

    // ── Loop control ──────────────────────────────────────────────────────

    /// Request the first frame.  A no-op if a frame is already pending.
    pub fn start(&mut self) -> SimResult<FrameRequest> {
        match self.state {
            LoopState::TornDown   => Err(SimError::TornDown),
            LoopState::Pending(r) => Ok(r),
            LoopState::Idle       => {
                debug!(snails = self.snails.len(), "frame loop started");
                Ok(self.request_frame())
            }
        }
    }

    /// The outstanding frame request, if any.
    pub fn pending(&self) -> Option<FrameRequest> {
        match self.state {
            LoopState::Pending(r) => Some(r),
            _ => None,
        }
    }

    /// Cancel the pending frame and tear the loop down.  Idempotent.
    pub fn stop(&mut self) {
        if let LoopState::Pending(r) = self.state {
            trace!(request = r.0, "cancelled pending frame");
        }
        if self.state != LoopState::TornDown {
            debug!(frames = self.frame.0, "frame loop torn down");
        }
        self.state = LoopState::TornDown;
        self.stop.stop();
    }

    pub fn is_torn_down(&self) -> bool {
        self.state == LoopState::TornDown
    }

    /// A handle that makes a running [`run`][Sim::run] tear down before the
    /// next frame.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Deliver one display-refresh frame at timestamp `at`.
    ///
    /// Fails with [`SimError::NotScheduled`] if no frame was requested and
    /// with [`SimError::TornDown`] after [`stop`][Sim::stop].
    pub fn on_frame<O: FrameObserver>(
        &mut self,
        at:       Timestamp,
        observer: &mut O,
    ) -> SimResult<FrameReport> {
        match self.state {
            LoopState::TornDown   => return Err(SimError::TornDown),
            LoopState::Idle       => return Err(SimError::NotScheduled),
            LoopState::Pending(_) => self.state = LoopState::Idle,
        }

        let frame = self.frame;
        observer.on_frame_start(frame, at);
        let report = self.advance(at);
        observer.on_frame_end(&report);

        let interval = self.config.snapshot_interval_frames;
        if interval > 0 && frame.0.is_multiple_of(interval) {
            observer.on_snapshot(frame, at, &self.snails, report.paused);
        }

        self.request_frame();
        Ok(report)
    }

    /// Pull frames from `source` until it is exhausted or the loop is
    /// stopped.  Returns the number of frames stepped so far.
    pub fn run<S: FrameSource, O: FrameObserver>(
        &mut self,
        source:   &mut S,
        observer: &mut O,
    ) -> SimResult<FrameIndex> {
        self.start()?;
        while let Some(at) = self.next_frame(source) {
            self.on_frame(at, observer)?;
        }
        observer.on_run_end(self.frame);
        Ok(self.frame)
    }

    /// Step at most `n` frames from `source`.
    ///
    /// Does not call `on_run_end`; useful for tests and for interleaving
    /// user input between segments of a run.
    pub fn run_frames<S: FrameSource, O: FrameObserver>(
        &mut self,
        n:        u64,
        source:   &mut S,
        observer: &mut O,
    ) -> SimResult<u64> {
        self.start()?;
        let mut stepped = 0;
        while stepped < n {
            let Some(at) = self.next_frame(source) else { break };
            self.on_frame(at, observer)?;
            stepped += 1;
        }
        Ok(stepped)
    }

    // ── Selection gateway ─────────────────────────────────────────────────

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Pause `snail` from the next frame on.
    pub fn select(&mut self, snail: SnailId) -> SimResult<Option<SnailId>> {
        if self.snail(snail).is_none() {
            return Err(SnailError::UnknownSnail(snail).into());
        }
        debug!(%snail, "snail paused");
        Ok(self.selection.select(snail))
    }

    /// Resume the paused snail, if any.
    pub fn resume(&mut self) -> Option<SnailId> {
        let resumed = self.selection.clear();
        if let Some(snail) = resumed {
            debug!(%snail, "snail resumed");
        }
        resumed
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Frames stepped so far; also the index the next frame will carry.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    pub fn snails(&self) -> &[SnailState] {
        &self.snails
    }

    pub fn snail(&self, id: SnailId) -> Option<&SnailState> {
        self.snails.iter().find(|s| s.id == id)
    }

    pub fn roster_entry(&self, id: SnailId) -> Option<&SnailData> {
        self.roster.iter().find(|d| d.id == id)
    }

    /// The current field as render snapshots.
    pub fn snapshot(&self) -> Vec<SnailSnapshot> {
        self.snails
            .iter()
            .map(|s| SnailSnapshot {
                id:        s.id,
                position:  s.position,
                direction: s.direction,
                is_paused: self.selection.is_paused(s.id),
            })
            .collect()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_request);
        self.next_request += 1;
        self.state = LoopState::Pending(request);
        request
    }

    fn next_frame<S: FrameSource>(&mut self, source: &mut S) -> Option<Timestamp> {
        if self.stop.is_stopped() {
            self.stop();
            return None;
        }
        source.next_frame()
    }

    fn advance(&mut self, at: Timestamp) -> FrameReport {
        let paused = self.selection.paused();
        let outcome = self.motion.step(&self.snails, paused, at);
        self.snails = outcome.snails;

        let frame = self.frame;
        self.frame = frame.next();
        trace!(%frame, %at, turns = outcome.turns.len(), "frame stepped");

        FrameReport {
            frame,
            at,
            paused,
            turns: outcome.turns,
        }
    }
}
