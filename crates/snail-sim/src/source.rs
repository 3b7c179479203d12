//! Frame sources: where display-refresh timestamps come from.
//!
//! In a browser the source is `requestAnimationFrame`; in a native window it
//! is the vsync callback.  Headless runs and tests use [`FixedRateSource`] or
//! [`ScriptedSource`].

use std::collections::VecDeque;

use snail_core::Timestamp;

/// Delivers one timestamp per display refresh.
pub trait FrameSource {
    /// Timestamp of the next refresh, or `None` once the source is exhausted
    /// (window closed, scripted frames used up).
    fn next_frame(&mut self) -> Option<Timestamp>;
}

/// A steady refresh rate, optionally limited to a number of frames.
#[derive(Debug, Clone)]
pub struct FixedRateSource {
    next:        Timestamp,
    interval_ms: f64,
    remaining:   Option<u64>,
}

impl FixedRateSource {
    /// Refresh at `hz` frames per second starting at `start`.
    ///
    /// A non-positive or non-finite rate falls back to 60 Hz.
    pub fn new(start: Timestamp, hz: f64) -> Self {
        let hz = if hz.is_finite() && hz > 0.0 { hz } else { 60.0 };
        Self {
            next:        start,
            interval_ms: 1_000.0 / hz,
            remaining:   None,
        }
    }

    /// Stop after `frames` more frames.
    pub fn with_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

impl FrameSource for FixedRateSource {
    fn next_frame(&mut self) -> Option<Timestamp> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        let t = self.next;
        self.next = self.next + self.interval_ms;
        Some(t)
    }
}

/// Replays an explicit list of timestamps.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Timestamp>,
}

impl ScriptedSource {
    pub fn push(&mut self, t: Timestamp) {
        self.frames.push_back(t);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FromIterator<Timestamp> for ScriptedSource {
    fn from_iter<I: IntoIterator<Item = Timestamp>>(iter: I) -> Self {
        Self { frames: iter.into_iter().collect() }
    }
}

impl FrameSource for ScriptedSource {
    fn next_frame(&mut self) -> Option<Timestamp> {
        self.frames.pop_front()
    }
}
