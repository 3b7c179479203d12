//! Integration tests for snail-sim.

use snail_core::{Direction, FrameIndex, SanctuaryConfig, SnailError, SnailId, Timestamp, Viewport};
use snail_motion::{MotionSettings, SnailState, TurnCause};
use snail_roster::SnailData;

use crate::{
    FixedRateSource, FrameObserver, FrameReport, FrameRequest, NoopObserver, ScriptedSource,
    SimBuilder, SimError, StopHandle,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> SanctuaryConfig {
    SanctuaryConfig {
        viewport: Viewport::new(1_000.0, 800.0),
        seed:     42,
        ..SanctuaryConfig::default()
    }
}

fn roster(n: u32) -> Vec<SnailData> {
    (1..=n)
        .map(|i| SnailData::new(SnailId(i), format!("snail_{i}.png"), format!("card_{i}.png")))
        .collect()
}

fn snail(id: u32, x: f64, lane_y: f64, direction: Direction) -> SnailState {
    SnailState::new(SnailId(id), x, lane_y, 0.2, 0.0, direction)
}

/// Frames at a steady 60 Hz starting at `start_ms`.
fn clock(start_ms: f64, frames: u64) -> FixedRateSource {
    FixedRateSource::new(Timestamp(start_ms), 60.0).with_limit(frames)
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<FrameIndex>,
    reports:   Vec<FrameReport>,
    snapshots: Vec<(FrameIndex, usize)>,
    run_ends:  Vec<FrameIndex>,
}

impl FrameObserver for Recorder {
    fn on_frame_start(&mut self, frame: FrameIndex, _at: Timestamp) {
        self.starts.push(frame);
    }
    fn on_frame_end(&mut self, report: &FrameReport) {
        self.reports.push(report.clone());
    }
    fn on_snapshot(
        &mut self,
        frame:  FrameIndex,
        _at:    Timestamp,
        snails: &[SnailState],
        _paused: Option<SnailId>,
    ) {
        self.snapshots.push((frame, snails.len()));
    }
    fn on_run_end(&mut self, frames: FrameIndex) {
        self.run_ends.push(frames);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_reference_sanctuary_by_default() {
        let sim = SimBuilder::new(SanctuaryConfig::default(), MotionSettings::default())
            .build()
            .unwrap();
        assert_eq!(sim.snails().len(), 31);
        assert_eq!(sim.roster.len(), 31);
        assert_eq!(sim.frame(), FrameIndex::ZERO);
        assert!(sim.pending().is_none());
    }

    #[test]
    fn same_seed_same_field() {
        let a = SimBuilder::new(test_config(), MotionSettings::default()).roster(roster(8)).build().unwrap();
        let b = SimBuilder::new(test_config(), MotionSettings::default()).roster(roster(8)).build().unwrap();
        assert_eq!(a.snails(), b.snails());
    }

    #[test]
    fn field_count_mismatch_errors() {
        let result = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(3))
            .snails(vec![snail(1, 0.0, 300.0, Direction::Left)])
            .build();
        assert!(matches!(result, Err(SimError::CountMismatch { expected: 3, got: 1, .. })));
    }

    #[test]
    fn snail_without_roster_entry_errors() {
        let result = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(2))
            .snails(vec![snail(1, 0.0, 300.0, Direction::Left), snail(9, 0.0, 300.0, Direction::Left)])
            .build();
        assert!(matches!(result, Err(SimError::NotInRoster(SnailId(9)))));
    }

    #[test]
    fn duplicate_field_snail_errors() {
        let result = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(2))
            .snails(vec![snail(1, 0.0, 300.0, Direction::Left), snail(1, 50.0, 300.0, Direction::Left)])
            .build();
        assert!(matches!(result, Err(SimError::DuplicateSnail(SnailId(1)))));
    }

    #[test]
    fn duplicate_or_empty_roster_errors() {
        let mut dup = roster(2);
        dup.push(SnailData::new(SnailId(2), "x.png", "y.png"));
        let result = SimBuilder::new(test_config(), MotionSettings::default()).roster(dup).build();
        assert!(matches!(result, Err(SimError::Roster(_))));

        let result = SimBuilder::new(test_config(), MotionSettings::default()).roster(vec![]).build();
        assert!(matches!(result, Err(SimError::Roster(_))));
    }

    #[test]
    fn invalid_config_errors() {
        let config = SanctuaryConfig { lane_count: 0, ..test_config() };
        let result = SimBuilder::new(config, MotionSettings::default()).build();
        assert!(matches!(result, Err(SimError::Core(_))));

        let settings = MotionSettings { turn_cooldown_ms: -1.0, ..MotionSettings::default() };
        assert!(SimBuilder::new(test_config(), settings).build().is_err());
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame_loop {
    use super::*;

    fn small_sim() -> crate::Sim {
        SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(4))
            .build()
            .unwrap()
    }

    #[test]
    fn frame_before_start_is_rejected() {
        let mut sim = small_sim();
        let result = sim.on_frame(Timestamp(0.0), &mut NoopObserver);
        assert!(matches!(result, Err(SimError::NotScheduled)));
        assert_eq!(sim.frame(), FrameIndex::ZERO);
    }

    #[test]
    fn each_frame_requests_the_next() {
        let mut sim = small_sim();
        assert_eq!(sim.start().unwrap(), FrameRequest(0));
        // Starting twice keeps the same request.
        assert_eq!(sim.start().unwrap(), FrameRequest(0));

        sim.on_frame(Timestamp(16.0), &mut NoopObserver).unwrap();
        assert_eq!(sim.pending(), Some(FrameRequest(1)));
        sim.on_frame(Timestamp(32.0), &mut NoopObserver).unwrap();
        assert_eq!(sim.pending(), Some(FrameRequest(2)));
        assert_eq!(sim.frame(), FrameIndex(2));
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let mut sim = small_sim();
        sim.start().unwrap();
        sim.stop();
        assert!(sim.pending().is_none());
        assert!(sim.is_torn_down());

        let before = sim.snails().to_vec();
        assert!(matches!(sim.on_frame(Timestamp(16.0), &mut NoopObserver), Err(SimError::TornDown)));
        assert!(matches!(sim.start(), Err(SimError::TornDown)));
        assert!(matches!(
            sim.run(&mut clock(0.0, 10), &mut NoopObserver),
            Err(SimError::TornDown)
        ));
        assert_eq!(sim.snails(), before.as_slice());

        // Idempotent.
        sim.stop();
        assert!(sim.is_torn_down());
    }

    #[test]
    fn run_drains_source_and_reports_once() {
        let mut sim = small_sim();
        let mut rec = Recorder::default();
        let frames = sim.run(&mut clock(0.0, 5), &mut rec).unwrap();

        assert_eq!(frames, FrameIndex(5));
        assert_eq!(rec.starts.len(), 5);
        assert_eq!(rec.reports.len(), 5);
        assert_eq!(rec.reports[4].frame, FrameIndex(4));
        assert_eq!(rec.run_ends, vec![FrameIndex(5)]);
        // Loop is still alive with a frame pending.
        assert!(sim.pending().is_some());
    }

    #[test]
    fn run_frames_stops_at_n_without_run_end() {
        let mut sim = small_sim();
        let mut rec = Recorder::default();
        let mut source = clock(0.0, 100);
        assert_eq!(sim.run_frames(7, &mut source, &mut rec).unwrap(), 7);
        assert_eq!(sim.run_frames(3, &mut source, &mut rec).unwrap(), 3);
        assert_eq!(sim.frame(), FrameIndex(10));
        assert!(rec.run_ends.is_empty());

        // Short source.
        let mut short = clock(1_000.0, 2);
        assert_eq!(sim.run_frames(5, &mut short, &mut rec).unwrap(), 2);
    }

    #[test]
    fn snapshot_interval_respected() {
        let config = SanctuaryConfig { snapshot_interval_frames: 2, ..test_config() };
        let mut sim = SimBuilder::new(config, MotionSettings::default())
            .roster(roster(4))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut clock(0.0, 5), &mut rec).unwrap();
        assert_eq!(
            rec.snapshots,
            vec![(FrameIndex(0), 4), (FrameIndex(2), 4), (FrameIndex(4), 4)]
        );
    }

    #[test]
    fn zero_snapshot_interval_disables_snapshots() {
        let config = SanctuaryConfig { snapshot_interval_frames: 0, ..test_config() };
        let mut sim = SimBuilder::new(config, MotionSettings::default())
            .roster(roster(2))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut clock(0.0, 3), &mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
        assert_eq!(rec.reports.len(), 3);
    }

    struct StopAfter {
        frames: u64,
        handle: StopHandle,
    }

    impl FrameObserver for StopAfter {
        fn on_frame_end(&mut self, report: &FrameReport) {
            if report.frame.0 + 1 >= self.frames {
                self.handle.stop();
            }
        }
    }

    #[test]
    fn stop_handle_tears_down_running_loop() {
        let mut sim = small_sim();
        let mut obs = StopAfter { frames: 3, handle: sim.stop_handle() };
        // Unlimited source: only the stop handle ends this run.
        let mut source = FixedRateSource::new(Timestamp::ZERO, 60.0);
        let frames = sim.run(&mut source, &mut obs).unwrap();
        assert_eq!(frames, FrameIndex(3));
        assert!(sim.is_torn_down());
        assert!(sim.pending().is_none());
    }

    #[test]
    fn scripted_source_timestamps_reach_reports() {
        let mut sim = small_sim();
        let mut rec = Recorder::default();
        let mut source: ScriptedSource =
            [10.0, 25.0, 1_000.0].into_iter().map(Timestamp).collect();
        sim.run(&mut source, &mut rec).unwrap();
        let ats: Vec<f64> = rec.reports.iter().map(|r| r.at.as_millis()).collect();
        assert_eq!(ats, vec![10.0, 25.0, 1_000.0]);
        assert_eq!(source.remaining(), 0);
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection_tests {
    use super::*;
    use crate::Selection;

    #[test]
    fn selection_replaces_and_clears() {
        let mut sel = Selection::new();
        assert_eq!(sel.select(SnailId(3)), None);
        assert_eq!(sel.select(SnailId(3)), None);
        assert_eq!(sel.select(SnailId(5)), Some(SnailId(3)));
        assert!(sel.is_paused(SnailId(5)));
        assert!(!sel.is_paused(SnailId(3)));
        assert_eq!(sel.clear(), Some(SnailId(5)));
        assert_eq!(sel.paused(), None);

        sel.set(Some(SnailId(8)));
        assert!(sel.is_paused(SnailId(8)));
        sel.set(None);
        assert_eq!(sel.paused(), None);
    }

    #[test]
    fn gateway_writes_reach_the_next_frame() {
        let mut sim = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(2))
            .build()
            .unwrap();
        sim.selection_mut().set(Some(SnailId(2)));
        let report = {
            sim.start().unwrap();
            sim.on_frame(Timestamp(20_000.0), &mut NoopObserver).unwrap()
        };
        assert_eq!(report.paused, Some(SnailId(2)));
    }

    #[test]
    fn select_unknown_snail_errors() {
        let mut sim = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(3))
            .build()
            .unwrap();
        assert!(matches!(
            sim.select(SnailId(99)),
            Err(SimError::Core(SnailError::UnknownSnail(SnailId(99))))
        ));
        assert_eq!(sim.selection().paused(), None);
    }

    #[test]
    fn snapshot_marks_only_the_paused_snail() {
        let mut sim = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(3))
            .build()
            .unwrap();
        sim.select(SnailId(2)).unwrap();
        let snap = sim.snapshot();
        assert_eq!(snap.len(), 3);
        for s in &snap {
            assert_eq!(s.is_paused, s.id == SnailId(2));
        }
        assert_eq!(sim.resume(), Some(SnailId(2)));
        assert!(sim.snapshot().iter().all(|s| !s.is_paused));
    }

    #[test]
    fn paused_id_reaches_frame_report() {
        let mut sim = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(3))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.select(SnailId(1)).unwrap();
        sim.run_frames(2, &mut clock(0.0, 2), &mut rec).unwrap();
        sim.resume();
        sim.run_frames(1, &mut clock(100.0, 1), &mut rec).unwrap();
        let paused: Vec<_> = rec.reports.iter().map(|r| r.paused).collect();
        assert_eq!(paused, vec![Some(SnailId(1)), Some(SnailId(1)), None]);
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn far_right_snail_turns_back_after_cooldown() {
        let width = test_config().viewport.width;
        let t0 = Timestamp(5_000.0);
        let mut sim = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(1))
            .snails(vec![snail(1, width + 250.0, 400.0, Direction::Right)])
            .build()
            .unwrap();
        sim.motion.cooldowns.record(SnailId(1), t0);

        let at = t0 + 11_000.0;
        let mut source: ScriptedSource = std::iter::once(at).collect();
        let mut rec = Recorder::default();
        sim.run(&mut source, &mut rec).unwrap();

        let s = sim.snail(SnailId(1)).unwrap();
        assert_eq!(s.direction, Direction::Left);
        assert_eq!(sim.motion.cooldowns.last_turn(SnailId(1)), at);
        assert_eq!(rec.reports[0].turns.len(), 1);
        assert_eq!(rec.reports[0].turns[0].cause, TurnCause::RightEdge);
        // The move uses the heading from before the turn.
        assert!(s.position.x > width + 250.0);
    }

    #[test]
    fn far_right_snail_waits_out_cooldown() {
        let width = test_config().viewport.width;
        let t0 = Timestamp(5_000.0);
        let mut sim = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(1))
            .snails(vec![snail(1, width + 250.0, 400.0, Direction::Right)])
            .build()
            .unwrap();
        sim.motion.cooldowns.record(SnailId(1), t0);

        let mut source: ScriptedSource = std::iter::once(t0 + 9_000.0).collect();
        sim.run(&mut source, &mut NoopObserver).unwrap();
        assert_eq!(sim.snail(SnailId(1)).unwrap().direction, Direction::Right);
        assert_eq!(sim.motion.cooldowns.last_turn(SnailId(1)), t0);
    }

    #[test]
    fn paused_snail_is_frozen_for_a_hundred_frames() {
        let mut sim = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(2))
            .snails(vec![
                snail(1, 500.0, 300.0, Direction::Right),
                // Same lane, closing in from the right: must not disturb snail 1.
                snail(2, 560.0, 300.0, Direction::Left),
            ])
            .build()
            .unwrap();
        sim.select(SnailId(1)).unwrap();
        let before = sim.snail(SnailId(1)).unwrap().clone();

        let stepped = sim
            .run_frames(100, &mut clock(20_000.0, 100), &mut NoopObserver)
            .unwrap();
        assert_eq!(stepped, 100);

        let after = sim.snail(SnailId(1)).unwrap();
        assert_eq!(after.position, before.position);
        assert_eq!(after.position, snail_core::Vec2::new(500.0, 300.0));
        assert_eq!(after.direction, Direction::Right);
        assert_eq!(after.speed.to_bits(), before.speed.to_bits());

        // The neighbour yielded to the paused snail.
        assert_eq!(sim.snail(SnailId(2)).unwrap().direction, Direction::Right);
    }

    #[test]
    fn resumed_snail_moves_again() {
        let mut sim = SimBuilder::new(test_config(), MotionSettings::default())
            .roster(roster(1))
            .snails(vec![snail(1, 500.0, 300.0, Direction::Right)])
            .build()
            .unwrap();
        sim.select(SnailId(1)).unwrap();
        let mut source = clock(20_000.0, 20);
        sim.run_frames(10, &mut source, &mut NoopObserver).unwrap();
        assert_eq!(sim.snail(SnailId(1)).unwrap().position.x, 500.0);

        sim.resume();
        sim.run_frames(10, &mut source, &mut NoopObserver).unwrap();
        assert!(sim.snail(SnailId(1)).unwrap().position.x > 500.0);
    }

    #[test]
    fn lanes_never_move_over_a_long_run() {
        let mut sim = SimBuilder::new(SanctuaryConfig::default(), MotionSettings::default())
            .build()
            .unwrap();
        let lanes: Vec<f64> = sim.snails().iter().map(|s| s.lane_y).collect();
        sim.run(&mut clock(0.0, 3_000), &mut NoopObserver).unwrap();
        for (s, lane) in sim.snails().iter().zip(&lanes) {
            assert_eq!(s.lane_y, *lane);
            assert_eq!(s.position.y, *lane);
        }
    }
}

// ── Frame sources ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sources {
    use super::*;
    use crate::FrameSource;

    #[test]
    fn fixed_rate_spacing_and_limit() {
        let mut source = FixedRateSource::new(Timestamp(100.0), 50.0).with_limit(3);
        assert_eq!(source.interval_ms(), 20.0);
        let ts: Vec<f64> = std::iter::from_fn(|| source.next_frame()).map(|t| t.as_millis()).collect();
        assert_eq!(ts, vec![100.0, 120.0, 140.0]);
        assert!(source.next_frame().is_none());
    }

    #[test]
    fn bad_rate_falls_back_to_sixty_hz() {
        let source = FixedRateSource::new(Timestamp::ZERO, 0.0);
        assert!((source.interval_ms() - 1_000.0 / 60.0).abs() < 1e-12);
        let source = FixedRateSource::new(Timestamp::ZERO, f64::NAN);
        assert!((source.interval_ms() - 1_000.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn scripted_source_accepts_pushes() {
        let mut source = ScriptedSource::default();
        source.push(Timestamp(5.0));
        source.push(Timestamp(7.5));
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_frame(), Some(Timestamp(5.0)));
        assert_eq!(source.next_frame(), Some(Timestamp(7.5)));
        assert_eq!(source.next_frame(), None);
    }
}
