//! meadow: headless run of the snail sanctuary.
//!
//! Steps the reference 31-snail field at a fixed refresh rate, optionally
//! picks one snail partway through (pausing it behind its challenge card),
//! dismisses the card again, and logs what happened along the way.
//!
//! ```text
//! RUST_LOG=info cargo run -p meadow -- --seconds 120 --select 7 --select-at 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use snail_core::{Direction, FrameIndex, SanctuaryConfig, SnailId, Timestamp, Viewport};
use snail_motion::{MotionSettings, SnailState};
use snail_roster::{load_roster_csv, reference_roster};
use snail_scene::{Key, Scene, SceneCommand};
use snail_sim::{FixedRateSource, FrameObserver, FrameReport, SimBuilder};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "meadow", about = "Headless snail sanctuary run")]
struct Args {
    /// JSON file with `sanctuary` and `motion` sections; missing keys keep
    /// their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV roster (`id,image,card_image`); defaults to the 31 reference snails.
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the viewport width in pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Override the viewport height in pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Simulated run length in seconds.
    #[arg(long, default_value_t = 120.0)]
    seconds: f64,

    /// Display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Snail to click on partway through the run.
    #[arg(long)]
    select: Option<u32>,

    /// Seconds into the run at which `--select` is clicked.
    #[arg(long, default_value_t = 30.0)]
    select_at: f64,

    /// Seconds the card stays open before Escape closes it.
    #[arg(long, default_value_t = 20.0)]
    hold: f64,

    /// Start with sound on.
    #[arg(long)]
    unmute: bool,

    /// Print the effective configuration and roster as JSON and exit.
    #[arg(long)]
    dump_config: bool,
}

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
struct MeadowConfig {
    sanctuary: SanctuaryConfig,
    motion:    MotionSettings,
}

fn load_config(path: Option<&Path>) -> Result<MeadowConfig> {
    let Some(path) = path else {
        return Ok(MeadowConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer that tallies the run ────────────────────────────────────────────

#[derive(Default)]
struct CountingObserver {
    frames:    u64,
    turns:     u64,
    snapshots: u64,
}

impl FrameObserver for CountingObserver {
    fn on_frame_end(&mut self, report: &FrameReport) {
        self.frames += 1;
        self.turns += report.turns.len() as u64;
        for turn in &report.turns {
            debug!(snail = %turn.snail, to = %turn.to, cause = ?turn.cause, at = %turn.at, "turn");
        }
    }

    fn on_snapshot(
        &mut self,
        frame:  FrameIndex,
        at:     Timestamp,
        snails: &[SnailState],
        paused: Option<SnailId>,
    ) {
        self.snapshots += 1;
        let heading_right = snails.iter().filter(|s| s.direction == Direction::Right).count();
        debug!(
            frame = %frame,
            at = %at,
            snails = snails.len(),
            heading_right,
            paused = ?paused,
            "snapshot"
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Stand-in for the UI layer: log what a browser would do.
fn apply(commands: Vec<SceneCommand>) {
    for command in commands {
        info!(?command, "scene");
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    // 1. Configuration: file, then CLI overrides.
    let MeadowConfig { mut sanctuary, motion } = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        sanctuary.seed = seed;
    }
    if args.width.is_some() || args.height.is_some() {
        sanctuary.viewport = Viewport::new(
            args.width.unwrap_or(sanctuary.viewport.width),
            args.height.unwrap_or(sanctuary.viewport.height),
        );
    }
    if !(args.seconds.is_finite() && args.seconds > 0.0) {
        bail!("--seconds must be positive, got {}", args.seconds);
    }
    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be positive, got {}", args.fps);
    }

    // 2. Roster.
    let roster = match &args.roster {
        Some(path) => load_roster_csv(path)
            .with_context(|| format!("loading roster {}", path.display()))?,
        None => reference_roster(),
    };

    if args.dump_config {
        let dump = serde_json::json!({
            "sanctuary": sanctuary,
            "motion":    motion,
            "roster":    roster,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    info!(
        snails = roster.len(),
        seed = sanctuary.seed,
        width = sanctuary.viewport.width,
        height = sanctuary.viewport.height,
        "meadow starting"
    );

    // 3. Simulator and scene.
    let mut sim = SimBuilder::new(sanctuary, motion).roster(roster).build()?;
    let mut scene = Scene::default();
    if args.unmute {
        apply(scene.toggle_mute());
    }

    let mut obs = CountingObserver::default();

    // 4. Run: browse, open a card, close it, browse to the end.
    let fps = args.fps;
    let total_frames = (args.seconds * fps).round() as u64;
    let mut clock = FixedRateSource::new(Timestamp::ZERO, fps).with_limit(total_frames);
    let started = Instant::now();

    if let Some(id) = args.select.map(SnailId) {
        let select_frame = (args.select_at * fps).round() as u64;
        let hold_frames = (args.hold * fps).round() as u64;

        sim.run_frames(select_frame, &mut clock, &mut obs)?;
        match scene.select(&mut sim, id) {
            Ok(commands) => {
                let at = sim.snail(id).map(|s| s.position);
                info!(snail = %id, frame = %sim.frame(), position = ?at, "card opened");
                apply(commands);
            }
            Err(e) => warn!(snail = %id, error = %e, "selection ignored"),
        }

        sim.run_frames(hold_frames, &mut clock, &mut obs)?;
        apply(scene.handle_key(&mut sim, Key::Escape));
    }

    let frames = sim.run(&mut clock, &mut obs)?;
    apply(scene.teardown(&mut sim));
    let elapsed = started.elapsed();

    info!(
        frames = %frames,
        turns = obs.turns,
        observed = obs.frames,
        snapshots = obs.snapshots,
        elapsed_ms = elapsed.as_millis() as u64,
        "meadow finished"
    );
    Ok(())
}
