//! The scene state machine.

use std::collections::HashSet;

use snail_core::{SnailError, SnailId};
use snail_roster::{AssetTable, SoundAsset};
use snail_sim::{Sim, SimError};
use tracing::debug;

use crate::overlay::FAILED_CARD_OPACITY;
use crate::{
    Backdrop, DetailOverlay, DismissReason, Key, OverlayTarget, SceneCommand, SceneError,
    SceneResult, SnailView, SoundCue,
};

/// App-level state around the simulator: the detail overlay, audio, and
/// per-snail render fallbacks.
///
/// ```text
///            select(id)                       close / Esc / backdrop
///  Browsing ───────────► Detail(id, paused) ──────────────────────► Browsing
///      ▲                        │ card click: ignored                 (resumed)
///      └── toggle_mute: ambient on/off in either state
/// ```
///
/// Starts muted with no overlay open.
#[derive(Debug, Clone)]
pub struct Scene {
    assets:         AssetTable,
    overlay:        Option<DetailOverlay>,
    muted:          bool,
    failed_sprites: HashSet<SnailId>,
    torn_down:      bool,
}

impl Scene {
    pub fn new(assets: AssetTable) -> Self {
        Self {
            assets,
            overlay:        None,
            muted:          true,
            failed_sprites: HashSet::new(),
            torn_down:      false,
        }
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// A snail sprite was clicked.
    ///
    /// Pauses the snail, opens its card, and dims the backdrop.  Clicks that
    /// arrive while a card is already open are ignored: the overlay covers the
    /// sprites.
    pub fn select(&mut self, sim: &mut Sim, snail: SnailId) -> SceneResult<Vec<SceneCommand>> {
        self.ensure_live()?;
        if self.overlay.is_some() {
            return Ok(Vec::new());
        }

        let card_image = sim
            .roster_entry(snail)
            .map(|d| d.card_image.clone())
            .ok_or(SimError::Core(SnailError::UnknownSnail(snail)))?;
        sim.select(snail)?;

        let mut commands = Vec::with_capacity(3);
        if !self.muted {
            commands.push(play(SoundCue::Click, &self.assets.click, true));
        }
        commands.push(SceneCommand::OpenDetail { snail, card_image: card_image.clone() });
        commands.push(SceneCommand::SetBackdrop(Backdrop::DIMMED));

        debug!(%snail, muted = self.muted, "detail opened");
        self.overlay = Some(DetailOverlay::new(snail, card_image));
        Ok(commands)
    }

    /// Close the detail overlay and resume its snail.  A no-op when nothing
    /// is open.
    pub fn dismiss(&mut self, sim: &mut Sim, reason: DismissReason) -> Vec<SceneCommand> {
        let Some(overlay) = self.overlay.take() else {
            return Vec::new();
        };
        sim.resume();
        debug!(snail = %overlay.snail, ?reason, "detail closed");
        vec![SceneCommand::CloseDetail, SceneCommand::SetBackdrop(Backdrop::CLEAR)]
    }

    pub fn handle_key(&mut self, sim: &mut Sim, key: Key) -> Vec<SceneCommand> {
        match key {
            Key::Escape => self.dismiss(sim, DismissReason::EscapeKey),
            Key::Other  => Vec::new(),
        }
    }

    /// A click landed inside the open overlay.
    pub fn overlay_click(&mut self, sim: &mut Sim, target: OverlayTarget) -> Vec<SceneCommand> {
        match target {
            OverlayTarget::Card        => Vec::new(),
            OverlayTarget::Backdrop    => self.dismiss(sim, DismissReason::Backdrop),
            OverlayTarget::CloseButton => self.dismiss(sim, DismissReason::CloseButton),
        }
    }

    // ── Audio ─────────────────────────────────────────────────────────────

    /// Flip the mute toggle.  Unmuting starts the ambient loop; muting stops
    /// it.  The simulator is unaffected.
    pub fn toggle_mute(&mut self) -> Vec<SceneCommand> {
        if self.torn_down {
            return Vec::new();
        }
        self.muted = !self.muted;
        debug!(muted = self.muted, "mute toggled");
        if self.muted {
            vec![SceneCommand::StopSound(SoundCue::Ambient)]
        } else {
            vec![play(SoundCue::Ambient, &self.assets.ambient, false)]
        }
    }

    /// The ambient loop refused to start, e.g. autoplay blocked.  Falls back
    /// to muted.
    pub fn ambient_failed(&mut self) -> Vec<SceneCommand> {
        if self.muted {
            return Vec::new();
        }
        debug!("ambient playback failed; muting");
        self.muted = true;
        vec![SceneCommand::StopSound(SoundCue::Ambient)]
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    // ── Asset fallbacks ───────────────────────────────────────────────────

    /// The open card's image failed to load; show it faded.
    pub fn card_load_failed(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.card_opacity = FAILED_CARD_OPACITY;
        }
    }

    /// `snail`'s sprite failed to load; draw the fallback icon from now on.
    pub fn sprite_load_failed(&mut self, snail: SnailId) {
        if self.failed_sprites.insert(snail) {
            debug!(%snail, "sprite fell back to icon");
        }
    }

    // ── Views ─────────────────────────────────────────────────────────────

    pub fn overlay(&self) -> Option<&DetailOverlay> {
        self.overlay.as_ref()
    }

    pub fn backdrop(&self) -> Backdrop {
        if self.overlay.is_some() { Backdrop::DIMMED } else { Backdrop::CLEAR }
    }

    pub fn background(&self) -> &str {
        &self.assets.background
    }

    /// Draw parameters for every snail in `sim`'s current field.
    pub fn views(&self, sim: &Sim) -> Vec<SnailView> {
        sim.snapshot()
            .iter()
            .filter_map(|snap| {
                let data = sim.roster_entry(snap.id)?;
                Some(SnailView::new(snap, data, self.failed_sprites.contains(&snap.id)))
            })
            .collect()
    }

    // ── Teardown ──────────────────────────────────────────────────────────

    /// Stop the simulator and silence the ambient loop.  Idempotent.
    pub fn teardown(&mut self, sim: &mut Sim) -> Vec<SceneCommand> {
        if self.torn_down {
            return Vec::new();
        }
        self.torn_down = true;
        sim.stop();
        let mut commands = Vec::new();
        if !self.muted {
            commands.push(SceneCommand::StopSound(SoundCue::Ambient));
        }
        commands
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn ensure_live(&self) -> SceneResult<()> {
        if self.torn_down { Err(SceneError::TornDown) } else { Ok(()) }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(AssetTable::default())
    }
}

fn play(cue: SoundCue, asset: &SoundAsset, restart: bool) -> SceneCommand {
    SceneCommand::PlaySound {
        cue,
        url:     asset.url.clone(),
        volume:  asset.volume,
        looping: asset.looping,
        restart,
    }
}
