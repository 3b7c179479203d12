//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use snail_core::{SanctuaryConfig, SimRng};
use snail_motion::{MotionEngine, MotionSettings, SnailState};
use snail_roster::{reference_roster, RosterError, SnailData, SnailInitializer};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SanctuaryConfig`]: viewport, lanes, seed, snapshot interval
/// - [`MotionSettings`]: speed band, cooldown, avoidance tuning
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                             |
/// |----------------|-----------------------------------------------------|
/// | `.roster(v)`   | [`reference_roster`], the 31 sanctuary snails       |
/// | `.snails(v)`   | Lane layout from the roster, seeded by `config.seed` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, MotionSettings::default())
///     .roster(load_roster_csv(path)?)
///     .build()?;
/// sim.run(&mut clock, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SanctuaryConfig,
    settings: MotionSettings,
    roster:   Option<Vec<SnailData>>,
    snails:   Option<Vec<SnailState>>,
}

impl SimBuilder {
    pub fn new(config: SanctuaryConfig, settings: MotionSettings) -> Self {
        Self {
            config,
            settings,
            roster: None,
            snails: None,
        }
    }

    /// Supply the roster.  Order decides lane assignment.
    pub fn roster(mut self, roster: Vec<SnailData>) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Supply an explicit starting field instead of the seeded layout.
    ///
    /// Must be the same length as the roster, and every snail must have a
    /// roster entry.
    pub fn snails(mut self, snails: Vec<SnailState>) -> Self {
        self.snails = Some(snails);
        self
    }

    /// Validate inputs, lay out the field if needed, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        self.settings.validate()?;

        let roster = self.roster.unwrap_or_else(reference_roster);
        if roster.is_empty() {
            return Err(RosterError::Empty.into());
        }
        let mut ids = HashSet::with_capacity(roster.len());
        if let Some(dup) = roster.iter().find(|d| !ids.insert(d.id)) {
            return Err(RosterError::DuplicateId(dup.id).into());
        }

        let snails = match self.snails {
            Some(snails) => {
                if snails.len() != roster.len() {
                    return Err(SimError::CountMismatch {
                        expected: roster.len(),
                        got:      snails.len(),
                        what:     "starting field",
                    });
                }
                let mut seen = HashSet::with_capacity(snails.len());
                for snail in &snails {
                    if !seen.insert(snail.id) {
                        return Err(SimError::DuplicateSnail(snail.id));
                    }
                    if !ids.contains(&snail.id) {
                        return Err(SimError::NotInRoster(snail.id));
                    }
                }
                snails
            }
            None => {
                let mut rng = SimRng::new(self.config.seed);
                SnailInitializer::new(&self.config, &self.settings).initialize(&roster, &mut rng)
            }
        };

        let motion = MotionEngine::new(self.settings, self.config.viewport.width);
        Ok(Sim::new(self.config, roster, snails, motion))
    }
}
