//! Tunable constants of the movement model.

use snail_core::{SnailError, SnailResult};

/// Movement constants shared by the initializer and the motion engine.
///
/// The defaults reproduce the reference sanctuary: lazy snails that crawl a
/// fraction of a pixel per frame and hold a heading for at least ten seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionSettings {
    /// Lower bound of the per-snail base speed (px per frame).  Default: 0.1.
    pub min_speed: f64,

    /// Upper bound of the per-snail base speed (px per frame).  Default: 0.35.
    pub max_speed: f64,

    /// Carried for configuration compatibility.  Nothing reads it; the
    /// wraparound boundary is `wrap_margin`.  Default: -150.
    pub boundary_padding: f64,

    /// Nominal sprite radius.  The avoidance threshold is
    /// `snail_radius * avoidance_factor`.  Default: 30.
    pub snail_radius: f64,

    /// How far past either screen edge a snail may wander before it turns
    /// back.  Default: 200.
    pub wrap_margin: f64,

    /// Minimum time between two direction changes of one snail.
    /// Default: 10 000 ms.
    pub turn_cooldown_ms: f64,

    /// Two snails whose `lane_y` differ by less than this share a lane.
    /// Default: 20.
    pub lane_tolerance: f64,

    /// Multiplier on `snail_radius` giving the avoidance distance.
    /// Default: 3.5.
    pub avoidance_factor: f64,

    /// Angular rate of the speed oscillation, per millisecond.  Default: 5e-4.
    pub oscillation_rate: f64,

    /// Mean speed multiplier of the oscillation.  Default: 0.8.
    pub oscillation_center: f64,

    /// Amplitude of the speed multiplier.  Default: 0.4.
    pub oscillation_amplitude: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            min_speed:             0.1,
            max_speed:             0.35,
            boundary_padding:      -150.0,
            snail_radius:          30.0,
            wrap_margin:           200.0,
            turn_cooldown_ms:      10_000.0,
            lane_tolerance:        20.0,
            avoidance_factor:      3.5,
            oscillation_rate:      0.0005,
            oscillation_center:    0.8,
            oscillation_amplitude: 0.4,
        }
    }
}

impl MotionSettings {
    /// Distance below which a same-lane neighbour triggers a turn.
    #[inline]
    pub fn avoidance_distance(&self) -> f64 {
        self.snail_radius * self.avoidance_factor
    }

    /// Instantaneous speed at `t_ms` for a snail with the given pace and phase.
    ///
    /// Lies in `[(c - a) * base, (c + a) * base]`, i.e. `[0.4, 1.2] * base`
    /// with the defaults.
    #[inline]
    pub fn breathing_speed(&self, base_speed: f64, speed_offset: f64, t_ms: f64) -> f64 {
        let oscillation = ((t_ms + speed_offset) * self.oscillation_rate).sin();
        base_speed * (self.oscillation_center + oscillation * self.oscillation_amplitude)
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> SnailResult<()> {
        if !(self.min_speed.is_finite() && self.max_speed.is_finite()) {
            return Err(SnailError::Config("speed bounds must be finite".into()));
        }
        if self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(SnailError::Config(format!(
                "speed range [{}, {}] must be non-negative and ordered",
                self.min_speed, self.max_speed
            )));
        }
        if self.turn_cooldown_ms < 0.0 || self.lane_tolerance < 0.0 || self.wrap_margin < 0.0 {
            return Err(SnailError::Config(
                "cooldown, lane tolerance, and wrap margin must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
