//! Per-snail draw parameters.

use snail_core::{Direction, SnailId, Vec2};
use snail_roster::{SnailData, FALLBACK_SPRITE};
use snail_sim::SnailSnapshot;

/// Everything a renderer needs to draw one snail for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SnailView {
    pub id:       SnailId,
    /// Sprite centre.
    pub position: Vec2,
    /// Sprite URL, or the fallback icon once the sprite failed to load.
    pub image:    String,
    /// Sprites face left; mirror them while moving right.
    pub flip_x:   bool,
    /// Later ids draw on top.
    pub z_index:  i64,
    /// Idle bob cycle in seconds; `None` while paused.
    pub bob_period_secs: Option<f64>,
    pub shadow_opacity:  f32,
    pub shadow_scale:    f32,
}

impl SnailView {
    /// Build the view for `snapshot` using its roster entry `data`.
    pub fn new(snapshot: &SnailSnapshot, data: &SnailData, sprite_failed: bool) -> Self {
        let id = i64::from(snapshot.id.0);
        let (shadow_opacity, shadow_scale) = if snapshot.is_paused { (0.3, 0.9) } else { (1.0, 1.0) };
        Self {
            id:       snapshot.id,
            position: snapshot.position,
            image:    if sprite_failed { FALLBACK_SPRITE.to_owned() } else { data.image.clone() },
            flip_x:   snapshot.direction == Direction::Right,
            z_index:  10 + id,
            bob_period_secs: (!snapshot.is_paused).then(|| (4 + id % 4) as f64),
            shadow_opacity,
            shadow_scale,
        }
    }
}
