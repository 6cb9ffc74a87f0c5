//! Collision detection against the deforming curve
//!
//! Both the player box and every obstacle box are anchored bottom-center
//! to [`WaveEngine::height_at`], so a hit can only depend on the same
//! curve the renderer draws. Sprites whose dimensions are not known yet
//! take part in nothing here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use super::wave::WaveEngine;
use crate::assets::SpriteDims;

/// Axis-aligned bounding box, top-left origin like the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }
}

/// Standard AABB overlap test, strict on all four edges (boxes that only
/// touch do not collide)
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Box of a sprite whose bottom-center rests at (`x`, `bottom`)
#[inline]
fn anchored_box(x: f32, bottom: f32, w: f32, h: f32) -> Rect {
    Rect::new(x - w / 2.0, bottom - h, w, h)
}

/// Player bounding box at the fixed horizontal anchor, lifted off the
/// curve by the current jump height
pub fn player_box(
    wave: &WaveEngine,
    player_x: f32,
    jump_height: f32,
    dims: SpriteDims,
    scale: f32,
) -> Rect {
    let bottom = wave.height_at(player_x) - jump_height;
    anchored_box(player_x, bottom, dims.width * scale, dims.height * scale)
}

/// Obstacle bounding box, resting directly on the curve at the obstacle's
/// current x. Obstacles never jump, so a jumping player clears them.
pub fn obstacle_box(wave: &WaveEngine, obstacle: &Obstacle) -> Rect {
    let bottom = wave.height_at(obstacle.x);
    anchored_box(obstacle.x, bottom, obstacle.width, obstacle.height)
}

/// Index of the first loaded obstacle overlapping `player`, in spawn
/// order. At most one hit is resolved per tick.
pub fn first_hit(wave: &WaveEngine, player: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|o| o.loaded && overlaps(player, &obstacle_box(wave, o)))
}
