//! Sprite readiness shared with the host's asset loader
//!
//! Decoding happens outside the core (the loader may be async); the sim
//! only needs to know whether a sprite is ready and how big it is. Slots
//! start pending, flip to ready or failed exactly once, and are re-read
//! every tick so late arrivals slot in automatically.

use serde::{Deserialize, Serialize};

use crate::sim::ObstacleKind;

/// Pixel dimensions of a decoded sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteDims {
    pub width: f32,
    pub height: f32,
}

/// Lifecycle of one sprite slot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SpriteState {
    /// Still decoding; skipped by collision and render, retried each tick
    #[default]
    Pending,
    /// Decoded; dimensions are final
    Ready(SpriteDims),
    /// Decoding failed; the sprite never shows and its kind never spawns
    Failed,
}

impl SpriteState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SpriteState::Ready(_))
    }
}

/// Readiness of every sprite the game can draw
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteCatalog {
    obstacles: [SpriteState; ObstacleKind::COUNT],
    skins: Vec<SpriteState>,
}

impl SpriteCatalog {
    /// A catalog with one pending slot per obstacle kind and per skin
    pub fn new(skin_count: usize) -> Self {
        Self {
            obstacles: [SpriteState::Pending; ObstacleKind::COUNT],
            skins: vec![SpriteState::Pending; skin_count],
        }
    }

    /// Everything ready at the given dimensions; for tests and headless
    /// runs that have no decoder
    pub fn all_ready(skin_count: usize, dims: SpriteDims) -> Self {
        Self {
            obstacles: [SpriteState::Ready(dims); ObstacleKind::COUNT],
            skins: vec![SpriteState::Ready(dims); skin_count],
        }
    }

    pub fn obstacle(&self, kind: ObstacleKind) -> SpriteState {
        self.obstacles[kind as usize]
    }

    /// Skin slot for a level; an out-of-range index reads as failed so a
    /// mis-sized catalog degrades to "never shows" instead of panicking
    pub fn skin(&self, index: usize) -> SpriteState {
        self.skins.get(index).copied().unwrap_or(SpriteState::Failed)
    }

    /// Loader callback: an obstacle sprite finished decoding
    pub fn mark_obstacle_ready(&mut self, kind: ObstacleKind, dims: SpriteDims) {
        self.obstacles[kind as usize] = SpriteState::Ready(dims);
    }

    /// Loader callback: an obstacle sprite failed to decode. Logged once;
    /// the kind is excluded from spawning from here on.
    pub fn mark_obstacle_failed(&mut self, kind: ObstacleKind) {
        log::warn!("sprite for {kind:?} failed to load; it will never spawn");
        self.obstacles[kind as usize] = SpriteState::Failed;
    }

    /// Loader callback: a skin sprite finished decoding
    pub fn mark_skin_ready(&mut self, index: usize, dims: SpriteDims) {
        if let Some(slot) = self.skins.get_mut(index) {
            *slot = SpriteState::Ready(dims);
        } else {
            log::warn!("skin index {index} out of range, ignoring");
        }
    }

    /// Loader callback: a skin sprite failed to decode
    pub fn mark_skin_failed(&mut self, index: usize) {
        if let Some(slot) = self.skins.get_mut(index) {
            log::warn!("skin {index} failed to load; the rider will not draw at that level");
            *slot = SpriteState::Failed;
        }
    }
}
