//! Weighted obstacle spawning
//!
//! Each difficulty level owns a table of weighted entries, one of which is
//! the "spawn nothing" slot. A spawn cycle draws a single integer from the
//! run's seeded RNG and walks the table, so the whole decision costs one
//! draw and replays identically for the same seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, ObstacleKind};
use crate::assets::{SpriteCatalog, SpriteState};
use crate::config::GameConfig;

/// One weighted row of a level's spawn table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnEntry {
    /// Kind to spawn; `None` is the "spawn nothing" slot
    pub kind: Option<ObstacleKind>,
    /// Selection weight; probability is weight over the table total
    pub weight: u32,
}

impl SpawnEntry {
    pub const fn new(kind: ObstacleKind, weight: u32) -> Self {
        Self {
            kind: Some(kind),
            weight,
        }
    }

    pub const fn none(weight: u32) -> Self {
        Self { kind: None, weight }
    }
}

/// Pick one entry with probability proportional to its weight.
///
/// Draws r in [0, total) and walks the table subtracting weights; the
/// entry that takes the remainder below zero wins. Returns `None` only
/// for an empty or all-zero table, which validation rules out.
pub fn weighted_pick<R: Rng>(table: &[SpawnEntry], rng: &mut R) -> Option<SpawnEntry> {
    let total: u32 = table.iter().map(|e| e.weight).sum();
    if total == 0 {
        return None;
    }
    let mut remainder = i64::from(rng.random_range(0..total));
    for entry in table {
        remainder -= i64::from(entry.weight);
        if remainder < 0 {
            return Some(*entry);
        }
    }
    None
}

/// Run one spawn cycle for `level` and construct the obstacle, if any.
///
/// Returns `None` when the live cap is reached (no RNG draw happens at
/// all), when the "nothing" slot wins, or when the winning kind's sprite
/// failed to load. A still-pending sprite spawns unloaded; its box fills
/// in once the loader reports dimensions.
pub fn spawn_roll<R: Rng>(
    level: usize,
    live_count: usize,
    config: &GameConfig,
    catalog: &SpriteCatalog,
    rng: &mut R,
) -> Option<Obstacle> {
    if live_count >= config.max_live_obstacles {
        return None;
    }

    let entry = weighted_pick(&config.levels[level], rng)?;
    let kind = entry.kind?;
    let x = config.field_width + config.spawn_margin;

    match catalog.obstacle(kind) {
        SpriteState::Ready(dims) => Some(Obstacle {
            kind,
            x,
            width: dims.width * config.sprite_scale,
            height: dims.height * config.sprite_scale,
            loaded: true,
        }),
        SpriteState::Pending => Some(Obstacle {
            kind,
            x,
            width: 0.0,
            height: 0.0,
            loaded: false,
        }),
        SpriteState::Failed => None,
    }
}
