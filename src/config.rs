//! Game configuration: field geometry, skins, spawn tables
//!
//! Everything here can be overridden from JSON (missing fields fall back
//! to the built-in defaults), and everything is checked once up front by
//! [`GameConfig::validate`]. A broken table is a startup error, never a
//! spawn-time panic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{ObstacleKind, SpawnEntry};

/// Number of difficulty levels; the amplitude ladder tops out at level 5
pub const LEVEL_COUNT: usize = 6;

/// One stop of the wave-band gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient in [0, 1]
    pub offset: f32,
    /// CSS color name or hex string
    pub color: String,
}

/// Visual identity of one difficulty level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinDef {
    /// Rider sprite sheet for this level
    pub sprite: String,
    /// Background fill behind the wave
    pub background: String,
    /// Gradient stops painting the wave band
    pub gradient: Vec<GradientStop>,
}

/// Full configuration consumed by the simulation core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Visible field width; obstacles enter just past the right edge
    pub field_width: f32,
    /// Field height; the wave midline sits at half of this
    pub field_height: f32,
    /// Fixed horizontal anchor of the rider
    pub player_x: f32,
    /// Uniform scale applied to rider and obstacle sprites
    pub sprite_scale: f32,
    /// How far past the right edge obstacles spawn, so they scroll in
    /// instead of popping in
    pub spawn_margin: f32,
    /// Cap on simultaneous live obstacles
    pub max_live_obstacles: usize,
    /// Starting lives
    pub initial_lives: u32,
    /// Starting scroll speed in pixels per tick
    pub initial_speed: f32,
    /// Coins needed to win the run
    pub win_coin_target: u32,
    /// Sprite path for each obstacle kind, in [`ObstacleKind::ALL`] order
    pub obstacle_sprites: Vec<String>,
    /// Per-level visuals; row index is the difficulty level
    pub skins: Vec<SkinDef>,
    /// Per-level weighted spawn tables; row index is the difficulty level
    pub levels: Vec<Vec<SpawnEntry>>,
}

/// Configuration problems, all caught at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("skin table has {skins} rows and level table {levels}; both need {}", LEVEL_COUNT)]
    TableMismatch { skins: usize, levels: usize },
    #[error("spawn table for level {level} is empty")]
    EmptyTable { level: usize },
    #[error("zero weight in spawn table for level {level}, entry {entry}")]
    ZeroWeight { level: usize, entry: usize },
    #[error("obstacle sprite list has {got} paths, expected {expected}")]
    SpriteCount { got: usize, expected: usize },
    #[error("field dimensions must be positive, got {width}x{height}")]
    BadField { width: f32, height: f32 },
}

impl GameConfig {
    /// Parse a JSON override. Fields left out keep their defaults; the
    /// result is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check table shapes and weights. The level derived from the wave is
    /// always in `0..LEVEL_COUNT`, so a config that passes here can never
    /// produce an out-of-range lookup later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::BadField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.skins.len() != LEVEL_COUNT || self.levels.len() != LEVEL_COUNT {
            return Err(ConfigError::TableMismatch {
                skins: self.skins.len(),
                levels: self.levels.len(),
            });
        }
        if self.obstacle_sprites.len() != ObstacleKind::COUNT {
            return Err(ConfigError::SpriteCount {
                got: self.obstacle_sprites.len(),
                expected: ObstacleKind::COUNT,
            });
        }
        for (level, table) in self.levels.iter().enumerate() {
            if table.is_empty() {
                return Err(ConfigError::EmptyTable { level });
            }
            for (entry, row) in table.iter().enumerate() {
                if row.weight == 0 {
                    return Err(ConfigError::ZeroWeight { level, entry });
                }
            }
        }
        Ok(())
    }

    /// Sprite path for an obstacle kind
    pub fn obstacle_sprite(&self, kind: ObstacleKind) -> &str {
        &self.obstacle_sprites[kind as usize]
    }
}

/// Skin with the standard symmetric band gradient (dark edges, a bright
/// center line)
fn skin(sprite: &str, background: &str, edge: &str, center: &str) -> SkinDef {
    let stop = |offset: f32, color: &str| GradientStop {
        offset,
        color: color.to_string(),
    };
    SkinDef {
        sprite: sprite.to_string(),
        background: background.to_string(),
        gradient: vec![
            stop(0.0, "black"),
            stop(0.45, edge),
            stop(0.5, center),
            stop(0.55, edge),
            stop(1.0, "black"),
        ],
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        use ObstacleKind::{Coin, Life, Slowdown, Speedup, Spike, TempPause};

        Self {
            field_width: 800.0,
            field_height: 600.0,
            player_x: 100.0,
            sprite_scale: 1.5,
            spawn_margin: 50.0,
            max_live_obstacles: 2,
            initial_lives: 3,
            initial_speed: 1.0,
            win_coin_target: 500,
            obstacle_sprites: vec![
                "./bonus_0003.png".to_string(),  // coin
                "./enemy_spike.gif".to_string(), // spike
                "./bonus_0004.png".to_string(),  // slowdown
                "./bonus_0002.png".to_string(),  // speedup
                "./bonus_0001.png".to_string(),  // temp-pause
                "./bonus_0005.png".to_string(),  // life
            ],
            skins: vec![
                skin("./dude_anim_nextgen_2_e.gif", "#000000", "cyan", "white"),
                skin("./dude_anim_nextgen_2_a.gif", "#ff00ff", "purple", "pink"),
                skin("./dude_anim_nextgen_2_c.gif", "#ff0000", "red", "white"),
                skin("./dude_anim_nextgen_2_b.gif", "#00ff00", "green", "white"),
                skin("./dude_anim_nextgen_2_d.gif", "#0000ff", "blue", "white"),
                skin("./dude_anim_nextgen_2_f.gif", "#888888", "grey", "white"),
            ],
            levels: vec![
                // Level 0: gentle start, every third roll is a blank.
                vec![
                    SpawnEntry::new(Coin, 1),
                    SpawnEntry::none(1),
                    SpawnEntry::new(Spike, 1),
                ],
                vec![
                    SpawnEntry::new(Coin, 1),
                    SpawnEntry::none(2),
                    SpawnEntry::new(Spike, 1),
                    SpawnEntry::new(Slowdown, 1),
                ],
                vec![
                    SpawnEntry::new(Coin, 1),
                    SpawnEntry::none(2),
                    SpawnEntry::new(Spike, 2),
                    SpawnEntry::new(Slowdown, 1),
                    SpawnEntry::new(Speedup, 1),
                ],
                vec![
                    SpawnEntry::new(Coin, 2),
                    SpawnEntry::none(2),
                    SpawnEntry::new(Spike, 2),
                    SpawnEntry::new(Slowdown, 1),
                    SpawnEntry::new(Speedup, 1),
                    SpawnEntry::new(Life, 1),
                ],
                vec![
                    SpawnEntry::new(Coin, 2),
                    SpawnEntry::none(2),
                    SpawnEntry::new(Spike, 2),
                    SpawnEntry::new(Slowdown, 1),
                    SpawnEntry::new(Speedup, 2),
                    SpawnEntry::new(Life, 1),
                    SpawnEntry::new(TempPause, 1),
                ],
                // Level 5: spike-heavy, the one extra life matters.
                vec![
                    SpawnEntry::new(Coin, 1),
                    SpawnEntry::none(2),
                    SpawnEntry::new(Spike, 3),
                    SpawnEntry::new(Slowdown, 2),
                    SpawnEntry::new(Speedup, 2),
                    SpawnEntry::new(Life, 1),
                    SpawnEntry::new(TempPause, 1),
                ],
            ],
        }
    }
}
