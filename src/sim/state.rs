//! Game state and core simulation types
//!
//! Everything a run consists of lives here: the wave, the player, the live
//! obstacles, the phase machine and the timers that drive morphing and
//! spawning. All mutation goes through `GameState` methods so the
//! invariants (lives never negative, jump height inside its cap, timers
//! stopped while frozen) hold from every call site.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{self, Rect};
use super::spawn;
use super::timer::{OneShotTimer, PeriodicTimer};
use super::wave::WaveEngine;
use crate::assets::{SpriteCatalog, SpriteState};
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen by the player; resumes only on another toggle
    Paused,
    /// Frozen by a temp-pause pickup; resumes on its own
    TemporarilyPaused,
    /// Out of lives (terminal)
    Dead,
    /// Coin target reached (terminal)
    Won,
}

impl GamePhase {
    /// Terminal phases permit no further state mutation
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Dead | GamePhase::Won)
    }
}

/// Obstacle categories, each with a distinct effect on hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// +1 coin; collecting the configured target wins the run
    Coin,
    /// -1 life; the run ends at zero
    Spike,
    /// Scroll speed down a notch
    Slowdown,
    /// Scroll speed up a notch
    Speedup,
    /// Freezes the game briefly, then auto-resumes
    TempPause,
    /// +1 life
    Life,
}

impl ObstacleKind {
    /// Every kind, in sprite-manifest order
    pub const ALL: [ObstacleKind; 6] = [
        ObstacleKind::Coin,
        ObstacleKind::Spike,
        ObstacleKind::Slowdown,
        ObstacleKind::Speedup,
        ObstacleKind::TempPause,
        ObstacleKind::Life,
    ];

    pub const COUNT: usize = Self::ALL.len();
}

/// A live obstacle riding the curve toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Horizontal anchor (box center); decreases by player speed each tick
    pub x: f32,
    /// Scaled box width; zero until the sprite is loaded
    pub width: f32,
    /// Scaled box height; zero until the sprite is loaded
    pub height: f32,
    /// Whether sprite dimensions are known; unloaded obstacles move but
    /// neither draw nor collide
    pub loaded: bool,
}

/// The rider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub lives: u32,
    pub coins: u32,
    /// Difficulty level; indexes both the skin table and the spawn tables
    pub level: usize,
    /// Current lift above the curve
    pub jump_height: f32,
    /// True while the jump is rising; the fall needs no input
    pub jumping: bool,
    /// Horizontal scroll speed applied to every obstacle per tick
    pub speed: f32,
}

/// Complete game state (deterministic given seed and input stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The curve everything rides on
    pub wave: WaveEngine,
    pub player: PlayerState,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Sprite readiness, written by the host's asset loader
    pub catalog: SpriteCatalog,
    pub(super) morph_timer: PeriodicTimer,
    pub(super) spawn_timer: PeriodicTimer,
    pub(super) resume_timer: OneShotTimer,
    rng: Pcg32,
    config: GameConfig,
}

impl GameState {
    /// Create a new run. Fails only on an invalid configuration; table
    /// problems surface here, never at spawn time.
    pub fn new(config: GameConfig, catalog: SpriteCatalog, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let wave = WaveEngine::new(config.field_height / 2.0);
        let mut morph_timer = PeriodicTimer::new(MORPH_PERIOD);
        morph_timer.restart();
        let mut spawn_timer = PeriodicTimer::new(wave.speed * SPAWN_PERIOD_FACTOR);
        spawn_timer.restart();

        Ok(Self {
            seed,
            phase: GamePhase::Playing,
            player: PlayerState {
                lives: config.initial_lives,
                coins: 0,
                level: 0,
                jump_height: 0.0,
                jumping: false,
                speed: config.initial_speed,
            },
            wave,
            obstacles: Vec::new(),
            time_ticks: 0,
            catalog,
            morph_timer,
            spawn_timer,
            resume_timer: OneShotTimer::new(),
            rng: Pcg32::seed_from_u64(seed),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Begin a jump. Only honored while playing, and only from the
    /// ground; mid-flight triggers do nothing, so the profile is always a
    /// clean triangle (linear rise, slower linear fall).
    pub fn trigger_jump(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if !self.player.jumping && self.player.jump_height <= 0.0 {
            self.player.jumping = true;
        }
    }

    /// Flip between playing and paused. Pausing cancels both periodic
    /// timers; resuming restarts them fresh (missed periods are never
    /// replayed) with the spawn period recomputed from the wave's current
    /// speed. Toggling during a temp-pause upgrades it to a manual pause.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                self.morph_timer.cancel();
                self.spawn_timer.cancel();
                log::info!("paused at tick {}", self.time_ticks);
            }
            GamePhase::Paused => {
                self.resume();
                log::info!("resumed at tick {}", self.time_ticks);
            }
            GamePhase::TemporarilyPaused => {
                self.resume_timer.cancel();
                self.phase = GamePhase::Paused;
            }
            GamePhase::Dead | GamePhase::Won => {}
        }
    }

    /// Spawn period implied by the current wave speed
    pub(super) fn spawn_period(&self) -> f32 {
        self.wave.speed * SPAWN_PERIOD_FACTOR
    }

    /// Back to `Playing` with both periodic timers restarted fresh
    pub(super) fn resume(&mut self) {
        self.resume_timer.cancel();
        self.morph_timer.restart();
        self.spawn_timer.set_period(self.spawn_period());
        self.spawn_timer.restart();
        self.phase = GamePhase::Playing;
    }

    /// Freeze for the temp-pause duration with a deferred auto-resume.
    /// A temp-pause while already frozen is a no-op, so pickups can never
    /// stack or double-resume.
    pub(super) fn begin_temp_pause(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::TemporarilyPaused;
        self.morph_timer.cancel();
        self.spawn_timer.cancel();
        self.resume_timer.start(TEMP_PAUSE_SECS);
        log::debug!("temp pause for {TEMP_PAUSE_SECS}s");
    }

    /// Enter a terminal phase and stop every timer
    pub(super) fn finish(&mut self, outcome: GamePhase) {
        self.phase = outcome;
        self.morph_timer.cancel();
        self.spawn_timer.cancel();
        self.resume_timer.cancel();
        match outcome {
            GamePhase::Dead => log::info!(
                "game over: out of lives at tick {} with {} coins",
                self.time_ticks,
                self.player.coins
            ),
            GamePhase::Won => log::info!(
                "game won: {} coins at tick {}",
                self.player.coins,
                self.time_ticks
            ),
            _ => {}
        }
    }

    /// One morph step plus the level/skin change it may imply
    pub(super) fn morph_and_relevel(&mut self) {
        self.wave.morph(&mut self.rng);
        let level = self.wave.level();
        if level != self.player.level {
            log::info!(
                "level {} -> {} (amplitude {:.1})",
                self.player.level,
                level,
                self.wave.amplitude
            );
            self.player.level = level;
        }
    }

    /// One spawn cycle under the current level's table
    pub(super) fn roll_spawn(&mut self) {
        if let Some(obstacle) = spawn::spawn_roll(
            self.player.level,
            self.obstacles.len(),
            &self.config,
            &self.catalog,
            &mut self.rng,
        ) {
            log::debug!("spawned {:?} at x={:.0}", obstacle.kind, obstacle.x);
            self.obstacles.push(obstacle);
        }
    }

    /// Advance the jump along its triangular profile
    pub(super) fn decay_jump(&mut self) {
        let player = &mut self.player;
        if player.jumping {
            player.jump_height += JUMP_RISE_PER_TICK;
            if player.jump_height >= JUMP_MAX_HEIGHT {
                player.jump_height = JUMP_MAX_HEIGHT;
                player.jumping = false;
            }
        } else if player.jump_height > 0.0 {
            player.jump_height = (player.jump_height - JUMP_FALL_PER_TICK).max(0.0);
        }
    }

    /// Scroll obstacles left, pick up late-arriving sprite dimensions,
    /// and drop everything that has left the field
    pub(super) fn advance_obstacles(&mut self) {
        let speed = self.player.speed;
        let scale = self.config.sprite_scale;
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
            if !obstacle.loaded {
                if let SpriteState::Ready(dims) = self.catalog.obstacle(obstacle.kind) {
                    obstacle.width = dims.width * scale;
                    obstacle.height = dims.height * scale;
                    obstacle.loaded = true;
                }
            }
        }
        self.obstacles.retain(|o| o.x + o.width >= 0.0);
    }

    /// Player bounding box, or `None` while the active skin's sprite is
    /// not ready (collision then skips the tick instead of guessing)
    pub fn player_rect(&self) -> Option<Rect> {
        match self.catalog.skin(self.player.level) {
            SpriteState::Ready(dims) => Some(collision::player_box(
                &self.wave,
                self.config.player_x,
                self.player.jump_height,
                dims,
                self.config.sprite_scale,
            )),
            _ => None,
        }
    }

    /// Test the player against the live set and resolve at most one hit
    pub(super) fn resolve_collision(&mut self) {
        let Some(player) = self.player_rect() else {
            return;
        };
        if let Some(index) = collision::first_hit(&self.wave, &player, &self.obstacles) {
            self.apply_hit(index);
        }
    }

    /// Remove the hit obstacle and dispatch its effect by kind
    fn apply_hit(&mut self, index: usize) {
        let kind = self.obstacles[index].kind;
        // Remove first; a consumed obstacle must never be hit twice.
        self.obstacles.remove(index);
        log::debug!("hit {:?} at tick {}", kind, self.time_ticks);

        match kind {
            ObstacleKind::Coin => {
                self.player.coins += 1;
                // Exact-equality check: coins advance one per hit, so the
                // target can never be skipped.
                if self.player.coins == self.config.win_coin_target {
                    self.finish(GamePhase::Won);
                }
            }
            ObstacleKind::Spike => {
                self.player.lives = self.player.lives.saturating_sub(1);
                if self.player.lives == 0 {
                    self.finish(GamePhase::Dead);
                }
            }
            ObstacleKind::Slowdown => self.player.speed *= 1.0 - SPEED_NUDGE,
            ObstacleKind::Speedup => self.player.speed *= 1.0 + SPEED_NUDGE,
            ObstacleKind::TempPause => self.begin_temp_pause(),
            ObstacleKind::Life => self.player.lives += 1,
        }
    }
}
