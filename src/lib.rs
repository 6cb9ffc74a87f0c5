//! Wave Rider - A side-scrolling sine-wave surfing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (wave motion, spawning, collisions, game state)
//! - `config`: Skins, spawn tables and tuning knobs with JSON overrides
//! - `assets`: Sprite readiness shared with the host's asset loader
//! - `fps`: Rolling frame-rate meter for the HUD

pub mod assets;
pub mod config;
pub mod fps;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GamePhase, GameState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the render cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Seconds between wave morph calls (independent of frame rate)
    pub const MORPH_PERIOD: f32 = 0.25;
    /// Blend factor applied per morph call; small enough that the wave
    /// drifts instead of jumping
    pub const MORPH_SMOOTHING: f32 = 0.0001;

    /// Morph target ranges
    pub const AMPLITUDE_TARGET_MAX: f32 = 200.0;
    pub const FREQUENCY_TARGET_MAX: f32 = 0.01;
    pub const SPEED_TARGET_MIN: f32 = 0.01;
    pub const SPEED_TARGET_MAX: f32 = 0.1;

    /// Spawn period in seconds per unit of wave speed (0.01 -> fires
    /// every 0.1 s, 0.1 -> every 1 s)
    pub const SPAWN_PERIOD_FACTOR: f32 = 10.0;

    /// Jump arc - linear rise to the cap, slower linear fall
    pub const JUMP_MAX_HEIGHT: f32 = 60.0;
    pub const JUMP_RISE_PER_TICK: f32 = 4.0;
    pub const JUMP_FALL_PER_TICK: f32 = 1.0;

    /// Multiplicative scroll-speed nudge from speedup/slowdown pickups
    pub const SPEED_NUDGE: f32 = 0.001;

    /// Seconds a temp-pause pickup freezes the game before auto-resume
    pub const TEMP_PAUSE_SECS: f32 = 2.0;
}

/// Linear interpolation by `factor` from `current` toward `target`
#[inline]
pub fn lerp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
