//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacles stay in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;
pub mod wave;

pub use collision::{Rect, first_hit, obstacle_box, overlaps, player_box};
pub use spawn::{SpawnEntry, spawn_roll, weighted_pick};
pub use state::{GamePhase, GameState, Obstacle, ObstacleKind, PlayerState};
pub use tick::{TickInput, tick};
pub use timer::{OneShotTimer, PeriodicTimer};
pub use wave::{WaveEngine, level_for_amplitude};
