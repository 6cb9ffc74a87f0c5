//! Fixed timestep simulation tick
//!
//! Core game loop that advances a run deterministically. The host calls
//! [`tick`] once per fixed step; the morph and spawn cadences run on
//! simulation-clock timers polled here, so they fire between whole ticks
//! exactly as independent callbacks would, without any host scheduling.

use super::state::{GamePhase, GameState, ObstacleKind};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Request a jump (key/tap)
    pub jump: bool,
    /// Pause toggle
    pub toggle_pause: bool,
    /// Idle/demo mode - the autopilot hops the spikes
    pub demo_mode: bool,
}

/// Ticks of lookahead the autopilot gives itself; enough for a full rise
/// before a spike reaches the player anchor
const DEMO_LOOKAHEAD_TICKS: f32 = 40.0;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.toggle_pause {
        state.toggle_pause();
    }

    if input.jump || (input.demo_mode && demo_wants_jump(state)) {
        state.trigger_jump();
    }

    match state.phase {
        GamePhase::Paused | GamePhase::Dead | GamePhase::Won => return,
        GamePhase::TemporarilyPaused => {
            // Everything is frozen; only the deferred resume advances.
            if state.resume_timer.poll(dt) {
                state.resume();
                log::debug!("temp pause over, resuming");
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Periodic work fires between atomic units of tick work: morph first
    // (it may change the level), then spawning under the new level with
    // the period tracking the wave's current speed.
    for _ in 0..state.morph_timer.poll(dt) {
        state.morph_and_relevel();
    }
    let period = state.spawn_period();
    state.spawn_timer.set_period(period);
    for _ in 0..state.spawn_timer.poll(dt) {
        state.roll_spawn();
    }

    // Fixed intra-tick order: the wave advances, the jump decays,
    // obstacles move, then collision sees exactly the positions this
    // frame will render.
    state.wave.step();
    state.decay_jump();
    state.advance_obstacles();
    state.resolve_collision();
}

/// Demo autopilot: hop over the nearest spike, ride into everything else
fn demo_wants_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    let anchor = state.config().player_x;
    let horizon = state.player.speed * DEMO_LOOKAHEAD_TICKS;
    let next = state
        .obstacles
        .iter()
        .filter(|o| o.loaded && o.x > anchor && o.x - anchor < horizon)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
    matches!(next, Some(o) if o.kind == ObstacleKind::Spike)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{SpriteCatalog, SpriteDims};
    use crate::config::GameConfig;
    use crate::consts::{JUMP_MAX_HEIGHT, SIM_DT};
    use crate::sim::state::Obstacle;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    fn ready_state(seed: u64) -> GameState {
        let config = GameConfig::default();
        let catalog = SpriteCatalog::all_ready(
            config.skins.len(),
            SpriteDims {
                width: 20.0,
                height: 20.0,
            },
        );
        GameState::new(config, catalog, seed).unwrap()
    }

    fn obstacle(kind: ObstacleKind, x: f32) -> Obstacle {
        Obstacle {
            kind,
            x,
            width: 30.0,
            height: 30.0,
            loaded: true,
        }
    }

    #[test]
    fn test_tick_advances_time_and_wave() {
        let mut state = ready_state(1);
        let phase_before = state.wave.phase;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, 1);
        assert!(state.wave.phase > phase_before);
    }

    #[test]
    fn test_obstacles_scroll_left_each_tick() {
        let mut state = ready_state(2);
        state.obstacles.push(obstacle(ObstacleKind::Coin, 500.0));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.obstacles[0].x, 500.0 - state.player.speed);
    }

    #[test]
    fn test_pause_toggle_roundtrip() {
        let mut state = ready_state(3);
        let toggle = TickInput {
            toggle_pause: true,
            ..Default::default()
        };
        tick(&mut state, &toggle, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);
        tick(&mut state, &toggle, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pause_freezes_obstacle_positions() {
        let mut state = ready_state(4);
        state.obstacles.push(obstacle(ObstacleKind::Coin, 500.0));
        tick(
            &mut state,
            &TickInput {
                toggle_pause: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.phase, GamePhase::Paused);

        let x = state.obstacles[0].x;
        let ticks = state.time_ticks;
        let wave_phase = state.wave.phase;
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.obstacles[0].x, x);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.wave.phase, wave_phase);
    }

    #[test]
    fn test_jump_input_starts_a_jump() {
        let mut state = ready_state(5);
        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert!(state.player.jump_height > 0.0);
    }

    #[test]
    fn test_jump_ignored_while_paused() {
        let mut state = ready_state(6);
        tick(
            &mut state,
            &TickInput {
                toggle_pause: true,
                ..Default::default()
            },
            SIM_DT,
        );
        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.player.jump_height, 0.0);
        assert!(!state.player.jumping);
    }

    #[test]
    fn test_jump_height_stays_bounded_under_input_spam() {
        let mut state = ready_state(7);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..600 {
            let input = TickInput {
                jump: rng.random_bool(0.5),
                ..Default::default()
            };
            tick(&mut state, &input, SIM_DT);
            assert!(state.player.jump_height >= 0.0);
            assert!(state.player.jump_height <= JUMP_MAX_HEIGHT);
        }
    }

    #[test]
    fn test_morph_fires_on_its_own_cadence() {
        let mut state = ready_state(8);
        // 14 ticks is 0.233 s, short of the 0.25 s morph period.
        for _ in 0..14 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.wave.amplitude, 0.0);
        assert_eq!(state.wave.frequency, 0.0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        let morphed = state.wave.amplitude > 0.0
            || state.wave.frequency > 0.0
            || state.wave.speed != 0.01;
        assert!(morphed, "first morph should have drifted the wave");
    }

    #[test]
    fn test_spawning_happens_and_respects_cap() {
        let mut state = ready_state(9);
        // Initial speed 0.01 means a spawn roll every 0.1 s; ten seconds
        // is ~100 rolls against a two-obstacle cap.
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert!(state.obstacles.len() <= state.config().max_live_obstacles);
        }
        assert!(!state.obstacles.is_empty());
    }

    #[test]
    fn test_spike_hit_on_last_life_halts_simulation() {
        let mut state = ready_state(10);
        state.player.lives = 1;
        // Sitting right on the player anchor; the first tick resolves it.
        state.obstacles.push(obstacle(ObstacleKind::Spike, 100.0));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Dead);

        let ticks = state.time_ticks;
        let coins = state.player.coins;
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.player.coins, coins);
    }

    #[test]
    fn test_temp_pause_freezes_then_auto_resumes() {
        let mut state = ready_state(11);
        state.obstacles.push(obstacle(ObstacleKind::TempPause, 100.0));
        state.obstacles.push(obstacle(ObstacleKind::Coin, 700.0));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::TemporarilyPaused);
        assert_eq!(state.obstacles.len(), 1);

        // Frozen: the surviving coin holds position, time stands still.
        let x = state.obstacles[0].x;
        let mut frozen_ticks = 0u32;
        while state.phase == GamePhase::TemporarilyPaused {
            assert_eq!(state.obstacles[0].x, x);
            tick(&mut state, &TickInput::default(), SIM_DT);
            frozen_ticks += 1;
            assert!(frozen_ticks <= 125, "auto-resume never fired");
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.spawn_timer.is_active());
        // Two seconds at 60 Hz, give or take float accumulation.
        assert!(
            (118..=122).contains(&frozen_ticks),
            "froze for {frozen_ticks} ticks"
        );
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.obstacles[0].x < x);
    }

    #[test]
    fn test_demo_mode_hops_spikes() {
        let mut state = ready_state(12);
        state.obstacles.push(obstacle(ObstacleKind::Spike, 135.0));
        let input = TickInput {
            demo_mode: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!(state.player.jump_height > 0.0);
    }

    #[test]
    fn test_demo_mode_rides_into_coins() {
        let mut state = ready_state(13);
        state.obstacles.push(obstacle(ObstacleKind::Coin, 120.0));
        let input = TickInput {
            demo_mode: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        // No hop; the autopilot wants the pickup and takes it.
        assert_eq!(state.player.jump_height, 0.0);
        assert_eq!(state.player.coins, 1);
    }

    #[test]
    fn test_determinism() {
        // Two runs with the same seed and input stream stay identical.
        let mut a = ready_state(99999);
        let mut b = ready_state(99999);
        let mut rng = Pcg32::seed_from_u64(5);

        for i in 0..2000u32 {
            let input = TickInput {
                jump: rng.random_bool(0.1),
                toggle_pause: i % 541 == 0 && i > 0,
                ..Default::default()
            };
            tick(&mut a, &input, SIM_DT);
            tick(&mut b, &input, SIM_DT);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.player.coins, b.player.coins);
        assert_eq!(a.player.lives, b.player.lives);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.wave.amplitude.to_bits(), b.wave.amplitude.to_bits());
        assert_eq!(a.wave.phase.to_bits(), b.wave.phase.to_bits());
        assert_eq!(a.player.speed.to_bits(), b.player.speed.to_bits());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = ready_state(1);
        let mut b = ready_state(2);
        for _ in 0..2000 {
            tick(&mut a, &TickInput::default(), SIM_DT);
            tick(&mut b, &TickInput::default(), SIM_DT);
        }
        // Morphing consumed different draws, so the waves disagree.
        assert_ne!(a.wave.amplitude.to_bits(), b.wave.amplitude.to_bits());
    }
}
