//! Wave Rider headless runner
//!
//! Drives the deterministic sim the same way a rendering host would: a
//! synthetic 60 Hz frame clock feeding the fixed-timestep accumulator,
//! with the autopilot surfing. Useful for soak-testing a seed and for
//! watching a run's shape in the logs without any front end.
//!
//! Usage: wave-rider [seed] [seconds]

use std::time::Instant;

use wave_rider::assets::{SpriteCatalog, SpriteDims};
use wave_rider::consts::{MAX_SUBSTEPS, SIM_DT};
use wave_rider::fps::FpsMeter;
use wave_rider::sim::{TickInput, tick};
use wave_rider::{GameConfig, GameState};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(12345);
    let seconds: f32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(120.0);

    log::info!("Wave Rider (headless) starting with seed {seed} for {seconds}s");

    let config = GameConfig::default();
    // No decoder here; pretend every sprite arrived at a nominal size.
    let catalog = SpriteCatalog::all_ready(
        config.skins.len(),
        SpriteDims {
            width: 32.0,
            height: 32.0,
        },
    );

    let mut state = match GameState::new(config, catalog, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let input = TickInput {
        demo_mode: true,
        ..Default::default()
    };
    let mut meter = FpsMeter::new();
    let start = Instant::now();

    let frame_dt = 1.0 / 60.0;
    let total_frames = (seconds / frame_dt).ceil() as u64;
    let mut accumulator = 0.0f32;

    for frame in 0..total_frames {
        accumulator += frame_dt;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        meter.record(start.elapsed().as_secs_f64() * 1000.0);

        if frame % 300 == 0 {
            log::info!(
                "t={:>6.1}s level={} lives={} coins={} obstacles={} amp={:>5.1} speed={:.3} fps~{}",
                state.time_ticks as f32 * SIM_DT,
                state.player.level,
                state.player.lives,
                state.player.coins,
                state.obstacles.len(),
                state.wave.amplitude,
                state.player.speed,
                meter.fps(),
            );
        }

        if state.phase.is_terminal() {
            break;
        }
    }

    println!("seed:   {seed}");
    println!("phase:  {:?}", state.phase);
    println!("ticks:  {}", state.time_ticks);
    println!("level:  {}", state.player.level);
    println!("coins:  {}", state.player.coins);
    println!("lives:  {}", state.player.lives);
}
