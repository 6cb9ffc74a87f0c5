//! Procedurally morphing wave
//!
//! The wave is the single geometric authority: the player, every obstacle
//! and every collision box sit on the curve returned by [`WaveEngine::height_at`],
//! so nothing can drift out of sync with what is drawn.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{
    AMPLITUDE_TARGET_MAX, FREQUENCY_TARGET_MAX, MORPH_SMOOTHING, SPEED_TARGET_MAX,
    SPEED_TARGET_MIN,
};
use crate::lerp;

/// Amplitude thresholds for the difficulty ladder, highest tier first.
/// Strictly-greater comparisons, so an amplitude of exactly 75 is level 4.
const LEVEL_LADDER: [(f32, usize); 5] = [(75.0, 5), (50.0, 4), (30.0, 3), (15.0, 2), (5.0, 1)];

/// Difficulty level for a given wave amplitude (0 = calmest, 5 = wildest)
#[inline]
pub fn level_for_amplitude(amplitude: f32) -> usize {
    for (threshold, level) in LEVEL_LADDER {
        if amplitude > threshold {
            return level;
        }
    }
    0
}

/// The sine curve the player rides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveEngine {
    /// Peak vertical displacement from the midline
    pub amplitude: f32,
    /// Spatial frequency of the curve
    pub frequency: f32,
    /// Phase advance per simulation tick (the wave's scroll rate)
    pub speed: f32,
    /// Accumulated phase; unbounded, only ever fed to `sin`
    pub phase: f32,
    /// Vertical midline the curve oscillates around (half the field height)
    pub midline: f32,
}

impl WaveEngine {
    /// A flat, slow wave centered on `midline`. The first few seconds of a
    /// run are calm on purpose; morphing brings the difficulty up.
    pub fn new(midline: f32) -> Self {
        Self {
            amplitude: 0.0,
            frequency: 0.0,
            speed: 0.01,
            phase: 0.0,
            midline,
        }
    }

    /// Drift all three parameters a small step toward fresh random targets.
    ///
    /// Called on a fixed period, not per frame. Each call picks new targets
    /// and blends only [`MORPH_SMOOTHING`] of the way there, which turns
    /// the uniform random draws into slow continuous drift.
    pub fn morph<R: Rng>(&mut self, rng: &mut R) {
        let target_amplitude = rng.random_range(0.0..AMPLITUDE_TARGET_MAX);
        let target_frequency = rng.random_range(0.0..FREQUENCY_TARGET_MAX);
        let target_speed = rng.random_range(SPEED_TARGET_MIN..SPEED_TARGET_MAX);

        self.amplitude = lerp(self.amplitude, target_amplitude, MORPH_SMOOTHING);
        self.frequency = lerp(self.frequency, target_frequency, MORPH_SMOOTHING);
        self.speed = lerp(self.speed, target_speed, MORPH_SMOOTHING);
    }

    /// Difficulty level implied by the current amplitude
    pub fn level(&self) -> usize {
        level_for_amplitude(self.amplitude)
    }

    /// Vertical position of the curve at horizontal coordinate `x`
    #[inline]
    pub fn height_at(&self, x: f32) -> f32 {
        self.midline + self.amplitude * (self.frequency * x + self.phase).sin()
    }

    /// Slope of the curve at `x`, as a rotation angle for sprites riding it
    pub fn slope_angle_at(&self, x: f32) -> f32 {
        (self.height_at(x + 1.0) - self.height_at(x)).atan2(1.0)
    }

    /// Advance the phase by one tick's worth of scroll
    pub fn step(&mut self) {
        self.phase += self.speed;
    }
}
