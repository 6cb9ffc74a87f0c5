//! Simulation-clock timers
//!
//! The wave morph and obstacle spawn cadences, plus the deferred resume
//! after a temp-pause pickup, all run on these timers instead of host
//! callbacks. They advance only when the sim is ticked, which keeps runs
//! deterministic and lets pausing cancel them outright.

use serde::{Deserialize, Serialize};

/// Repeating timer with a fixed period in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodicTimer {
    period: f32,
    elapsed: f32,
    active: bool,
}

impl PeriodicTimer {
    /// A stopped timer; call [`restart`](Self::restart) to arm it
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Arm the timer with an empty accumulator. Restarting after a pause
    /// means no missed firings are ever replayed.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Stop and clear accumulated time. Cancelling twice is harmless.
    pub fn cancel(&mut self) {
        self.elapsed = 0.0;
        self.active = false;
    }

    /// Change the period without disturbing accumulated time
    pub fn set_period(&mut self, period: f32) {
        self.period = period;
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by `dt` seconds and return how many times the timer fired.
    /// A period much shorter than `dt` fires more than once per call.
    pub fn poll(&mut self, dt: f32) -> u32 {
        if !self.active || self.period <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut firings = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            firings += 1;
        }
        firings
    }
}

/// One-shot timer for a single deferred action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OneShotTimer {
    remaining: f32,
    armed: bool,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire once, `delay` seconds from now
    pub fn start(&mut self, delay: f32) {
        self.remaining = delay;
        self.armed = true;
    }

    /// Disarm without firing. Cancelling twice is harmless.
    pub fn cancel(&mut self) {
        self.remaining = 0.0;
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Advance by `dt` seconds; returns true on the poll where the delay
    /// runs out, then disarms itself
    pub fn poll(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.cancel();
            true
        } else {
            false
        }
    }
}
