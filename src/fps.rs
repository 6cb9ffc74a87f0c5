//! Rolling frame-rate meter
//!
//! Ring buffer of recent frame timestamps; the HUD reads a rounded FPS.
//! Stays at 0 until the window has filled once, so startup never shows a
//! garbage value.

/// Frames in the averaging window
const WINDOW: usize = 60;

/// FPS estimate averaged over the last [`WINDOW`] frames
#[derive(Debug, Clone)]
pub struct FpsMeter {
    frame_times: [f64; WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsMeter {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp in milliseconds and refresh the estimate
    pub fn record(&mut self, now_ms: f64) {
        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % WINDOW;

        // After the advance, frame_index points at the oldest sample;
        // the window spans WINDOW - 1 frame intervals.
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = now_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((WINDOW as f64 - 1.0) * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    /// Latest estimate; 0 until enough frames have been recorded
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_reads_zero_before_window_fills() {
        let mut meter = FpsMeter::new();
        for i in 1..WINDOW {
            meter.record(i as f64 * 16.0);
            assert_eq!(meter.fps(), 0);
        }
    }

    #[test]
    fn test_steady_sixty_hz_reads_sixty() {
        let mut meter = FpsMeter::new();
        let dt = 1000.0 / 60.0;
        for i in 1..=(WINDOW as u32 * 2) {
            meter.record(f64::from(i) * dt);
        }
        assert_eq!(meter.fps(), 60);
    }

    #[test]
    fn test_meter_tracks_a_slowdown() {
        let mut meter = FpsMeter::new();
        let mut now = 0.0;
        for _ in 0..WINDOW * 2 {
            now += 1000.0 / 60.0;
            meter.record(now);
        }
        // Drop to 30 Hz; once the window turns over the estimate follows.
        for _ in 0..WINDOW * 2 {
            now += 1000.0 / 30.0;
            meter.record(now);
        }
        assert_eq!(meter.fps(), 30);
    }
}
