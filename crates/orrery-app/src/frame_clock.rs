//! Per-frame timing: variable-step delta time and total elapsed time.
//!
//! The scene's transform laws are pure functions of total elapsed time, and
//! camera movement scales by the per-frame delta. No fixed timestep, no
//! accumulator — one tick per rendered frame.

use std::time::Instant;

/// Wall-clock frame timer.
pub struct FrameClock {
    last_frame: Instant,
    elapsed: f64,
}

impl FrameClock {
    /// Creates a clock starting now, with zero elapsed time.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed: 0.0,
        }
    }

    /// Advances the clock to now and returns the delta since the previous
    /// tick in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Total elapsed time since creation, in seconds. This is the `t` fed to
    /// the body transform laws.
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.elapsed += dt;
        dt as f32
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_clock_has_zero_elapsed() {
        let clock = FrameClock::new();
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn test_tick_returns_delta_and_accumulates() {
        let start = Instant::now();
        let mut clock = FrameClock {
            last_frame: start,
            elapsed: 0.0,
        };

        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        assert!((clock.elapsed() - 0.016).abs() < 1e-6);

        let dt = clock.tick_at(start + Duration::from_millis(48));
        assert!((dt - 0.032).abs() < 1e-6);
        assert!((clock.elapsed() - 0.048).abs() < 1e-6);
    }

    #[test]
    fn test_zero_interval_tick() {
        let start = Instant::now();
        let mut clock = FrameClock {
            last_frame: start,
            elapsed: 0.0,
        };
        clock.tick_at(start + Duration::from_millis(10));
        let dt = clock.tick_at(start + Duration::from_millis(10));
        assert_eq!(dt, 0.0);
        assert!((clock.elapsed() - 0.010).abs() < 1e-6);
    }
}
