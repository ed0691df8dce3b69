use std::time::Instant;

/// Longest frame delta handed to the camera, in seconds.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Per-frame timing: last frame timestamp and the delta since it.
///
/// Only used to scale camera movement; the scene itself is static.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_frame: Instant,
    delta: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            last_frame: now,
            delta: 0.0,
        }
    }

    /// Advance to `now` and return the clamped delta in seconds.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.delta = elapsed.min(MAX_FRAME_DELTA);
        self.delta
    }

    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Delta computed by the most recent tick.
    pub fn delta(&self) -> f32 {
        self.delta
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
    fn first_delta_is_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn tick_measures_elapsed_time() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-4);
        assert_eq!(clock.delta(), dt);
    }

    #[test]
    fn long_stall_is_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let dt = clock.tick_at(start + Duration::from_secs(3));
        assert_eq!(dt, MAX_FRAME_DELTA);
    }

    #[test]
    fn clock_going_backwards_yields_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(start);
        let dt = clock.tick_at(start - Duration::from_millis(500));
        assert_eq!(dt, 0.0);
    }
}
