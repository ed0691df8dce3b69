use glam::Vec2;

/// Turns absolute pointer positions into look offsets.
///
/// There is no previous position before the first sample, so the first
/// sample (and the first one after [`PointerTracker::reset`]) yields a zero
/// offset. Y is reversed: moving the pointer up produces a positive offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position and return `(x_offset, y_offset)`.
    pub fn sample(&mut self, x: f64, y: f64) -> Vec2 {
        let pos = Vec2::new(x as f32, y as f32);
        let offset = match self.last {
            Some(last) => Vec2::new(pos.x - last.x, last.y - pos.y),
            None => {
                tracing::trace!("pointer baseline captured at ({x:.1}, {y:.1})");
                Vec2::ZERO
            }
        };
        self.last = Some(pos);
        offset
    }

    /// Forget the baseline, e.g. after the window loses focus.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn has_baseline(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_baseline_only() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.has_baseline());
        assert_eq!(tracker.sample(812.0, 377.0), Vec2::ZERO);
        assert!(tracker.has_baseline());
    }

    #[test]
    fn offsets_are_relative_with_y_reversed() {
        let mut tracker = PointerTracker::new();
        tracker.sample(100.0, 100.0);
        assert_eq!(tracker.sample(110.0, 95.0), Vec2::new(10.0, 5.0));
        assert_eq!(tracker.sample(100.0, 105.0), Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn reset_recaptures_baseline() {
        let mut tracker = PointerTracker::new();
        tracker.sample(0.0, 0.0);
        tracker.reset();
        assert_eq!(tracker.sample(500.0, -300.0), Vec2::ZERO);
        assert_eq!(tracker.sample(501.0, -300.0), Vec2::new(1.0, 0.0));
    }
}
