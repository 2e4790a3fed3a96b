//! Gap-free stroke interpolation.

use egui::{Pos2, Vec2};

/// Intermediate pointer samples for one motion delta.
///
/// A fast pointer jumps many device pixels between move events; sampling
/// `floor(|delta|)` evenly spaced points along the segment visits every
/// grid cell the stroke crosses, so the painted line has no gaps. The
/// samples start at the previous position (`current - delta`) and stop one
/// step short of `current`; the controller paints the direct current
/// position after the batch, so the endpoint cell is never missed.
pub struct StrokePath {
    start: Pos2,
    step: Vec2,
    len: u32,
    next: u32,
}

impl StrokePath {
    /// A delta shorter than one device pixel yields no samples — the
    /// zero-length guard that keeps the step vector well defined.
    pub fn new(current: Pos2, delta: Vec2) -> Self {
        let len = delta.length().floor();
        if len < 1.0 {
            return Self { start: current, step: Vec2::ZERO, len: 0, next: 0 };
        }
        Self {
            start: current - delta,
            step: delta / len,
            len: len as u32,
            next: 0,
        }
    }
}

impl Iterator for StrokePath {
    type Item = Pos2;

    fn next(&mut self) -> Option<Pos2> {
        if self.next >= self.len {
            return None;
        }
        let i = self.next as f32;
        self.next += 1;
        Some(self.start + self.step * i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StrokePath {}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn sample_count_is_floor_of_delta_length() {
        assert_eq!(StrokePath::new(pos2(6.0, 0.0), vec2(6.0, 0.0)).count(), 6);
        // 3-4-5 triangle
        assert_eq!(StrokePath::new(pos2(3.0, 4.0), vec2(3.0, 4.0)).count(), 5);
        assert_eq!(StrokePath::new(pos2(0.0, 0.0), vec2(2.5, 0.0)).count(), 2);
    }

    #[test]
    fn short_or_zero_delta_yields_no_samples() {
        assert_eq!(StrokePath::new(pos2(5.0, 5.0), vec2(0.0, 0.0)).count(), 0);
        assert_eq!(StrokePath::new(pos2(5.0, 5.0), vec2(0.6, 0.6)).count(), 0);
        assert_eq!(StrokePath::new(pos2(5.0, 5.0), vec2(0.99, 0.0)).count(), 0);
    }

    #[test]
    fn samples_start_at_previous_position() {
        let mut path = StrokePath::new(pos2(10.0, 2.0), vec2(6.0, 0.0));
        assert_eq!(path.next(), Some(pos2(4.0, 2.0)));
    }

    #[test]
    fn samples_interpolate_monotonically_toward_current() {
        let current = pos2(13.0, 9.0);
        let delta = vec2(9.0, 6.0);
        let samples: Vec<_> = StrokePath::new(current, delta).collect();
        assert!(!samples.is_empty());
        for pair in samples.windows(2) {
            assert!(pair[1].x > pair[0].x);
            assert!(pair[1].y > pair[0].y);
        }
        let last = samples.last().unwrap();
        assert!(last.x < current.x && last.y < current.y);
    }

    #[test]
    fn size_hint_is_exact() {
        let mut path = StrokePath::new(pos2(6.0, 0.0), vec2(6.0, 0.0));
        assert_eq!(path.len(), 6);
        path.next();
        assert_eq!(path.len(), 5);
    }
}
