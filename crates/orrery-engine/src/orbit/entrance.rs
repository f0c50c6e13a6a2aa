//! Staggered entrance animation.
//!
//! A body stays at scale 0 until its delay has passed, then grows to full
//! size over `ENTRANCE_DURATION` seconds with a cubic ease-out.

use crate::extensions::easing::Easing;

/// Growth time in seconds.
pub const ENTRANCE_DURATION: f32 = 1.5;

const END_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    start: f64,
    delay: f32,
    progress: f32,
}

impl Entrance {
    pub fn new(start: f64, delay: f32) -> Self {
        Self {
            start,
            delay: delay.max(0.0),
            progress: 0.0,
        }
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Time at which progress reaches exactly 1.
    pub fn end(&self) -> f64 {
        self.start + self.delay as f64 + ENTRANCE_DURATION as f64
    }

    /// Move progress forward to time `now`. Never decreases, even if `now`
    /// goes backwards.
    pub fn update(&mut self, now: f64) {
        if self.is_complete() {
            return;
        }
        // Snap within a microsecond of the end so f32 delays still finish.
        if now >= self.end() - END_TOLERANCE {
            self.progress = 1.0;
            return;
        }
        let grown = now - self.start - self.delay as f64;
        if grown > 0.0 {
            let p = (grown / ENTRANCE_DURATION as f64) as f32;
            self.progress = self.progress.max(p.min(1.0));
        }
    }

    /// Render scale for the current progress.
    pub fn scale(&self) -> f32 {
        Easing::CubicOut.apply(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_until_delay_has_passed() {
        let mut e = Entrance::new(10.0, 0.45);
        e.update(10.0);
        assert_eq!(e.progress(), 0.0);
        e.update(10.44);
        assert_eq!(e.progress(), 0.0);
        assert_eq!(e.scale(), 0.0);
        e.update(10.5);
        assert!(e.progress() > 0.0);
    }

    #[test]
    fn complete_after_delay_plus_duration() {
        let mut e = Entrance::new(0.0, 0.3);
        e.update(0.3 + ENTRANCE_DURATION as f64);
        assert_eq!(e.progress(), 1.0);
        assert_eq!(e.scale(), 1.0);
        e.update(100.0);
        assert_eq!(e.progress(), 1.0);
    }

    #[test]
    fn finishes_exactly_at_end_for_any_start() {
        for s in 0..200 {
            let start = s as f64 * 0.37;
            for i in 0..30 {
                let delay = 0.15 * i as f32;
                let mut e = Entrance::new(start, delay);
                e.update(start + delay as f64 + ENTRANCE_DURATION as f64);
                assert_eq!(e.progress(), 1.0, "start {start} delay {delay}");
                assert_eq!(e.scale(), 1.0);

                let mut f64_delay = Entrance::new(start, delay);
                f64_delay.update(start + 0.15 * i as f64 + 1.5);
                assert_eq!(f64_delay.progress(), 1.0, "start {start} delay {delay}");
            }
        }
    }

    #[test]
    fn just_before_end_is_not_complete() {
        let mut e = Entrance::new(3.0, 0.45);
        e.update(e.end() - 0.01);
        assert!(e.progress() < 1.0);
        assert!(e.progress() > 0.99);
    }

    #[test]
    fn monotone_and_bounded() {
        let mut e = Entrance::new(0.0, 0.15);
        let mut last = 0.0;
        for frame in 0..200 {
            e.update(frame as f64 / 60.0);
            assert!(e.progress() >= last);
            assert!(e.progress() <= 1.0);
            last = e.progress();
        }
        e.update(0.2);
        assert_eq!(e.progress(), last);
    }

    #[test]
    fn scale_is_cubic_ease_out() {
        let mut e = Entrance::new(0.0, 0.0);
        e.update(0.75);
        assert_abs_diff_eq!(e.progress(), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(e.scale(), 1.0 - 0.5f32.powi(3), epsilon = 1e-6);
    }
}
