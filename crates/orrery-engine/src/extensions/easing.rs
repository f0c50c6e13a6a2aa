// extensions/easing.rs
//
// Reveal curves. Pure math, no scene access.

/// Maps normalized progress in [0, 1] to an eased value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// `1 − (1 − t)³`: quick growth that settles gently.
    CubicOut,
}

impl Easing {
    /// Input outside [0, 1] is clamped.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::CubicOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn cubic_out_is_ahead_of_linear() {
        assert!((Easing::CubicOut.apply(0.5) - 0.875).abs() < 1e-6);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!(Easing::CubicOut.apply(t) > Easing::Linear.apply(t));
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::CubicOut.apply(-2.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(3.0), 1.0);
    }
}
