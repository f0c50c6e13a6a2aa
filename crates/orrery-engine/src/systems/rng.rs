//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic across platforms so scene layouts are reproducible in tests.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform sample in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform sample in [min, max).
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Uniform sample in [-span/2, span/2), i.e. `(U - 0.5) * span`.
    pub fn centered(&mut self, span: f32) -> f32 {
        (self.next_f32() - 0.5) * span
    }

    /// +1.0 or -1.0 with equal probability.
    pub fn sign(&mut self) -> f32 {
        if self.next_f32() > 0.5 { 1.0 } else { -1.0 }
    }
}
