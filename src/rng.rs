//! Small seedable RNG used for syllable draws.
//!
//! A Numerical Recipes LCG: deterministic for a given seed, which keeps grid
//! generation reproducible in tests. The browser seeds it from `getrandom`
//! (feature `rng`) or from `performance.now()` otherwise.

#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would still advance (c != 0), but keep seeds distinct from it.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the platform entropy source.
    #[cfg(feature = "rng")]
    pub fn from_entropy() -> Result<Self, crate::KupuError> {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf).map_err(|e| crate::KupuError::Entropy(e.to_string()))?;
        Ok(Self::new(u32::from_le_bytes(buf)))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, 1)`.
    ///
    /// Only the high 24 bits are used: the low bits of an LCG cycle with short periods.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn next_f64_stays_in_unit_interval() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v} out of range");
        }
    }

    #[cfg(feature = "rng")]
    #[test]
    fn entropy_seeds_a_working_rng() {
        let mut rng = SimpleRng::from_entropy().unwrap();
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}
