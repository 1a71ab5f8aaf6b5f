use crate::Coord;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// Small linear-congruential generator.
///
/// Not suitable for anything but reproducible boards: the period is at most 233280 and the
/// output is trivially predictable. Identical seeds always produce identical sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// A zero seed is replaced by 1.
    pub fn new(seed: u32) -> Self {
        if seed == 0 {
            log::warn!("seed cannot be 0, defaulting to 1");
        }
        Self {
            state: seed.max(1).into(),
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Next value in `0..bound`, by scaling and flooring [`Lcg::next_f64`].
    pub fn next_below(&mut self, bound: Coord) -> Coord {
        (self.next_f64() * f64::from(bound)) as Coord
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn follows_the_recurrence() {
        let mut rng = Lcg::new(1);
        assert_eq!(rng.next_f64(), 58598.0 / 233280.0);
        assert_eq!(rng.next_f64(), 127215.0 / 233280.0);
        assert_eq!(rng.next_f64(), 79852.0 / 233280.0);
    }

    #[test]
    fn zero_seed_behaves_like_one() {
        let zero: Vec<f64> = Lcg::new(0).take(16).collect();
        let one: Vec<f64> = Lcg::new(1).take(16).collect();
        assert_eq!(zero, one);
    }

    #[test]
    fn large_seeds_do_not_overflow() {
        let mut rng = Lcg::new(u32::MAX);
        assert_eq!(rng.next_f64(), 102652.0 / 233280.0);
    }

    #[test]
    fn values_stay_in_unit_interval() {
        assert!(Lcg::new(6).take(10_000).all(|value| (0.0..1.0).contains(&value)));
    }

    #[test]
    fn scaled_values_stay_below_bound() {
        let mut rng = Lcg::new(42);
        for _ in 0..10_000 {
            assert!(rng.next_below(9) < 9);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a: Vec<f64> = Lcg::new(6).take(8).collect();
        let b: Vec<f64> = Lcg::new(7).take(8).collect();
        assert_ne!(a, b);
    }
}
