use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Error, Incrementable};

pub(crate) const DEFAULT_MIN: u32 = 1;
pub(crate) const DEFAULT_MAX: u32 = 100;

#[derive(Debug)]
pub struct RandomIncrementer {
    rng: StdRng,
    min: u32,
    max: u32,
}

impl RandomIncrementer {
    pub fn new() -> RandomIncrementer {
        RandomIncrementer {
            rng: StdRng::from_os_rng(),
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }

    pub fn seeded(seed: u64) -> RandomIncrementer {
        RandomIncrementer {
            rng: StdRng::seed_from_u64(seed),
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }

    pub fn with_range(min: u32, max: u32) -> Result<RandomIncrementer, Error> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }

        Ok(RandomIncrementer {
            rng: StdRng::from_os_rng(),
            min,
            max,
        })
    }
}

impl Default for RandomIncrementer {
    fn default() -> RandomIncrementer {
        RandomIncrementer::new()
    }
}

impl Incrementable for RandomIncrementer {
    fn next(&mut self) -> u32 {
        self.rng.random_range(self.min..=self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stays_within_default_bounds() {
        let mut incrementer = RandomIncrementer::new();

        for _ in 0..1000 {
            let value = incrementer.next();
            assert!(value >= 1, "{} is below the lower bound", value);
            assert!(value <= 100, "{} is above the upper bound", value);
        }
    }

    #[test]
    fn test_stays_within_custom_bounds() {
        let mut incrementer = RandomIncrementer::with_range(5, 10).unwrap();

        for _ in 0..1000 {
            let value = incrementer.next();
            assert!((5..=10).contains(&value));
        }
    }

    #[test]
    fn test_equal_seeds_produce_equal_sequences() {
        let mut left = RandomIncrementer::seeded(42);
        let mut right = RandomIncrementer::seeded(42);

        for _ in 0..16 {
            assert_eq!(left.next(), right.next());
        }
    }

    #[test]
    fn test_single_value_range() {
        let mut incrementer = RandomIncrementer::with_range(7, 7).unwrap();

        assert_eq!(incrementer.next(), 7);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let error = RandomIncrementer::with_range(10, 5).unwrap_err();

        assert_eq!(error, Error::InvalidRange { min: 10, max: 5 });
    }
}
