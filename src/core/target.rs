// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/target.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the target generator: a random calendar-range date,
// encoded and hashed to give each benchmark round its search target.

use crate::core::candidate::{Candidate, MAX_DAY, MAX_MONTH, MAX_YEAR};
use crate::core::oracle::{HashOracle, Salt};
use crate::Result;
use rand::Rng;

/// A round's target together with the date that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantedTarget {
    pub candidate: Candidate,
    pub hash: String,
}

pub struct TargetGenerator<'o, O: HashOracle> {
    oracle: &'o O,
    salt: Salt,
    scratch: O::Scratch,
}

impl<'o, O: HashOracle> TargetGenerator<'o, O> {
    pub fn new(oracle: &'o O, salt: Salt) -> Self {
        Self {
            oracle,
            salt,
            scratch: O::Scratch::default(),
        }
    }

    /// Draw day 1..=31, month 1..=12 and year 0..=2025 uniformly and hash the
    /// encoded date. The generator is owned by the caller and only touched
    /// between rounds.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> Result<PlantedTarget> {
        let day = rng.gen_range(1..=MAX_DAY);
        let month = rng.gen_range(1..=MAX_MONTH);
        let year = rng.gen_range(0..=MAX_YEAR);
        let candidate = Candidate::encode(day, month, year);
        let hash = self
            .oracle
            .hash(&candidate, &self.salt, &mut self.scratch)?
            .to_string();
        Ok(PlantedTarget { candidate, hash })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::oracle::{hash_once, SaltedSha256};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_targets_are_calendar_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut generator = TargetGenerator::new(&SaltedSha256, Salt::DEFAULT);
        for _ in 0..500 {
            let target = generator.generate(&mut rng).unwrap();
            let (day, month, year) = target.candidate.decode();
            assert!((1..=31).contains(&day));
            assert!((1..=12).contains(&month));
            assert!(year <= 2025);
        }
    }

    #[test]
    fn test_target_hash_matches_candidate() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut generator = TargetGenerator::new(&SaltedSha256, Salt::DEFAULT);
        let target = generator.generate(&mut rng).unwrap();
        let expected = hash_once(&SaltedSha256, &target.candidate, &Salt::DEFAULT).unwrap();
        assert_eq!(target.hash, expected);
    }

    #[test]
    fn test_same_seed_same_targets() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        let mut generator = TargetGenerator::new(&SaltedSha256, Salt::DEFAULT);
        let first = generator.generate(&mut a).unwrap();
        let second = generator.generate(&mut b).unwrap();
        assert_eq!(first, second);
    }
}
