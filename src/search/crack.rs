// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/crack.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file recovers the date behind one externally supplied hash.

use crate::core::oracle::{HashOracle, Salt};
use crate::error::Error;
use crate::search::searcher::{SearchOutcome, Searcher};
use crate::Result;
use log::info;

const LOG_TARGET: &str = "datecrack::crack";

/// Check the hash shape and pull its salt from the first two characters
pub fn salt_of<O: HashOracle>(oracle: &O, hash: &str) -> Result<Salt> {
    if hash.len() != oracle.hash_len() {
        return Err(Error::InvalidHash {
            hash: hash.to_string(),
            reason: "wrong length for the selected algorithm",
        });
    }
    Salt::from_hash(hash)
}

/// Search the full space for `hash`. A miss is `found == None`.
pub fn crack<O: HashOracle>(oracle: O, hash: &str, workers: usize) -> Result<SearchOutcome> {
    let salt = salt_of(&oracle, hash)?;
    info!(target: LOG_TARGET,
        "🔓 Cracking {} hash {} (salt {}) with {} thread(s)",
        oracle.name(), hash, salt, workers
    );
    Searcher::new(oracle, salt, workers).search(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::candidate::Candidate;
    use crate::core::oracle::{hash_once, SaltedSha256, UnixCrypt};

    #[test]
    fn test_crack_salted_sha256() {
        let salt = Salt::new("x7").unwrap();
        let planted = Candidate::encode(29, 2, 1996);
        let hash = hash_once(&SaltedSha256, &planted, &salt).unwrap();
        let outcome = crack(SaltedSha256, &hash, 4).unwrap();
        assert_eq!(outcome.found, Some(planted));
    }

    #[test]
    fn test_rejects_malformed_hash() {
        assert!(matches!(
            salt_of(&UnixCrypt, "ABshort"),
            Err(Error::InvalidHash { .. })
        ));
        assert!(matches!(
            salt_of(&UnixCrypt, "!!0123456789a"),
            Err(Error::InvalidSalt { .. })
        ));
        assert!(salt_of(&UnixCrypt, "AB0123456789a").is_ok());
    }
}
