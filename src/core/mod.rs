// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core building blocks of
// datecrack: candidate encoding, hash oracles, target generation and the
// shared argument types.

pub mod candidate;
pub mod oracle;
pub mod target;
pub mod types;

// Re-export the most commonly used items
pub use candidate::{Candidate, SearchSpace};
pub use oracle::{hash_once, hashes_match, HashOracle, Salt, SaltedSha256, UnixCrypt};
pub use target::{PlantedTarget, TargetGenerator};
pub use types::{Algorithm, Args, SearchMode, MAX_THREADS};
