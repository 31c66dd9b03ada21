// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for datecrack, a parallel
// brute-force search that recovers a DDMMYYYY date from its salted hash. It
// exports all public modules and types the binary and tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: benchmark, core, error, search, utils

pub mod benchmark;
pub mod core;
pub mod error;
pub mod search;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::{BenchmarkConfig, BenchmarkRunner, SessionMetrics, SessionReport};
pub use crate::core::{Candidate, HashOracle, Salt, SaltedSha256, SearchSpace, UnixCrypt};
pub use crate::error::Error;
pub use crate::search::{crack, SearchOutcome, Searcher};

pub type Result<T> = std::result::Result<T, Error>;

// Changelog:
// - v1.1.0 (2025-07-06): Added crack mode and the thread sweep.
// - v1.0.0 (2025-07-02): Initial library root.
//   - Modules for candidates, hash oracles, the parallel search engine and
//     the benchmark loop, with a crate-wide Error and Result.
