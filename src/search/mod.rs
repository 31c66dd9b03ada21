// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the search engine of datecrack.
//
// Tree Location:
// - src/search/mod.rs (search module entry point)
// - Submodules: claim, partition, worker, searcher, crack

pub mod claim;
pub mod crack;
pub mod partition;
pub mod searcher;
pub mod worker;

// Re-export key types for convenience
pub use claim::ClaimCell;
pub use crack::{crack, salt_of};
pub use partition::partition;
pub use searcher::{SearchOutcome, Searcher};
pub use worker::WorkerReport;
