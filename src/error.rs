// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/error.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the library error type. Round-level soft failures
// (not found, mismatch) are not errors; see benchmark::metrics::RoundOutcome.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid salt {salt:?}: expected 2 characters from [./0-9A-Za-z]")]
    InvalidSalt { salt: String },

    #[error("Invalid thread count {requested}: must be between 1 and {max}")]
    InvalidThreadCount { requested: usize, max: usize },

    #[error("Invalid hash {hash:?}: {reason}")]
    InvalidHash { hash: String, reason: &'static str },

    #[error("Hash oracle failed: {0}")]
    Hash(String),

    #[error("Search worker {0} panicked")]
    WorkerPanicked(usize),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO operation failed on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

