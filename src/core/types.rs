// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the command-line arguments and the small enums shared by
// the search engine, the benchmark runner and main.rs.
//
// Tree Location:
// - src/core/types.rs (command-line arguments and shared enums)
// - Depends on: clap, serde

use crate::core::oracle::Salt;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

/// Upper bound on worker threads accepted from the command line
pub const MAX_THREADS: usize = 999;

/// Hash scheme the targets are produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Traditional DES crypt(3)
    Des,
    /// Salt + hex SHA-256(salt || date)
    Sha256,
}

/// How one round's search is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Single thread, no worker pool
    Sequential,
    /// Static partition across the worker pool with early stop
    Parallel,
}

/// Command-line arguments for datecrack
#[derive(Parser, Debug)]
#[command(
    name = "datecrack",
    version,
    about = "Parallel brute-force recovery of DDMMYYYY dates from salted hashes",
    long_about = "datecrack regenerates every DDMMYYYY string (day 00-31, month 00-12, year 0000-2025)\n\
                  and compares its salted hash against a target.\n\n\
                  BENCHMARK (default): plants a random date each round, searches for it and reports\n\
                  throughput and correctness over all rounds.\n\
                  CRACK: recovers the date behind a single hash given with --hash.\n\
                  SWEEP: times the engine across several thread counts and writes CSV.\n\n\
                  Examples:\n\
                    Benchmark: datecrack --threads 8 --rounds 100\n\
                    Crack:     datecrack --hash ABxxxxxxxxxxx --threads 8\n\
                    Sweep:     datecrack --sweep 1,2,4,8 --rounds 20 --csv results.csv"
)]
pub struct Args {
    /// Number of worker threads (prompted for when omitted on a terminal)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Benchmark rounds (one planted target each)
    #[arg(short, long, default_value = "500", value_name = "COUNT")]
    pub rounds: u32,

    /// Search engine variant
    #[arg(long, value_enum, default_value = "parallel")]
    pub mode: SearchMode,

    /// Hash scheme
    #[arg(long, value_enum, default_value = "des")]
    pub algo: Algorithm,

    /// Two-character salt for planted targets
    #[arg(long, default_value = "AB", value_name = "XX")]
    pub salt: String,

    /// Recover the date behind this hash instead of benchmarking
    #[arg(long, value_name = "HASH", conflicts_with = "sweep")]
    pub hash: Option<String>,

    /// Comma-separated thread counts to time (e.g. 1,2,4,8)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub sweep: Option<Vec<usize>>,

    /// Write sweep results to this CSV file instead of stdout
    #[arg(long, value_name = "PATH", requires = "sweep")]
    pub csv: Option<PathBuf>,

    /// Print the session report as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Seconds between progress log lines
    #[arg(long, default_value = "5", value_name = "SECONDS")]
    pub report_interval: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if let Some(threads) = self.threads {
            validate_thread_count(threads)?;
        }

        if self.rounds == 0 {
            return Err("--rounds must be at least 1".to_string());
        }

        if self.hash.is_none() {
            Salt::new(&self.salt).map_err(|e| e.to_string())?;
        }

        if let Some(hash) = &self.hash {
            Salt::from_hash(hash).map_err(|e| e.to_string())?;
        }

        if let Some(sweep) = &self.sweep {
            if sweep.is_empty() {
                return Err("--sweep needs at least one thread count".to_string());
            }
            for &threads in sweep {
                validate_thread_count(threads)?;
            }
        }

        if self.report_interval == 0 {
            return Err("--report-interval must be at least 1 second".to_string());
        }

        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(format!("Unknown log level: {}", self.log_level));
        }

        Ok(())
    }
}

pub fn validate_thread_count(threads: usize) -> Result<(), String> {
    if threads == 0 || threads > MAX_THREADS {
        return Err(crate::error::Error::InvalidThreadCount {
            requested: threads,
            max: MAX_THREADS,
        }
        .to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("datecrack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.threads, None);
        assert_eq!(args.rounds, 500);
        assert_eq!(args.mode, SearchMode::Parallel);
        assert_eq!(args.algo, Algorithm::Des);
        assert_eq!(args.salt, "AB");
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_thread_bounds() {
        assert!(parse(&["--threads", "0"]).validate().is_err());
        assert!(parse(&["--threads", "1000"]).validate().is_err());
        assert!(parse(&["--threads", "999"]).validate().is_ok());
    }

    #[test]
    fn test_sweep_list() {
        let args = parse(&["--sweep", "1,2,4"]);
        assert_eq!(args.sweep, Some(vec![1, 2, 4]));
        assert!(args.validate().is_ok());
        assert!(parse(&["--sweep", "1,0"]).validate().is_err());
    }

    #[test]
    fn test_bad_salt_and_level() {
        assert!(parse(&["--salt", "A!"]).validate().is_err());
        assert!(parse(&["--log-level", "loud"]).validate().is_err());
    }

    #[test]
    fn test_hash_conflicts_with_sweep() {
        let res = Args::try_parse_from(["datecrack", "--hash", "ABcdefghijklm", "--sweep", "1"]);
        assert!(res.is_err());
    }
}

// Changelog:
// - v1.1.0 (2025-07-06): Added --sweep/--csv and --json.
// - v1.0.0 (2025-07-02): Initial search arguments.
//   - Threads are optional; main.rs prompts or falls back to num_cpus.
