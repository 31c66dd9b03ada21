// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the benchmark module: the round loop that plants and
// recovers random dates, its statistics, the thread sweep and the final
// report.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: metrics, runner, sweep, report

pub mod metrics;
pub mod report;
pub mod runner;
pub mod sweep;

// Re-export key benchmark types and functions
pub use metrics::{RoundMetrics, RoundOutcome, SessionMetrics};
pub use report::SessionReport;
pub use runner::{BenchmarkConfig, BenchmarkRunner};
pub use sweep::{run_sweep, save_csv, write_csv, SweepRow};

// Changelog:
// - v1.1.0 (2025-07-06): Added sweep and report submodules.
// - v1.0.0 (2025-07-02): Round-based benchmark with metrics and runner.
