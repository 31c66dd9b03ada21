// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/report.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file turns a finished session into the end-of-run report, either as
// the console summary or as JSON for scripts.
//
// Tree Location:
// - src/benchmark/report.rs (session report)
// - Depends on: serde, serde_json, sysinfo

use crate::benchmark::metrics::SessionMetrics;
use crate::benchmark::runner::BenchmarkConfig;
use crate::core::candidate::Candidate;
use crate::core::types::SearchMode;
use crate::utils::format::FormatUtils;
use crate::Result;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub algorithm: String,
    pub mode: SearchMode,
    pub threads: usize,
    pub salt: String,
    pub host_cpu: String,
    pub rounds: u32,
    pub total_candidates: u64,
    pub elapsed_secs: f64,
    pub avg_round_secs: f64,
    pub throughput: f64,
    pub correct: u32,
    pub mismatched: u32,
    pub not_found: u32,
    pub all_correct: bool,
    pub interrupted: bool,
    pub last_found: Option<Candidate>,
}

impl SessionReport {
    pub fn new(algorithm: &str, config: &BenchmarkConfig, session: &SessionMetrics) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            mode: config.mode,
            threads: config.effective_threads(),
            salt: config.salt.to_string(),
            host_cpu: host_cpu(),
            rounds: session.rounds,
            total_candidates: session.total_candidates,
            elapsed_secs: session.total_elapsed.as_secs_f64(),
            avg_round_secs: session.avg_round_time().as_secs_f64(),
            throughput: session.throughput(),
            correct: session.correct,
            mismatched: session.mismatched,
            not_found: session.not_found,
            all_correct: session.all_correct(),
            interrupted: session.interrupted,
            last_found: session.last_found,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Console summary
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "📈 Benchmark Results:");
        let _ = writeln!(out, "├─ Hash: {} (salt {})", self.algorithm, self.salt);
        let _ = writeln!(out, "├─ Mode: {:?}, {} thread(s)", self.mode, self.threads);
        let _ = writeln!(out, "├─ CPU: {}", self.host_cpu);
        let interrupted = if self.interrupted { " (interrupted)" } else { "" };
        let _ = writeln!(out, "├─ Rounds: {}{}", self.rounds, interrupted);
        let candidates = FormatUtils::format_number(self.total_candidates);
        let _ = writeln!(out, "├─ Candidates: {}", candidates);
        let _ = writeln!(out, "├─ Total time: {:.3}s", self.elapsed_secs);
        let _ = writeln!(out, "├─ Avg round: {:.3}s", self.avg_round_secs);
        let _ = writeln!(out, "├─ Throughput: {}", FormatUtils::format_rate(self.throughput));
        if let Some(found) = self.last_found {
            let _ = writeln!(out, "├─ Last found: {} ({})", found, found.to_date_string());
        }
        let _ = writeln!(
            out,
            "└─ Verified: {}/{} correct, {} mismatched, {} not found {}",
            self.correct,
            self.rounds,
            self.mismatched,
            self.not_found,
            if self.all_correct { "✅" } else { "❌" }
        );
        out
    }
}

/// Brand string of the first CPU, or "unknown"
pub fn host_cpu() -> String {
    let mut sys = sysinfo::System::new();
    sys.refresh_cpu_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
