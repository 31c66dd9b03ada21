// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the benchmark loop: plant a random target, search for
// it, verify the result and fold the round into the session totals, for the
// configured number of rounds.

use crate::benchmark::metrics::{RoundMetrics, RoundOutcome, SessionMetrics};
use crate::core::candidate::SearchSpace;
use crate::core::oracle::{HashOracle, Salt};
use crate::core::target::TargetGenerator;
use crate::core::types::SearchMode;
use crate::search::Searcher;
use crate::utils::format::FormatUtils;
use crate::Result;
use log::{debug, info, warn};
use rand::Rng;
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "datecrack::runner";

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub thread_count: usize,
    pub rounds: u32,
    pub mode: SearchMode,
    pub salt: Salt,
    pub report_interval: Duration,
    pub space: SearchSpace,
}

impl BenchmarkConfig {
    pub fn new(thread_count: usize, rounds: u32, mode: SearchMode) -> Self {
        Self {
            thread_count: thread_count.max(1),
            rounds,
            mode,
            salt: Salt::DEFAULT,
            report_interval: Duration::from_secs(5),
            space: SearchSpace::FULL,
        }
    }

    /// Threads actually used per round
    pub fn effective_threads(&self) -> usize {
        match self.mode {
            SearchMode::Sequential => 1,
            SearchMode::Parallel => self.thread_count,
        }
    }
}

/// Main benchmark runner
pub struct BenchmarkRunner<O: HashOracle> {
    config: BenchmarkConfig,
    searcher: Searcher<O>,
    progress: Arc<AtomicU64>,
    interrupt: Arc<AtomicBool>,
}

impl<O: HashOracle> BenchmarkRunner<O> {
    pub fn new(oracle: O, config: BenchmarkConfig) -> Self {
        let progress = Arc::new(AtomicU64::new(0));
        let searcher = Searcher::new(oracle, config.salt, config.effective_threads())
            .with_space(config.space)
            .with_progress(Arc::clone(&progress));
        Self {
            config,
            searcher,
            progress,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Setting the returned flag ends the session before the next round
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    /// Run every configured round. `rng` is owned by the caller, seeded once,
    /// and only used here between searches.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<SessionMetrics> {
        info!(target: LOG_TARGET,
            "🧪 Starting {} rounds with {} thread(s), mode: {:?}, hash: {}",
            self.config.rounds,
            self.config.effective_threads(),
            self.config.mode,
            self.searcher.oracle().name()
        );

        let mut session = SessionMetrics::new();
        let rounds_done = Arc::new(AtomicU64::new(0));
        let should_stop = Arc::new(AtomicBool::new(false));
        let reporter = self.spawn_reporter(Arc::clone(&rounds_done), Arc::clone(&should_stop));

        let mut result = Ok(());
        for round in 0..self.config.rounds {
            if self.interrupt.load(Ordering::Relaxed) {
                warn!(target: LOG_TARGET,
                    "🛑 Interrupted after {}/{} rounds",
                    round, self.config.rounds
                );
                session.interrupted = true;
                break;
            }

            match self.run_round(round, rng) {
                Ok(metrics) => {
                    session.record(&metrics);
                    rounds_done.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }

        should_stop.store(true, Ordering::Relaxed);
        if reporter.join().is_err() {
            debug!(target: LOG_TARGET, "Progress reporter thread failed to join");
        }
        result?;

        info!(target: LOG_TARGET,
            "✅ Session complete: {}/{} correct, {}",
            session.correct,
            session.rounds,
            FormatUtils::format_rate(session.throughput())
        );
        Ok(session)
    }

    /// One generate-search-verify cycle
    pub fn run_round<R: Rng>(&mut self, round: u32, rng: &mut R) -> Result<RoundMetrics> {
        let start = Instant::now();
        let planted = TargetGenerator::new(self.searcher.oracle(), self.config.salt).generate(rng)?;
        debug!(target: LOG_TARGET,
            "Round {}: planted {} -> {}",
            round, planted.candidate, planted.hash
        );

        let outcome = match self.config.mode {
            SearchMode::Sequential => self.searcher.search_sequential(&planted.hash)?,
            SearchMode::Parallel => self.searcher.search(&planted.hash)?,
        };

        let verdict = RoundOutcome::classify(planted.candidate, outcome.found);
        match verdict {
            RoundOutcome::Correct => debug!(target: LOG_TARGET,
                "Round {}: found {} (worker {:?}) after {} candidates",
                round, planted.candidate, outcome.winner, outcome.evaluated
            ),
            RoundOutcome::Mismatch { found, planted } => warn!(target: LOG_TARGET,
                "Round {}: found {} but planted {}",
                round, found, planted
            ),
            RoundOutcome::NotFound { planted } => warn!(target: LOG_TARGET,
                "Round {}: {} not found after {} candidates",
                round, planted, outcome.evaluated
            ),
        }

        Ok(RoundMetrics {
            round,
            planted: planted.candidate,
            found: outcome.found,
            outcome: verdict,
            evaluated: outcome.evaluated,
            elapsed: start.elapsed(),
        })
    }

    fn spawn_reporter(
        &self,
        rounds_done: Arc<AtomicU64>,
        should_stop: Arc<AtomicBool>,
    ) -> thread::JoinHandle<()> {
        let progress = Arc::clone(&self.progress);
        let report_interval = self.config.report_interval;
        let total_rounds = self.config.rounds;

        thread::spawn(move || {
            let mut last_count = progress.load(Ordering::Relaxed);
            let mut last_time = Instant::now();
            while !should_stop.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(100));
                if last_time.elapsed() < report_interval {
                    continue;
                }
                let now = Instant::now();
                let count = progress.load(Ordering::Relaxed);
                let secs = now.duration_since(last_time).as_secs_f64();
                info!(target: LOG_TARGET,
                    "📊 Progress: round {}/{} | {} | Total: {} candidates",
                    rounds_done.load(Ordering::Relaxed),
                    total_rounds,
                    FormatUtils::format_rate((count - last_count) as f64 / secs),
                    FormatUtils::format_number(count)
                );
                last_count = count;
                last_time = now;
            }
            debug!(target: LOG_TARGET, "Progress reporter thread stopping");
        })
    }
}


// Changelog:
// - v1.1.0 (2025-07-06): Interrupt flag and sequential mode.
// - v1.0.0 (2025-07-02): Round-based benchmark runner.
//   - Reporter thread logs periodic progress lines.
