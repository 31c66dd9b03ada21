// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/metrics.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements round and session statistics for the benchmark loop.
// SessionMetrics is owned by the orchestrating thread only; workers never
// touch it.
//
// Tree Location:
// - src/benchmark/metrics.rs (round/session statistics)
// - Depends on: serde

use crate::core::candidate::Candidate;
use serde::Serialize;
use std::time::Duration;

/// How a round ended. Mismatch and NotFound are soft failures: counted, but
/// the session carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundOutcome {
    Correct,
    Mismatch { found: Candidate, planted: Candidate },
    NotFound { planted: Candidate },
}

impl RoundOutcome {
    pub fn classify(planted: Candidate, found: Option<Candidate>) -> Self {
        match found {
            Some(found) if found == planted => RoundOutcome::Correct,
            Some(found) => RoundOutcome::Mismatch { found, planted },
            None => RoundOutcome::NotFound { planted },
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, RoundOutcome::Correct)
    }
}

#[derive(Debug, Clone)]
pub struct RoundMetrics {
    pub round: u32,
    pub planted: Candidate,
    pub found: Option<Candidate>,
    pub outcome: RoundOutcome,
    /// Candidates hashed this round, summed over workers
    pub evaluated: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    pub rounds: u32,
    pub total_candidates: u64,
    pub total_elapsed: Duration,
    pub correct: u32,
    pub mismatched: u32,
    pub not_found: u32,
    pub last_found: Option<Candidate>,
    pub fastest_round: Option<Duration>,
    pub slowest_round: Option<Duration>,
    /// Session stopped early on request
    pub interrupted: bool,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished round into the session totals
    pub fn record(&mut self, round: &RoundMetrics) {
        self.rounds += 1;
        self.total_candidates += round.evaluated;
        self.total_elapsed += round.elapsed;

        match round.outcome {
            RoundOutcome::Correct => self.correct += 1,
            RoundOutcome::Mismatch { .. } => self.mismatched += 1,
            RoundOutcome::NotFound { .. } => self.not_found += 1,
        }

        if round.found.is_some() {
            self.last_found = round.found;
        }

        self.fastest_round = Some(match self.fastest_round {
            Some(fastest) => fastest.min(round.elapsed),
            None => round.elapsed,
        });
        self.slowest_round = Some(match self.slowest_round {
            Some(slowest) => slowest.max(round.elapsed),
            None => round.elapsed,
        });
    }

    /// Candidates per second over the whole session
    pub fn throughput(&self) -> f64 {
        let secs = self.total_elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total_candidates as f64 / secs
        } else {
            0.0
        }
    }

    pub fn avg_round_time(&self) -> Duration {
        if self.rounds == 0 {
            Duration::ZERO
        } else {
            self.total_elapsed / self.rounds
        }
    }

    pub fn failures(&self) -> u32 {
        self.mismatched + self.not_found
    }

    pub fn all_correct(&self) -> bool {
        self.rounds > 0 && self.correct == self.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(n: u32, planted: Candidate, found: Option<Candidate>, ms: u64) -> RoundMetrics {
        RoundMetrics {
            round: n,
            planted,
            found,
            outcome: RoundOutcome::classify(planted, found),
            evaluated: 1000,
            elapsed: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_classify() {
        let a = Candidate::encode(1, 2, 3);
        let b = Candidate::encode(4, 5, 6);
        assert_eq!(RoundOutcome::classify(a, Some(a)), RoundOutcome::Correct);
        assert_eq!(
            RoundOutcome::classify(a, Some(b)),
            RoundOutcome::Mismatch { found: b, planted: a }
        );
        assert_eq!(RoundOutcome::classify(a, None), RoundOutcome::NotFound { planted: a });
    }

    #[test]
    fn test_soft_failures_are_tallied() {
        let a = Candidate::encode(1, 2, 3);
        let b = Candidate::encode(4, 5, 6);
        let mut session = SessionMetrics::new();
        session.record(&round(0, a, Some(a), 200));
        session.record(&round(1, a, Some(b), 100));
        session.record(&round(2, b, None, 300));

        assert_eq!(session.rounds, 3);
        assert_eq!(session.correct, 1);
        assert_eq!(session.mismatched, 1);
        assert_eq!(session.not_found, 1);
        assert_eq!(session.failures(), 2);
        assert!(!session.all_correct());
        assert_eq!(session.last_found, Some(b));
        assert_eq!(session.total_candidates, 3000);
        assert_eq!(session.fastest_round, Some(Duration::from_millis(100)));
        assert_eq!(session.slowest_round, Some(Duration::from_millis(300)));
        assert_eq!(session.avg_round_time(), Duration::from_millis(200));
    }

    #[test]
    fn test_throughput() {
        let a = Candidate::encode(1, 2, 3);
        let mut session = SessionMetrics::new();
        session.record(&round(0, a, Some(a), 500));
        session.record(&round(1, a, Some(a), 500));
        assert!((session.throughput() - 2000.0).abs() < 1e-6);
        assert!(session.all_correct());
    }

    #[test]
    fn test_empty_session() {
        let session = SessionMetrics::new();
        assert_eq!(session.throughput(), 0.0);
        assert_eq!(session.avg_round_time(), Duration::ZERO);
        assert!(!session.all_correct());
    }
}

// Changelog:
// - v1.0.1 (2025-07-05): Track fastest/slowest rounds.
// - v1.0.0 (2025-07-02): Round and session tallies.
