// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/claim.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the claim cell shared by all workers of one round: a
// stop flag polled on the hot path plus the first matching candidate.
//
// Tree Location:
// - src/search/claim.rs (first-writer-wins result cell)
// - Depends on: std

use crate::core::candidate::Candidate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Claimed {
    candidate: Option<Candidate>,
    worker_id: Option<usize>,
}

/// First-writer-wins result of a round.
///
/// Once `try_claim` succeeds the flag stays set and the recorded candidate is
/// never overwritten until `reset`.
#[derive(Debug, Default)]
pub struct ClaimCell {
    stopped: AtomicBool,
    /// Set when a worker fails; stops the round without a candidate
    aborted: AtomicBool,
    claimed: Mutex<Claimed>,
}

impl ClaimCell {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Claimed> {
        // A poisoned lock still holds a whole Candidate; writes are a single assignment.
        self.claimed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hot-path poll
    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Hot-path poll covering both a claim and an abort
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stopped.load(Ordering::Relaxed) || self.aborted.load(Ordering::Relaxed)
    }

    /// Stop every worker of the round without recording a result
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::Release);
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }

    /// Record `candidate` as the round's result if nobody has yet.
    pub fn try_claim(&self, candidate: Candidate, worker_id: usize) -> bool {
        let mut claimed = self.lock();
        if self.stopped.load(Ordering::Relaxed) {
            return false;
        }
        claimed.candidate = Some(candidate);
        claimed.worker_id = Some(worker_id);
        self.stopped.store(true, Ordering::Release);
        true
    }

    /// Clear for the next round. Called by the orchestrating thread before
    /// workers are spawned.
    pub fn reset(&self) {
        let mut claimed = self.lock();
        *claimed = Claimed::default();
        self.stopped.store(false, Ordering::Release);
        self.aborted.store(false, Ordering::Release);
    }

    pub fn found(&self) -> Option<Candidate> {
        let claimed = self.lock();
        let stopped = self.stopped.load(Ordering::Acquire);
        assert_eq!(
            stopped,
            claimed.candidate.is_some(),
            "claim cell out of sync: stop flag {} with candidate {:?}",
            stopped,
            claimed.candidate
        );
        claimed.candidate
    }

    /// Worker that won the claim, if any
    pub fn winner(&self) -> Option<usize> {
        self.lock().worker_id
    }
}


// Changelog:
// - v1.1.0 (2025-07-08): Abort flag so a failing worker stops its siblings.
// - v1.0.1 (2025-07-05): Track the winning worker for per-round logs.
// - v1.0.0 (2025-07-03): Initial claim cell replacing the raw found flag.
