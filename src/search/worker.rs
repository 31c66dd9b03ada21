// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/worker.rs
// Version: 1.0.3
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains the per-worker search loop: walk one partition of the
// flattened space, hash each candidate with a private scratch context and
// claim the first full match.

use crate::core::candidate::SearchSpace;
use crate::core::oracle::{hashes_match, HashOracle, Salt};
use crate::search::claim::ClaimCell;
use crate::Result;
use log::{debug, info, warn};
use serde::Serialize;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

const LOG_TARGET: &str = "datecrack::worker";

/// Candidates hashed between flushes to the shared progress counter
pub const PROGRESS_FLUSH: u64 = 4096;

/// Work done by one worker in one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub partition_len: u64,
    /// Candidates actually hashed; below `partition_len` when the worker saw
    /// the stop flag
    pub evaluated: u64,
}

/// Read-only state shared by every worker of a round
pub(crate) struct WorkerContext<'a, O: HashOracle> {
    pub oracle: &'a O,
    pub salt: &'a Salt,
    pub space: &'a SearchSpace,
    pub target: &'a str,
    pub claim: &'a ClaimCell,
    pub progress: Option<&'a AtomicU64>,
}

impl<O: HashOracle> WorkerContext<'_, O> {
    fn flush(&self, count: u64) {
        if let Some(progress) = self.progress {
            progress.fetch_add(count, Ordering::Relaxed);
        }
    }
}

pub(crate) fn run_worker<O: HashOracle>(
    worker_id: usize,
    range: Range<u64>,
    ctx: &WorkerContext<'_, O>,
) -> Result<WorkerReport> {
    let partition_len = range.end - range.start;
    let mut scratch = O::Scratch::default();
    let mut evaluated = 0u64;
    let mut unflushed = 0u64;

    for index in range {
        // No cancellation point: a set flag skips the rest of this partition
        // while siblings finish whatever they are hashing.
        if ctx.claim.should_stop() {
            debug!(target: LOG_TARGET,
                "Worker {}: stop flag seen after {}/{} candidates",
                worker_id, evaluated, partition_len
            );
            break;
        }

        let candidate = ctx.space.candidate_at(index);
        let hash = match ctx.oracle.hash(&candidate, ctx.salt, &mut scratch) {
            Ok(hash) => hash,
            Err(e) => {
                warn!(target: LOG_TARGET,
                    "Worker {}: hashing {} failed, aborting round: {}",
                    worker_id, candidate, e
                );
                ctx.claim.abort();
                ctx.flush(unflushed);
                return Err(e);
            }
        };
        evaluated += 1;
        unflushed += 1;

        if hashes_match(hash, ctx.target) {
            if ctx.claim.try_claim(candidate, worker_id) {
                info!(target: LOG_TARGET, "🎯 Worker {} matched {}", worker_id, candidate);
            } else {
                debug!(target: LOG_TARGET,
                    "Worker {}: {} also matches but the round is already claimed",
                    worker_id, candidate
                );
            }
        }

        if unflushed == PROGRESS_FLUSH {
            ctx.flush(unflushed);
            unflushed = 0;
        }
    }

    ctx.flush(unflushed);

    Ok(WorkerReport {
        worker_id,
        partition_len,
        evaluated,
    })
}

// Changelog:
// - v1.0.3 (2025-07-08): A hash error aborts the round for every worker.
// - v1.0.2 (2025-07-06): Progress counter flushed every 4096 candidates.
// - v1.0.1 (2025-07-04): Break out of the partition once the flag is set.
// - v1.0.0 (2025-07-02): Initial worker loop over a static partition.
