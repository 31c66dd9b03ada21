// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/searcher.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the search orchestrator. One call to `search` is one
// round: reset the claim cell, split the space, run a scoped worker per block
// and collect the claimed candidate with the per-worker counters.
//
// Tree Location:
// - src/search/searcher.rs (search orchestrator)
// - Depends on: crossbeam, log

use crate::core::candidate::{Candidate, SearchSpace};
use crate::core::oracle::{HashOracle, Salt};
use crate::error::Error;
use crate::search::claim::ClaimCell;
use crate::search::partition::partition;
use crate::search::worker::{run_worker, WorkerContext, WorkerReport};
use crate::Result;
use log::debug;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "datecrack::search";

/// Result of one round's search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub found: Option<Candidate>,
    pub winner: Option<usize>,
    /// Sum of `evaluated` over all workers
    pub evaluated: u64,
    pub workers: Vec<WorkerReport>,
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// Candidates per second for this round
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.evaluated as f64 / secs
        } else {
            0.0
        }
    }
}

pub struct Searcher<O: HashOracle> {
    oracle: O,
    salt: Salt,
    workers: usize,
    space: SearchSpace,
    claim: ClaimCell,
    progress: Option<Arc<AtomicU64>>,
}

impl<O: HashOracle> Searcher<O> {
    /// `workers` has no upper bound here; zero is treated as one.
    pub fn new(oracle: O, salt: Salt, workers: usize) -> Self {
        Self {
            oracle,
            salt,
            workers: workers.max(1),
            space: SearchSpace::FULL,
            claim: ClaimCell::new(),
            progress: None,
        }
    }

    pub fn with_space(mut self, space: SearchSpace) -> Self {
        self.space = space;
        self
    }

    /// Workers add their hashed-candidate counts to `counter` while running
    pub fn with_progress(mut self, counter: Arc<AtomicU64>) -> Self {
        self.progress = Some(counter);
        self
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    fn context<'a>(&'a self, target: &'a str) -> WorkerContext<'a, O> {
        WorkerContext {
            oracle: &self.oracle,
            salt: &self.salt,
            space: &self.space,
            target,
            claim: &self.claim,
            progress: self.progress.as_deref(),
        }
    }

    fn finish(&self, workers: Vec<WorkerReport>, start: Instant) -> SearchOutcome {
        let evaluated = workers.iter().map(|w| w.evaluated).sum();
        let outcome = SearchOutcome {
            found: self.claim.found(),
            winner: self.claim.winner(),
            evaluated,
            workers,
            elapsed: start.elapsed(),
        };
        debug!(target: LOG_TARGET,
            "Round finished: found={:?}, evaluated={}, elapsed={:.3}s",
            outcome.found,
            outcome.evaluated,
            outcome.elapsed.as_secs_f64()
        );
        outcome
    }

    /// Search the space in parallel for `target_hash`.
    ///
    /// Not finding the target is a normal outcome (`found == None`), not an
    /// error. Errors come only from the hash oracle or a panicking worker.
    pub fn search(&mut self, target_hash: &str) -> Result<SearchOutcome> {
        self.claim.reset();
        let ranges = partition(self.space.len(), self.workers);
        let start = Instant::now();

        let ctx = self.context(target_hash);
        let ctx = &ctx;
        let reports = crossbeam::scope(|scope| {
            let handles: Vec<_> = ranges
                .into_iter()
                .enumerate()
                .map(|(worker_id, range)| scope.spawn(move |_| run_worker(worker_id, range, ctx)))
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(worker_id, handle)| {
                    handle
                        .join()
                        .map_err(|_| Error::WorkerPanicked(worker_id))
                        .and_then(|report| report)
                })
                .collect::<Result<Vec<_>>>()
        })
        .map_err(|_| Error::WorkerPanicked(usize::MAX))??;

        Ok(self.finish(reports, start))
    }

    /// Single-threaded reference search over the whole space, with the same
    /// early stop and counting rules as `search`.
    pub fn search_sequential(&mut self, target_hash: &str) -> Result<SearchOutcome> {
        self.claim.reset();
        let start = Instant::now();
        let report = run_worker(0, 0..self.space.len(), &self.context(target_hash))?;
        Ok(self.finish(vec![report], start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::oracle::{hash_once, SaltedSha256};
    use std::sync::atomic::Ordering;

    fn small() -> SearchSpace {
        SearchSpace::new(4, 3, 99)
    }

    #[test]
    fn test_parallel_finds_planted() {
        let planted = Candidate::encode(3, 2, 57);
        let target = hash_once(&SaltedSha256, &planted, &Salt::DEFAULT).unwrap();
        let mut searcher = Searcher::new(SaltedSha256, Salt::DEFAULT, 4).with_space(small());
        let outcome = searcher.search(&target).unwrap();
        assert_eq!(outcome.found, Some(planted));
        assert!(outcome.winner.is_some());
        assert!(outcome.evaluated >= 1 && outcome.evaluated <= small().len());
    }

    #[test]
    fn test_sequential_stops_right_after_match() {
        let space = small();
        let planted = space.candidate_at(123);
        let target = hash_once(&SaltedSha256, &planted, &Salt::DEFAULT).unwrap();
        let mut searcher = Searcher::new(SaltedSha256, Salt::DEFAULT, 1).with_space(space);
        let outcome = searcher.search_sequential(&target).unwrap();
        assert_eq!(outcome.found, Some(planted));
        assert_eq!(outcome.evaluated, 124);
        assert_eq!(outcome.workers.len(), 1);
    }

    #[test]
    fn test_not_found_exhausts_space() {
        let mut searcher = Searcher::new(SaltedSha256, Salt::DEFAULT, 3).with_space(small());
        let outcome = searcher.search("ABnot-a-real-hash").unwrap();
        assert_eq!(outcome.found, None);
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.evaluated, small().len());
        for w in &outcome.workers {
            assert_eq!(w.evaluated, w.partition_len);
        }
    }

    #[test]
    fn test_progress_counter_matches_evaluated() {
        let counter = Arc::new(AtomicU64::new(0));
        let mut searcher = Searcher::new(SaltedSha256, Salt::DEFAULT, 2)
            .with_space(small())
            .with_progress(Arc::clone(&counter));
        let outcome = searcher.search("ABmissing").unwrap();
        assert_eq!(counter.load(Ordering::Relaxed), outcome.evaluated);
    }

    /// Panics on the first candidate of the space
    struct PanickingOracle;

    impl HashOracle for PanickingOracle {
        type Scratch = String;

        fn name(&self) -> &'static str {
            "panicking"
        }

        fn hash<'s>(
            &self,
            candidate: &Candidate,
            _salt: &Salt,
            scratch: &'s mut String,
        ) -> Result<&'s str> {
            if candidate.as_str() == "00000000" {
                panic!("oracle blew up");
            }
            scratch.clear();
            scratch.push_str(candidate.as_str());
            Ok(scratch.as_str())
        }

        fn hash_len(&self) -> usize {
            8
        }
    }

    #[test]
    fn test_worker_panic_surfaces_as_error() {
        let mut searcher = Searcher::new(PanickingOracle, Salt::DEFAULT, 3).with_space(small());
        let err = searcher.search("never").unwrap_err();
        assert!(matches!(err, Error::WorkerPanicked(0)), "got {:?}", err);
    }

    #[test]
    fn test_reset_between_rounds() {
        let space = small();
        let mut searcher = Searcher::new(SaltedSha256, Salt::DEFAULT, 2).with_space(space);
        let planted = space.candidate_at(10);
        let target = hash_once(&SaltedSha256, &planted, &Salt::DEFAULT).unwrap();
        assert_eq!(searcher.search(&target).unwrap().found, Some(planted));

        let outcome = searcher.search("ABnothing").unwrap();
        assert_eq!(outcome.found, None);
        assert_eq!(outcome.evaluated, space.len());
    }
}

// Changelog:
// - v1.1.0 (2025-07-06): Added search_sequential and the progress counter.
// - v1.0.0 (2025-07-03): Scoped crossbeam workers over a static partition.
