// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/sweep.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file times the search engine across several thread counts against a
// sequential baseline and writes the comparison as CSV for plotting.
//
// Tree Location:
// - src/benchmark/sweep.rs (thread-scaling sweep)
// - Depends on: rand, log

use crate::benchmark::runner::{BenchmarkConfig, BenchmarkRunner};
use crate::core::oracle::HashOracle;
use crate::core::types::SearchMode;
use crate::error::Error;
use crate::Result;
use log::info;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const LOG_TARGET: &str = "datecrack::sweep";

pub const CSV_HEADER: &str = "Version,Threads,AvgTime(s),Speedup,Efficiency(%),Scalability";

/// One CSV line of a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub version: &'static str,
    pub threads: usize,
    pub avg_time: f64,
    pub speedup: f64,
    pub efficiency: f64,
    pub scalability: f64,
}

impl SweepRow {
    fn version_for(mode: SearchMode) -> &'static str {
        match mode {
            SearchMode::Sequential => "Sequential",
            SearchMode::Parallel => "ParallelNOWAIT",
        }
    }
}

/// Derive speedup/efficiency/scalability from average round times.
///
/// `parallel` holds (threads, avg seconds) in sweep order. Scalability is
/// relative to the smallest swept thread count.
pub fn build_rows(sequential_avg: f64, parallel: &[(usize, f64)]) -> Vec<SweepRow> {
    let ratio = |num: f64, den: f64| if den > 0.0 { num / den } else { 0.0 };
    let base_avg = parallel
        .iter()
        .min_by_key(|(threads, _)| *threads)
        .map(|(_, avg)| *avg)
        .unwrap_or(sequential_avg);

    let mut rows = vec![SweepRow {
        version: SweepRow::version_for(SearchMode::Sequential),
        threads: 1,
        avg_time: sequential_avg,
        speedup: 1.0,
        efficiency: 100.0,
        scalability: 1.0,
    }];

    for &(threads, avg) in parallel {
        let speedup = ratio(sequential_avg, avg);
        rows.push(SweepRow {
            version: SweepRow::version_for(SearchMode::Parallel),
            threads,
            avg_time: avg,
            speedup,
            efficiency: speedup / threads.max(1) as f64 * 100.0,
            scalability: ratio(base_avg, avg),
        });
    }
    rows
}

/// Run the sequential baseline and then one parallel session per thread
/// count, each for `base.rounds` rounds.
pub fn run_sweep<O, R>(
    oracle: &O,
    base: &BenchmarkConfig,
    thread_counts: &[usize],
    rng: &mut R,
) -> Result<Vec<SweepRow>>
where
    O: HashOracle + Clone,
    R: Rng,
{
    let mut counts: Vec<usize> = thread_counts.iter().map(|&t| t.max(1)).collect();
    counts.sort_unstable();
    counts.dedup();

    let session_avg = |config: BenchmarkConfig, rng: &mut R| -> Result<f64> {
        let mut runner = BenchmarkRunner::new(oracle.clone(), config);
        let session = runner.run(rng)?;
        Ok(session.avg_round_time().as_secs_f64())
    };

    let sequential = BenchmarkConfig {
        mode: SearchMode::Sequential,
        ..base.clone()
    };
    let sequential_avg = session_avg(sequential, rng)?;
    info!(target: LOG_TARGET, "📏 Sequential baseline: {:.3}s per round", sequential_avg);

    let mut parallel = Vec::with_capacity(counts.len());
    for threads in counts {
        let config = BenchmarkConfig {
            mode: SearchMode::Parallel,
            thread_count: threads,
            ..base.clone()
        };
        let avg = session_avg(config, rng)?;
        info!(target: LOG_TARGET, "📏 {} threads: {:.3}s per round", threads, avg);
        parallel.push((threads, avg));
    }

    Ok(build_rows(sequential_avg, &parallel))
}

pub fn write_csv<W: Write>(rows: &[SweepRow], mut out: W) -> std::io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for row in rows {
        writeln!(
            out,
            "{},{},{:.6},{:.4},{:.2},{:.4}",
            row.version, row.threads, row.avg_time, row.speedup, row.efficiency, row.scalability
        )?;
    }
    out.flush()
}

pub fn save_csv(rows: &[SweepRow], path: &Path) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    write_csv(rows, BufWriter::new(file)).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rows() {
        let rows = build_rows(8.0, &[(2, 4.0), (4, 2.5)]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].version, "Sequential");
        assert_eq!(rows[1].version, "ParallelNOWAIT");
        assert!((rows[1].speedup - 2.0).abs() < 1e-9);
        assert!((rows[1].efficiency - 100.0).abs() < 1e-9);
        assert!((rows[1].scalability - 1.0).abs() < 1e-9);
        assert!((rows[2].speedup - 3.2).abs() < 1e-9);
        assert!((rows[2].efficiency - 80.0).abs() < 1e-9);
        assert!((rows[2].scalability - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_zero_threads_stay_finite() {
        let rows = build_rows(2.0, &[(0, 1.0)]);
        assert!(rows[1].efficiency.is_finite());
        assert!((rows[1].efficiency - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_sweep_clamps_thread_counts() {
        use crate::core::candidate::SearchSpace;
        use crate::core::oracle::SaltedSha256;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut base = BenchmarkConfig::new(1, 1, SearchMode::Parallel);
        base.space = SearchSpace::new(3, 3, 50);
        let rows = run_sweep(&SaltedSha256, &base, &[0, 1], &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].threads, 1);
        assert!(rows.iter().all(|r| r.efficiency.is_finite()));
    }

    #[test]
    fn test_write_csv() {
        let rows = build_rows(1.0, &[(2, 0.5)]);
        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "Sequential,1,1.000000,1.0000,100.00,1.0000");
        assert_eq!(lines[2], "ParallelNOWAIT,2,0.500000,2.0000,100.00,1.0000");
    }
}
