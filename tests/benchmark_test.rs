// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/benchmark_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains end-to-end tests for the benchmark loop, the session
// report and the thread sweep CSV output.
//
// Tree Location:
// - tests/benchmark_test.rs (benchmark tests)
// - Depends on: datecrack, rand, serde_json, tempfile

use datecrack::benchmark::sweep::CSV_HEADER;
use datecrack::benchmark::{run_sweep, save_csv};
use datecrack::core::types::SearchMode;
use datecrack::{BenchmarkConfig, BenchmarkRunner, Salt, SaltedSha256, SessionReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

#[test]
fn test_session_all_rounds_correct() {
    let mut config = BenchmarkConfig::new(3, 4, SearchMode::Parallel);
    config.salt = Salt::new("Zq").unwrap();
    let mut runner = BenchmarkRunner::new(SaltedSha256, config.clone());
    let session = runner.run(&mut StdRng::seed_from_u64(2025)).unwrap();

    assert_eq!(session.rounds, 4);
    assert_eq!(session.correct, 4);
    assert_eq!(session.failures(), 0);
    assert!(session.throughput() > 0.0);
    assert!(session.fastest_round <= session.slowest_round);

    let report = SessionReport::new("salted-sha256", &config, &session);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["rounds"], 4);
    assert_eq!(json["salt"], "Zq");
    assert_eq!(json["all_correct"], true);
    assert_eq!(json["interrupted"], false);
    assert!(report.render().contains("4/4 correct"));
}

#[test]
fn test_same_seed_plants_same_dates() {
    let run = |seed| {
        let config = BenchmarkConfig::new(2, 2, SearchMode::Parallel);
        let mut runner = BenchmarkRunner::new(SaltedSha256, config);
        runner.run(&mut StdRng::seed_from_u64(seed)).unwrap().last_found
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn test_sweep_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.csv");

    let base = BenchmarkConfig::new(1, 1, SearchMode::Parallel);
    let rows = run_sweep(&SaltedSha256, &base, &[4, 2, 2], &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].version, "Sequential");
    assert_eq!(rows[1].threads, 2);
    assert_eq!(rows[2].threads, 4);
    assert!((rows[1].scalability - 1.0).abs() < 1e-9);

    save_csv(&rows, &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], CSV_HEADER);
    assert!(lines[1].starts_with("Sequential,1,"));
    assert!(lines[2].starts_with("ParallelNOWAIT,2,"));
    assert!(lines[3].starts_with("ParallelNOWAIT,4,"));
}

#[test]
fn test_save_csv_reports_bad_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("sweep.csv");
    let err = save_csv(&[], &path).unwrap_err();
    assert!(matches!(err, datecrack::Error::Io { .. }));
}
