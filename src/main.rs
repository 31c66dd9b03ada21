// Date Cracker - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Modes: benchmark (default), --hash <HASH> crack, --sweep <LIST> thread sweep

use anyhow::Context;
use clap::Parser;
use datecrack::{
    benchmark::{run_sweep, save_csv, write_csv, BenchmarkConfig, BenchmarkRunner, SessionReport},
    core::types::{Algorithm, Args, SearchMode, MAX_THREADS},
    core::{HashOracle, Salt, SaltedSha256, UnixCrypt},
    search::crack,
    utils::{format::FormatUtils, logging::init_logging, prompt::prompt_thread_count},
};
use log::{info, warn, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::IsTerminal;
use std::sync::atomic::Ordering;
use std::time::Duration;

const LOG_TARGET: &str = "datecrack::main";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    let level = args.log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
    init_logging(level, args.log_file.as_deref()).context("failed to initialise logging")?;

    // Seeded once; only touched between searches
    let rng = StdRng::from_entropy();

    match args.algo {
        Algorithm::Des => dispatch(UnixCrypt, &args, rng).await,
        Algorithm::Sha256 => dispatch(SaltedSha256, &args, rng).await,
    }
}

async fn dispatch<O>(oracle: O, args: &Args, rng: StdRng) -> anyhow::Result<()>
where
    O: HashOracle + Clone + 'static,
{
    if args.sweep.is_some() {
        return handle_sweep(oracle, args, rng).await;
    }

    let threads = match resolve_threads(args) {
        Ok(threads) => threads,
        Err(err) => {
            eprintln!("❌ Error: {}", err);
            std::process::exit(1);
        }
    };

    if args.mode == SearchMode::Parallel && threads == 1 {
        warn!(target: LOG_TARGET,
            "💡 One thread in parallel mode; --mode sequential avoids the pool overhead"
        );
    }

    match &args.hash {
        Some(hash) => handle_crack(oracle, hash.clone(), threads).await,
        None => handle_benchmark(oracle, args, threads, rng).await,
    }
}

/// --threads, else an interactive prompt on a terminal, else every core
fn resolve_threads(args: &Args) -> Result<usize, String> {
    if let Some(threads) = args.threads {
        return Ok(threads);
    }
    let detected = num_cpus::get();
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        prompt_thread_count(&mut stdin.lock(), &mut std::io::stdout(), detected)
    } else {
        Ok(detected.clamp(1, MAX_THREADS))
    }
}

fn base_config(args: &Args, threads: usize) -> anyhow::Result<BenchmarkConfig> {
    let mut config = BenchmarkConfig::new(threads, args.rounds, args.mode);
    config.salt = Salt::new(&args.salt)?;
    config.report_interval = Duration::from_secs(args.report_interval);
    Ok(config)
}

async fn handle_benchmark<O>(
    oracle: O,
    args: &Args,
    threads: usize,
    mut rng: StdRng,
) -> anyhow::Result<()>
where
    O: HashOracle + Clone + 'static,
{
    let config = base_config(args, threads)?;
    let algorithm = oracle.name();

    info!(target: LOG_TARGET, "🧪 Starting datecrack benchmark");
    info!(target: LOG_TARGET, "🔑 Hash: {} (salt {})", algorithm, config.salt);
    info!(target: LOG_TARGET, "🧵 Threads: {} ({:?} mode)", config.effective_threads(), config.mode);
    info!(target: LOG_TARGET, "🔁 Rounds: {}", config.rounds);

    let mut runner = BenchmarkRunner::new(oracle, config.clone());
    let interrupt = runner.interrupt_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!(target: LOG_TARGET, "🛑 Ctrl-C received, finishing the current round");
            interrupt.store(true, Ordering::Relaxed);
        }
    });

    let session = tokio::task::spawn_blocking(move || runner.run(&mut rng))
        .await
        .context("benchmark task failed")??;

    let report = SessionReport::new(algorithm, &config, &session);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}

async fn handle_crack<O>(oracle: O, hash: String, threads: usize) -> anyhow::Result<()>
where
    O: HashOracle + Clone + 'static,
{
    let target = hash.clone();
    let outcome = tokio::task::spawn_blocking(move || crack(oracle, &target, threads))
        .await
        .context("crack task failed")??;

    info!(target: LOG_TARGET,
        "⚡ {} candidates in {:.3}s ({})",
        FormatUtils::format_number(outcome.evaluated),
        outcome.elapsed.as_secs_f64(),
        FormatUtils::format_rate(outcome.rate())
    );

    match outcome.found {
        Some(candidate) => {
            println!("✅ Found: {} ({})", candidate.to_date_string(), candidate);
            Ok(())
        }
        None => {
            println!("❌ No DDMMYYYY date matches {}", hash);
            std::process::exit(2);
        }
    }
}

async fn handle_sweep<O>(oracle: O, args: &Args, mut rng: StdRng) -> anyhow::Result<()>
where
    O: HashOracle + Clone + 'static,
{
    let counts = args.sweep.clone().unwrap_or_default();
    let base = base_config(args, 1)?;

    info!(target: LOG_TARGET,
        "📏 Sweeping {:?} thread(s), {} rounds each, hash: {}",
        counts, base.rounds, oracle.name()
    );

    let rows = tokio::task::spawn_blocking(move || run_sweep(&oracle, &base, &counts, &mut rng))
        .await
        .context("sweep task failed")??;

    match &args.csv {
        Some(path) => {
            save_csv(&rows, path)?;
            info!(target: LOG_TARGET, "💾 Sweep results written to {}", path.display());
        }
        None => write_csv(&rows, std::io::stdout().lock())?,
    }
    Ok(())
}

// Changelog:
// - v1.1.0 (2025-07-06): Crack and sweep modes, Ctrl-C interrupt.
// - v1.0.0 (2025-07-02): Benchmark entry point with log4rs and clap.
