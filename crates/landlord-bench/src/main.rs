use std::path::PathBuf;

use clap::Parser;

use landlord_bench::config::BenchmarkConfig;
use landlord_bench::logging::init_logging;
use landlord_bench::selfplay::SelfPlayRunner;

/// Self-play benchmarking harness for landlord bots.
#[derive(Debug, Parser)]
#[command(
    name = "landlord-bench",
    author,
    version,
    about = "Deterministic landlord self-play harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of games to play.
    #[arg(long, value_name = "GAMES")]
    games: Option<usize>,

    /// Override the RNG seed the per-game seeds derive from.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration (no games are run).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchmarkConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(games) = cli.games {
        config.games.count = games;
    }

    if let Some(seed) = cli.seed {
        config.games.seed = Some(seed);
    }

    config.validate()?;

    let outputs = config.resolved_outputs();
    println!(
        "Loaded configuration '{}' ({} games, base seed {:?})",
        config.run_id, config.games.count, config.games.seed
    );

    let _logging_guard = init_logging(&config.logging, &outputs)?;

    if cli.validate_only {
        println!("Validation-only mode: self-play skipped.");
        return Ok(());
    }

    let runner = SelfPlayRunner::new(config, outputs);
    let summary = runner.run()?;

    println!(
        "Played {} games; the landlord won {} ({:.1}%).",
        summary.games_played,
        summary.landlord_wins,
        summary.landlord_win_rate() * 100.0
    );
    println!("Rows written to {}", summary.jsonl_path.display());
    println!("Summary written to {}", summary.summary_path.display());
    Ok(())
}
