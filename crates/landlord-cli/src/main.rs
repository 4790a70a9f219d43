mod game;
mod input;

use clap::Parser;

/// Console front-end: one human peasant against two bot seats, or a full
/// bot game with `--bots`.
#[derive(Debug, Parser)]
#[command(
    name = "mdlandlord",
    author,
    version,
    about = "Three-player landlord card game"
)]
struct Cli {
    /// Seed for a reproducible deal; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Watch a bot-vs-bot game instead of playing a seat.
    #[arg(long)]
    bots: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = game::GameOptions {
        seed: cli.seed.unwrap_or_else(rand::random),
        bots_only: cli.bots,
    };
    game::run(&options)
}
