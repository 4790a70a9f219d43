use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use landlord_bot::{GreedyPolicy, Move, Policy, PolicyContext};
use landlord_core::game::round::RoundState;
use landlord_core::model::deck::Deck;
use landlord_core::model::seat::Seat;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{BenchmarkConfig, ResolvedOutputs};

/// Runs seeded bot-vs-bot games and streams one JSONL row per game.
pub struct SelfPlayRunner {
    config: BenchmarkConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub games_played: usize,
    pub landlord_wins: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
}

impl RunSummary {
    pub fn landlord_win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.landlord_wins as f64 / self.games_played as f64
    }
}

#[derive(Debug, Serialize)]
struct GameRow<'a> {
    run_id: &'a str,
    game_index: usize,
    seed: u64,
    winner: &'a str,
    landlord_won: bool,
    turns: usize,
    cards_left: [usize; 3],
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to write benchmark outputs")]
    Io(#[from] std::io::Error),
    #[error("failed to encode a result row")]
    Encode(#[from] serde_json::Error),
}

impl SelfPlayRunner {
    pub fn new(config: BenchmarkConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    /// Execute the run: every game seed derives from the configured base
    /// seed, so a run is reproducible end to end.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.games.seed.unwrap_or(0));
        let mut landlord_wins = 0usize;
        let mut rows_written = 0usize;

        for game_index in 0..self.config.games.count {
            let seed = rng.next_u64();
            let outcome = play_game(seed);
            if outcome.winner == Seat::Landlord {
                landlord_wins += 1;
            }

            let row = GameRow {
                run_id: &self.config.run_id,
                game_index,
                seed,
                winner: seat_label(outcome.winner),
                landlord_won: outcome.winner == Seat::Landlord,
                turns: outcome.turns,
                cards_left: outcome.cards_left,
            };
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;

            event!(
                target: "landlord_bench::game",
                Level::INFO,
                game_index,
                seed,
                winner = seat_label(outcome.winner),
                turns = outcome.turns,
            );
        }
        writer.flush()?;

        let summary = RunSummary {
            games_played: self.config.games.count,
            landlord_wins,
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
        };
        self.write_summary(&summary)?;
        Ok(summary)
    }

    fn write_summary(&self, summary: &RunSummary) -> Result<(), RunnerError> {
        let markdown = format!(
            "# Self-play summary: {run_id}\n\n\
             | metric | value |\n\
             | --- | --- |\n\
             | games | {games} |\n\
             | landlord wins | {wins} |\n\
             | landlord win rate | {rate:.1}% |\n",
            run_id = self.config.run_id,
            games = summary.games_played,
            wins = summary.landlord_wins,
            rate = summary.landlord_win_rate() * 100.0,
        );
        fs::write(&self.outputs.summary_md, markdown)?;
        Ok(())
    }
}

struct GameOutcome {
    winner: Seat,
    turns: usize,
    cards_left: [usize; 3],
}

/// Play one full game between three greedy bots. Every fresh round sheds at
/// least one card, so the loop always terminates.
fn play_game(seed: u64) -> GameOutcome {
    let mut round = RoundState::deal(&Deck::shuffled_with_seed(seed));
    let mut policy = GreedyPolicy::new();
    let mut turns = 0usize;

    while !round.is_over() {
        let seat = round.turn();
        let chosen = {
            let ctx = PolicyContext {
                seat,
                hand: round.hand(seat),
                previous: round.combo_to_beat(),
            };
            policy.choose_move(&ctx)
        };
        match chosen {
            Move::Play(combo) => {
                let cards = combo.cards().to_vec();
                round
                    .play(seat, &cards)
                    .expect("policy moves are drawn from the hand and pre-judged");
            }
            Move::Pass => {
                round
                    .pass(seat)
                    .expect("policy passes only when the round allows it");
            }
        }
        turns += 1;
    }

    GameOutcome {
        winner: round.winner().expect("finished game has a winner"),
        turns,
        cards_left: [
            round.hand(Seat::Landlord).len(),
            round.hand(Seat::FirstPeasant).len(),
            round.hand(Seat::SecondPeasant).len(),
        ],
    }
}

const fn seat_label(seat: Seat) -> &'static str {
    match seat {
        Seat::Landlord => "landlord",
        Seat::FirstPeasant => "first_peasant",
        Seat::SecondPeasant => "second_peasant",
    }
}

fn ensure_parent(parent: Option<&Path>) -> Result<(), std::io::Error> {
    if let Some(parent) = parent {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::play_game;
    use landlord_core::model::seat::Seat;

    #[test]
    fn games_terminate_with_a_winner_and_an_empty_hand() {
        for seed in 0..8 {
            let outcome = play_game(seed);
            assert_eq!(outcome.cards_left[outcome.winner.index()], 0);
            assert!(outcome.turns > 0);
        }
    }

    #[test]
    fn identical_seeds_replay_identically() {
        let a = play_game(424242);
        let b = play_game(424242);
        assert_eq!(a.winner, b.winner);
        assert_eq!(a.turns, b.turns);
        assert_eq!(a.cards_left, b.cards_left);
    }

    #[test]
    fn winner_is_one_of_the_three_seats() {
        let outcome = play_game(7);
        assert!(Seat::LOOP.contains(&outcome.winner));
    }
}
