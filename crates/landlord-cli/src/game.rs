use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use landlord_bot::{GreedyPolicy, Move, Policy, PolicyContext};
use landlord_core::game::round::RoundState;
use landlord_core::model::deck::Deck;
use landlord_core::model::seat::Seat;

use crate::input::{ParsedLine, parse_line};

pub struct GameOptions {
    pub seed: u64,
    pub bots_only: bool,
}

/// Play one full game. The human, when present, sits as the first peasant;
/// the landlord always leads.
pub fn run(options: &GameOptions) -> Result<()> {
    let deck = Deck::shuffled_with_seed(options.seed);
    let mut round = RoundState::deal(&deck);
    let human_seat = (!options.bots_only).then_some(Seat::FirstPeasant);
    let mut policy = GreedyPolicy::new();

    println!(
        "Game start (seed {}). The landlord leads with 20 cards.",
        options.seed
    );
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !round.is_over() {
        let seat = round.turn();
        if human_seat == Some(seat) {
            human_turn(&mut round, seat, &mut lines)?;
        } else {
            bot_turn(&mut round, seat, &mut policy);
        }
    }

    let winner = round.winner().expect("loop exits only with a winner");
    println!();
    println!("Game over. {winner} wins.");
    if winner.is_peasant() {
        println!("The peasants win.");
    } else {
        println!("The landlord wins.");
    }
    Ok(())
}

fn bot_turn(round: &mut RoundState, seat: Seat, policy: &mut GreedyPolicy) {
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
            println!(
                "{seat} plays: {combo} ({}) [cards left: {}]",
                combo.kind(),
                round.hand(seat).len()
            );
        }
        Move::Pass => {
            let outcome = round
                .pass(seat)
                .expect("policy passes only when the round allows it");
            println!("{seat} passes.");
            report_reset(outcome);
        }
    }
}

fn human_turn(
    round: &mut RoundState,
    seat: Seat,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    println!();
    match round.table() {
        Some(table) => println!(
            "Your turn. The table shows {} ({}) from the {}.",
            table.combo,
            table.combo.kind(),
            table.seat
        ),
        None => println!("Your turn. You open the round; play any combo."),
    }
    println!("Your hand: {}", round.hand(seat));

    loop {
        print!("Cards separated by spaces, or pass (e.g. \"3 3\", \"10 J Q K A\", \"B R\"): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            bail!("input closed before the game ended");
        };

        match parse_line(&line?) {
            Err(err) => println!("  {err}"),
            Ok(ParsedLine::Pass) => match round.pass(seat) {
                Err(err) => println!("  {err}"),
                Ok(outcome) => {
                    println!("You pass.");
                    report_reset(outcome);
                    return Ok(());
                }
            },
            Ok(ParsedLine::Cards(cards)) => match round.play(seat, &cards) {
                Err(err) => println!("  {err}"),
                Ok(_) => {
                    let table = round.table().expect("a successful play owns the table");
                    println!(
                        "You play: {} ({}) [cards left: {}]",
                        table.combo,
                        table.combo.kind(),
                        round.hand(seat).len()
                    );
                    return Ok(());
                }
            },
        }
    }
}

fn report_reset(outcome: landlord_core::game::round::PassOutcome) {
    if let landlord_core::game::round::PassOutcome::RoundReset { leader } = outcome {
        println!("End of round. {leader} opens the next one.");
        println!();
    }
}
