use super::{Move, Policy, PolicyContext};
use landlord_core::model::combo::{Combo, ComboKind};
use landlord_core::rules::compare::beats;
use landlord_core::rules::generate::generate;
use tracing::{Level, event};

/// The reference single-pass heuristic: no lookahead, no bomb conservation,
/// no hand-shape optimization. Deliberately naive; its observable choices
/// are part of the game's expected behavior and must not be "improved".
#[derive(Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for GreedyPolicy {
    fn choose_move(&mut self, ctx: &PolicyContext) -> Move {
        assert!(
            !ctx.hand.is_empty(),
            "policy invoked with an empty hand; the game should already be over"
        );

        match ctx.previous {
            None => self.open_round(ctx),
            Some(previous) => self.answer(ctx, previous),
        }
    }
}

impl GreedyPolicy {
    /// Fresh round: walk the shape list in its fixed declared order and play
    /// the first (lowest-ranked) combo of the first kind that yields any.
    /// Passing is illegal here, and the scan cannot come up empty: a
    /// non-empty hand always yields at least a single.
    fn open_round(&self, ctx: &PolicyContext) -> Move {
        for kind in ComboKind::PLAYABLE {
            if let Some(combo) = generate(ctx.hand, kind).into_iter().next() {
                log_decision(ctx, Some(&combo), kind, 1, "fresh_lead");
                return Move::Play(combo);
            }
        }
        unreachable!("a non-empty hand always yields at least a single");
    }

    /// Respond to the table: candidates of the same kind first, then bombs,
    /// then the rocket; the first candidate that beats the table wins.
    fn answer(&self, ctx: &PolicyContext, previous: &Combo) -> Move {
        let kind = previous.kind();
        let mut candidates = generate(ctx.hand, kind);
        if kind != ComboKind::Bomb {
            candidates.extend(generate(ctx.hand, ComboKind::Bomb));
        }
        if kind != ComboKind::Rocket {
            candidates.extend(generate(ctx.hand, ComboKind::Rocket));
        }

        let candidate_count = candidates.len();
        for combo in candidates {
            if beats(Some(previous), &combo) {
                log_decision(ctx, Some(&combo), kind, candidate_count, "beats_table");
                return Move::Play(combo);
            }
        }

        log_decision(ctx, None, kind, candidate_count, "no_beating_candidate");
        Move::Pass
    }
}

fn log_decision(
    ctx: &PolicyContext,
    chosen: Option<&Combo>,
    kind: ComboKind,
    candidate_count: usize,
    reason: &str,
) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    let choice = chosen
        .map(|combo| combo.to_string())
        .unwrap_or_else(|| "pass".to_string());

    event!(
        target: "landlord_bot::play",
        Level::INFO,
        seat = %ctx.seat,
        hand_size = ctx.hand.len(),
        kind = kind.as_str(),
        candidates = candidate_count,
        chosen = %choice,
        reason,
    );
}
