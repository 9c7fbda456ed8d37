//! One-ply selection over candidate move tokens

use chess_core::{Color, Position, SearchLimits, apply_san, evaluate};
use tracing::debug;

/// Result from pick_best_index, including candidates that could not be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Index and score of the best applicable candidate
    pub best: Option<(usize, i32)>,
    /// Candidates applied and scored
    pub evaluated: u32,
    /// Candidates whose token could not be applied
    pub skipped: u32,
    /// True if the deadline cut the loop short
    pub stopped: bool,
}

/// Applies every candidate to its own copy of `pos`, scores the result and
/// keeps the best one for the side to move.
///
/// White maximises and Black minimises. Only a strict improvement replaces
/// the current best, so ties go to the earliest candidate. Tokens that fail
/// to apply are skipped and can never be chosen.
pub fn pick_best_index(pos: &Position, moves: &[&str], limits: &SearchLimits) -> SearchOutcome {
    let side = pos.side_to_move;
    let mut outcome = SearchOutcome {
        best: None,
        evaluated: 0,
        skipped: 0,
        stopped: false,
    };

    for (idx, &token) in moves.iter().enumerate() {
        // Check time before starting each candidate
        if limits.should_stop() {
            debug!(idx, "deadline reached, stopping selection");
            outcome.stopped = true;
            break;
        }

        let mut trial = pos.clone();
        if let Err(err) = apply_san(&mut trial, token, side) {
            debug!(idx, token, %err, "skipping candidate");
            outcome.skipped += 1;
            continue;
        }
        outcome.evaluated += 1;

        let score = evaluate(&trial);
        debug!(idx, token, score, "candidate scored");

        let improves = match outcome.best {
            None => true,
            Some((_, best)) => match side {
                Color::White => score > best,
                Color::Black => score < best,
            },
        };
        if improves {
            outcome.best = Some((idx, score));
        }
    }

    outcome
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
