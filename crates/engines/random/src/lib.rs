//! Random Move Selector
//!
//! Picks uniformly among the candidate tokens that can actually be applied
//! to the position. Useful for:
//! - Baseline comparisons (the one-ply selector should never do worse)
//! - Exercising the move interpreter on arbitrary move lists

use chess_core::{Engine, Position, SearchLimits, SearchResult, apply_san, evaluate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;


/// A move selector that plays random applicable candidates.
///
/// This engine does no evaluation when choosing; the reported score is
/// just the static evaluation of the move it happened to pick.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible choices for tests and comparisons.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, moves: &[&str], _limits: &SearchLimits) -> SearchResult {
        let side = pos.side_to_move;
        let mut applicable = Vec::with_capacity(moves.len());
        for (idx, &token) in moves.iter().enumerate() {
            let mut trial = pos.clone();
            match apply_san(&mut trial, token, side) {
                Ok(()) => applicable.push((idx, evaluate(&trial))),
                Err(err) => debug!(idx, token, %err, "skipping candidate"),
            }
        }

        let evaluated = applicable.len() as u32;
        let skipped = moves.len() as u32 - evaluated;
        let picked = applicable.choose(&mut self.rng).copied();

        SearchResult {
            best_index: picked.map(|(idx, _)| idx).unwrap_or(0),
            best_score: picked.map(|(_, score)| score),
            evaluated,
            skipped,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
