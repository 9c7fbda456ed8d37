//! One-Ply Chess Engine
//!
//! Decodes a FEN position, plays each candidate move on a private copy of
//! the board, scores the result with the static evaluator and returns the
//! index of the best candidate for the side to move.
//!
//! # Usage
//!
//! ```
//! let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let idx = one_ply_engine::choose_move(fen, "e3 e4 Nf3", 5);
//! assert_eq!(idx, 1);
//! ```

mod search;

use chess_core::{Engine, Position, SearchLimits, SearchResult, SelectorConfig, select};

/// Move selector that looks exactly one ply ahead.
///
/// This engine uses:
/// - Board copy per candidate, discarded after scoring
/// - Material, minor-piece centrality and pawn advancement evaluation
/// - Strict improvement only, so ties keep the earliest candidate
#[derive(Debug, Clone, Default)]
pub struct OnePlyEngine {
    /// Candidates scored in the last search
    nodes: u64,
}

impl OnePlyEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for OnePlyEngine {
    fn search(&mut self, pos: &Position, moves: &[&str], limits: &SearchLimits) -> SearchResult {
        limits.start();

        let outcome = search::pick_best_index(pos, moves, limits);
        self.nodes = outcome.evaluated as u64;

        SearchResult {
            best_index: outcome.best.map(|(idx, _)| idx).unwrap_or(0),
            best_score: outcome.best.map(|(_, score)| score),
            evaluated: outcome.evaluated,
            skipped: outcome.skipped,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "OnePly v1.0"
    }
}

/// Full selection from raw inputs, honouring `config`.
pub fn choose_move_with(
    fen: &str,
    moves: &str,
    time_budget_secs: i64,
    config: &SelectorConfig,
) -> SearchResult {
    select(&mut OnePlyEngine::new(), fen, moves, time_budget_secs, config)
}

/// Zero-based index of the chosen move in the space-separated `moves`.
///
/// Always returns a usable index: 0 for an empty list or when no token
/// could be applied.
pub fn choose_move(fen: &str, moves: &str, time_budget_secs: i64) -> usize {
    choose_move_with(fen, moves, time_budget_secs, &SelectorConfig::default()).best_index
}

// Re-export for direct use if needed
pub use search::{SearchOutcome, pick_best_index};
