pub mod apply;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod locate;
pub mod movelist;
pub mod san;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use apply::*;
pub use board::*;
pub use config::*;
pub use error::*;
pub use eval::evaluate;
pub use locate::*;
pub use movelist::split_moves;
pub use san::*;
pub use time_control::*;
pub use types::*;

use serde::Serialize;
use tracing::debug;

// =============================================================================
// Engine trait: implemented by every move selector (one-ply, random, ...)
// =============================================================================

/// Result of choosing among candidate move tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Zero-based index into the candidate list; 0 when nothing applied
    pub best_index: usize,
    /// Evaluation of the chosen move, White-positive (None if no candidate applied)
    pub best_score: Option<i32>,
    /// Candidates that were applied and scored
    pub evaluated: u32,
    /// Candidates that could not be applied
    pub skipped: u32,
    /// Whether selection was cut short by the deadline
    pub stopped: bool,
}

impl SearchResult {
    /// Result for an empty candidate list.
    pub fn empty() -> Self {
        Self {
            best_index: 0,
            best_score: None,
            evaluated: 0,
            skipped: 0,
            stopped: false,
        }
    }

    /// True when at least one candidate could be applied, so `best_index`
    /// is a real choice rather than the fallback.
    pub fn found_move(&self) -> bool {
        self.best_score.is_some()
    }
}

/// Trait that all move selectors must implement.
///
/// Selectors receive the decoded position and the candidate tokens, and
/// pick one of them by index. Candidates are trusted to be legal.
pub trait Engine: Send {
    /// Choose among `moves` for the side to move in `pos`.
    ///
    /// # Arguments
    /// * `pos` - The position to move from
    /// * `moves` - Candidate tokens in algebraic notation
    /// * `limits` - Time budget, advisory unless enforced
    fn search(&mut self, pos: &Position, moves: &[&str], limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "oneply"
    }
}

/// Runs `engine` on raw inputs: decodes the FEN, splits the move list per
/// `config` and builds the time limits.
///
/// `time_budget_secs` is advisory unless `config.enforce_deadline` is set.
pub fn select(
    engine: &mut dyn Engine,
    fen: &str,
    moves: &str,
    time_budget_secs: i64,
    config: &SelectorConfig,
) -> SearchResult {
    let pos = Position::from_fen(fen);
    let tokens = split_moves(moves, config);
    if tokens.is_empty() {
        debug!(engine = engine.name(), "empty move list");
        return SearchResult::empty();
    }

    let limits = SearchLimits::advisory(time_budget_secs).enforced(config.enforce_deadline);
    engine.search(&pos, &tokens, &limits)
}
