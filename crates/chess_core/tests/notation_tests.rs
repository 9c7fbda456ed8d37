//! Tests for the FEN -> apply -> evaluate pipeline through the public API
//!
//! This module covers:
//! - Placement decoding and re-encoding
//! - Special moves: castling, promotion, en passant, disambiguation
//! - Driving an engine through `select`

use chess_core::{
    Color, Engine, Piece, PieceKind, Position, SearchLimits, SearchResult, SelectorConfig,
    coord_to_sq, evaluate, select,
};

fn at(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_fen_round_trip_placement() {
    let fen = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP3PPP/R2QKB1R b KQ - 3 8";
    let pos = Position::from_fen(fen);
    assert_eq!(pos.to_fen(), "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP3PPP/R2QKB1R b");
    assert_eq!(Position::from_fen(&pos.to_fen()), pos);
}

// =============================================================================
// Move application
// =============================================================================

#[test]
fn test_short_game_sequence() {
    let mut pos = Position::startpos();
    for (token, side) in [
        ("e4", Color::White),
        ("d5", Color::Black),
        ("exd5", Color::White),
        ("Qxd5", Color::Black),
        ("Nc3", Color::White),
        ("Qa5", Color::Black),
        ("Bc4", Color::White),
        ("Nf6", Color::Black),
        ("Nf3", Color::White),
        ("Bg4", Color::Black),
        ("O-O", Color::White),
    ] {
        pos.side_to_move = side;
        pos.apply_san(token).unwrap_or_else(|e| panic!("{token}: {e}"));
    }
    pos.side_to_move = Color::Black;
    assert_eq!(
        pos.to_fen(),
        "rn2kb1r/ppp1pppp/5n2/q7/2B3b1/2N2N2/PPPP1PPP/R1BQ1RK1 b"
    );
}

#[test]
fn test_knight_rank_disambiguation() {
    let mut pos = Position::from_fen("4k3/8/8/1N6/8/1N6/8/4K3 w - - 0 1");
    pos.apply_san("N3d4").unwrap();
    assert_eq!(
        pos.piece_at(at("d4")),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
    assert_eq!(pos.piece_at(at("b3")), None);
    assert!(pos.piece_at(at("b5")).is_some());
}

#[test]
fn test_black_en_passant() {
    let mut pos = Position::from_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1");
    pos.apply_san("exd3").unwrap();
    assert_eq!(
        pos.piece_at(at("d3")),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(pos.piece_at(at("d4")), None);
    assert_eq!(pos.piece_at(at("e4")), None);
    assert_eq!(evaluate(&pos), -(100 + 25));
}

// =============================================================================
// Selection driver
// =============================================================================

/// Always answers with the last candidate.
struct LastMove;

impl Engine for LastMove {
    fn search(&mut self, _pos: &Position, moves: &[&str], limits: &SearchLimits) -> SearchResult {
        assert!(!limits.enforce_deadline);
        SearchResult {
            best_index: moves.len() - 1,
            best_score: Some(0),
            evaluated: moves.len() as u32,
            skipped: 0,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Last"
    }
}

#[test]
fn test_select_splits_and_caps_moves() {
    let config = SelectorConfig {
        max_moves: 3,
        ..Default::default()
    };
    let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let result = select(&mut LastMove, fen, "a3  b3 c3 d3", 5, &config);
    assert_eq!(result.best_index, 2);
    assert_eq!(result.evaluated, 3);
}

#[test]
fn test_select_empty_list_skips_engine() {
    let result = select(&mut LastMove, "8/8/8/8/8/8/8/8 w", "", 5, &SelectorConfig::default());
    assert_eq!(result, SearchResult::empty());
}
