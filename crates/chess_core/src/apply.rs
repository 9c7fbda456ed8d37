//! Applies algebraic moves to a position in place.
//!
//! Only the squares a move touches are written. Castling rights, en-passant
//! targets and clocks are not tracked; castling and en passant are inferred
//! from the notation and the board as it stands.

use crate::board::Position;
use crate::error::MoveError;
use crate::locate::{Hints, find_source};
use crate::san::{CastleSide, MoveIntent, parse_san};
use crate::types::*;

/// Parses `token` and plays it for `side`.
///
/// On error the position is left untouched.
pub fn apply_san(pos: &mut Position, token: &str, side: Color) -> Result<(), MoveError> {
    let intent = parse_san(token)?;
    apply_intent(pos, intent, side)
}

pub fn apply_intent(pos: &mut Position, intent: MoveIntent, side: Color) -> Result<(), MoveError> {
    match intent {
        MoveIntent::Castle(castle) => {
            apply_castle(pos, castle, side);
            Ok(())
        }
        MoveIntent::Standard {
            kind,
            file_hint,
            row_hint,
            to,
            promotion,
            ..
        } => {
            let piece = Piece::new(side, kind);
            let hints = Hints {
                file: file_hint,
                row: row_hint,
            };
            let from = find_source(pos, piece, to, hints).ok_or_else(|| MoveError::NoSource {
                piece: piece.to_fen_char(),
                to: sq_to_coord(to),
            })?;

            // A pawn landing diagonally on an empty square captured en passant;
            // the victim sits beside the source, on the destination file.
            if kind == PieceKind::Pawn
                && file_of(from) != file_of(to)
                && pos.is_empty(to)
                && let Some(victim) = sq(file_of(to), row_of(from))
            {
                pos.set_piece(victim, None);
            }

            pos.set_piece(from, None);
            let landed = match promotion {
                Some(promo) => Piece::new(side, promo),
                None => piece,
            };
            pos.set_piece(to, Some(landed));
            Ok(())
        }
    }
}

/// Relocates king and rook to their castled squares without checking rights.
fn apply_castle(pos: &mut Position, castle: CastleSide, side: Color) {
    let row = side.back_row();
    let (rook_from, king_to, rook_to) = match castle {
        CastleSide::King => (7, 6, 5),
        CastleSide::Queen => (0, 2, 3),
    };
    let at = |file: i8| (row as u8) * 8 + file as u8;

    pos.set_piece(at(4), None);
    pos.set_piece(at(rook_from), None);
    pos.set_piece(at(king_to), Some(Piece::new(side, PieceKind::King)));
    pos.set_piece(at(rook_to), Some(Piece::new(side, PieceKind::Rook)));
}

impl Position {
    /// Plays `token` for the side to move. The side to move is not flipped.
    pub fn apply_san(&mut self, token: &str) -> Result<(), MoveError> {
        let side = self.side_to_move;
        apply_san(self, token, side)
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
