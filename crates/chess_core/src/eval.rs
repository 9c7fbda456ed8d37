//! Static evaluation: material, minor-piece centrality and pawn advancement.

use crate::{board::Position, types::*};

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 20000];

/// Centre proximity for knights and bishops, indexed [row][file].
#[rustfmt::skip]
pub const CENTRE_BONUS: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 2, 3, 3, 2, 0, 0],
    [0, 0, 2, 3, 3, 2, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const CENTRE_WEIGHT: i32 = 5;
const PAWN_STEP: i32 = 5;

/// Scores the position in centipawns from White's point of view,
/// independent of the side to move.
pub fn evaluate(pos: &Position) -> i32 {
    pos.pieces()
        .map(|(sq, pc)| {
            let row = row_of(sq) as usize;
            let file = file_of(sq) as usize;

            // Bonuses are written from White's side; advancement for Black
            // is measured from its own back rank.
            let mut value = PIECE_VALUES[pc.kind.idx()];
            match pc.kind {
                PieceKind::Knight | PieceKind::Bishop => {
                    value += CENTRE_BONUS[row][file] * CENTRE_WEIGHT;
                }
                PieceKind::Pawn => {
                    let advanced = match pc.color {
                        Color::White => 7 - row as i32,
                        Color::Black => row as i32,
                    };
                    value += advanced * PAWN_STEP;
                }
                _ => {}
            }

            if pc.color == Color::White {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
