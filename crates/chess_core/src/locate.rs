//! Source-square resolution for algebraic moves.
//!
//! Finds which piece of a given kind and colour can reach a destination,
//! using board geometry only. The move list is trusted, so there are no
//! pin or check tests here.

use tracing::trace;

use crate::board::Position;
use crate::types::*;

const KNIGHT: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];
const DIAG: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
const ORTHO: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const ALL_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Geometric reachability test for one piece kind.
type ReachFn = fn(&Position, Color, u8, u8) -> bool;

fn reach_rule(kind: PieceKind) -> ReachFn {
    match kind {
        PieceKind::Pawn => pawn_reaches as ReachFn,
        PieceKind::Knight => knight_reaches,
        PieceKind::Bishop => bishop_reaches,
        PieceKind::Rook => rook_reaches,
        PieceKind::Queen => queen_reaches,
        PieceKind::King => king_reaches,
    }
}

/// Optional source coordinates taken from move disambiguation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hints {
    pub file: Option<i8>,
    pub row: Option<i8>,
}

/// Returns the first square in row-major order holding `piece` that can
/// reach `to` and agrees with `hints`.
pub fn find_source(pos: &Position, piece: Piece, to: u8, hints: Hints) -> Option<u8> {
    let reaches = reach_rule(piece.kind);
    let found = pos.pieces().find_map(|(from, pc)| {
        if pc != piece {
            return None;
        }
        if hints.file.is_some_and(|f| f != file_of(from))
            || hints.row.is_some_and(|r| r != row_of(from))
        {
            return None;
        }
        reaches(pos, piece.color, from, to).then_some(from)
    });
    trace!(
        piece = %piece.to_fen_char(),
        to = %sq_to_coord(to),
        from = ?found.map(sq_to_coord),
        "source lookup"
    );
    found
}

fn pawn_reaches(pos: &Position, color: Color, from: u8, to: u8) -> bool {
    let (ff, fr) = (file_of(from), row_of(from));
    let (tf, tr) = (file_of(to), row_of(to));
    let dir = color.forward();

    if ff == tf && pos.is_empty(to) {
        if fr + dir == tr {
            return true;
        }
        if fr == color.pawn_row()
            && tr == fr + 2 * dir
            && sq(ff, fr + dir).is_some_and(|mid| pos.is_empty(mid))
        {
            return true;
        }
    }
    // Diagonal step covers both ordinary captures and en passant; the
    // interpreter decides which by looking at the destination.
    fr + dir == tr && (ff - tf).abs() == 1
}

fn knight_reaches(_pos: &Position, _color: Color, from: u8, to: u8) -> bool {
    let (ff, fr) = (file_of(from), row_of(from));
    KNIGHT
        .iter()
        .any(|&(df, dr)| sq(ff + df, fr + dr) == Some(to))
}

fn king_reaches(_pos: &Position, _color: Color, from: u8, to: u8) -> bool {
    let (ff, fr) = (file_of(from), row_of(from));
    ALL_DIRS
        .iter()
        .any(|&(df, dr)| sq(ff + df, fr + dr) == Some(to))
}

fn bishop_reaches(pos: &Position, _color: Color, from: u8, to: u8) -> bool {
    slider_reaches(pos, from, to, &DIAG)
}

fn rook_reaches(pos: &Position, _color: Color, from: u8, to: u8) -> bool {
    slider_reaches(pos, from, to, &ORTHO)
}

fn queen_reaches(pos: &Position, _color: Color, from: u8, to: u8) -> bool {
    slider_reaches(pos, from, to, &ALL_DIRS)
}

/// Walks each ray outward; the first occupied square stops the ray but is
/// itself reachable.
fn slider_reaches(pos: &Position, from: u8, to: u8, dirs: &[(i8, i8)]) -> bool {
    for &(df, dr) in dirs {
        let mut f = file_of(from) + df;
        let mut r = row_of(from) + dr;
        while let Some(s) = sq(f, r) {
            if s == to {
                return true;
            }
            if !pos.is_empty(s) {
                break;
            }
            f += df;
            r += dr;
        }
    }
    false
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod locate_tests;
