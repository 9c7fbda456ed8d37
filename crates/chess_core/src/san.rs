//! Standard algebraic notation tokenizer.
//!
//! Turns a move token such as `Nbd2`, `exd6`, `e8=Q+` or `O-O-O` into a
//! [`MoveIntent`] without looking at any board. Resolving the source square
//! is left to [`crate::locate`].

use crate::error::MoveError;
use crate::types::PieceKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    King,
    Queen,
}

/// Structured reading of one move token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveIntent {
    Castle(CastleSide),
    Standard {
        kind: PieceKind,
        /// Source file from disambiguation (0 = file a)
        file_hint: Option<i8>,
        /// Source row from disambiguation (0 = rank 8)
        row_hint: Option<i8>,
        to: u8,
        capture: bool,
        promotion: Option<PieceKind>,
    },
}

const KINGSIDE: [&str; 3] = ["O-O", "O-O+", "O-O#"];
const QUEENSIDE: [&str; 3] = ["O-O-O", "O-O-O+", "O-O-O#"];

pub fn parse_san(token: &str) -> Result<MoveIntent, MoveError> {
    if KINGSIDE.contains(&token) {
        return Ok(MoveIntent::Castle(CastleSide::King));
    }
    if QUEENSIDE.contains(&token) {
        return Ok(MoveIntent::Castle(CastleSide::Queen));
    }

    let mut body = token.as_bytes();
    while let [rest @ .., b'+' | b'#'] = body {
        body = rest;
    }

    let mut promotion = None;
    if body.len() >= 4 && body[body.len() - 2] == b'=' {
        let letter = body[body.len() - 1] as char;
        let kind = PieceKind::from_char(letter).ok_or_else(|| MoveError::BadPromotion {
            token: token.to_string(),
            piece: letter,
        })?;
        promotion = Some(kind);
        body = &body[..body.len() - 2];
    }

    let kind = match body.first() {
        Some(b'N') => PieceKind::Knight,
        Some(b'B') => PieceKind::Bishop,
        Some(b'R') => PieceKind::Rook,
        Some(b'Q') => PieceKind::Queen,
        Some(b'K') => PieceKind::King,
        _ => PieceKind::Pawn,
    };
    if kind != PieceKind::Pawn {
        body = &body[1..];
    }

    if body.len() < 2 {
        return Err(MoveError::TooShort {
            token: token.to_string(),
        });
    }
    let (middle, dest) = body.split_at(body.len() - 2);
    let file = dest[0] as i32 - b'a' as i32;
    let row = b'8' as i32 - dest[1] as i32;
    let to = if (0..8).contains(&file) && (0..8).contains(&row) {
        (row * 8 + file) as u8
    } else {
        return Err(MoveError::BadDestination {
            token: token.to_string(),
        });
    };

    let mut file_hint = None;
    let mut row_hint = None;
    let mut capture = false;
    for &b in middle {
        match b {
            b'x' => capture = true,
            b'a'..=b'h' => file_hint = Some((b - b'a') as i8),
            b'1'..=b'8' => row_hint = Some((b'8' - b) as i8),
            _ => {}
        }
    }

    Ok(MoveIntent::Standard {
        kind,
        file_hint,
        row_hint,
        to,
        capture,
        promotion,
    })
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
