use std::fmt;

use tracing::warn;

use crate::types::*;

/// An 8x8 grid of optional pieces plus the side to move.
///
/// Nothing else is tracked: castling rights and en-passant targets are
/// re-derived from the move notation and board geometry when a move is
/// applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
}

impl Position {
    pub fn empty(side_to_move: Color) -> Self {
        Position {
            board: [None; 64],
            side_to_move,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty(Color::White);

        // Pawns
        for f in 0..8 {
            p.board[48 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[8 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[56 + f] = Some(Piece::new(Color::White, kind));
            p.board[f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Decodes the placement and active-colour fields of a FEN string.
    ///
    /// Decoding never fails. Placement beyond the 8x8 grid is dropped,
    /// unknown piece letters occupy a column but leave it empty, and any
    /// active colour other than `w` is read as Black. Castling, en-passant
    /// and the move counters are not consumed.
    ///
    /// An unknown letter does not become a blocker: sliders and pawn pushes
    /// pass through its square as if it were empty. Engines that store the
    /// raw letter in the cell would stop there instead.
    pub fn from_fen(fen: &str) -> Self {
        let mut pos = Position::empty(Color::White);
        let (placement, rest) = match fen.split_once(' ') {
            Some((placement, rest)) => (placement, Some(rest)),
            None => (fen, None),
        };

        let mut row: i32 = 0;
        let mut col: i32 = 0;
        for ch in placement.chars() {
            match ch {
                '/' => {
                    row += 1;
                    col = 0;
                }
                '1'..='8' => col += ch as i32 - '0' as i32,
                _ => {
                    match Piece::from_fen_char(ch) {
                        Some(pc) if (0..8).contains(&row) && (0..8).contains(&col) => {
                            pos.board[(row * 8 + col) as usize] = Some(pc);
                        }
                        Some(_) => warn!(row, col, piece = %ch, "FEN placement outside the board"),
                        None => warn!(piece = %ch, "unknown piece letter in FEN"),
                    }
                    col += 1;
                }
            }
        }

        pos.side_to_move = match rest.and_then(|r| r.chars().next()) {
            Some('w') => Color::White,
            Some('b') => Color::Black,
            other => {
                warn!(?other, "missing or unexpected active colour in FEN, assuming black");
                Color::Black
            }
        };
        pos
    }

    /// Encodes placement and active colour, the inverse of [`Position::from_fen`].
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut gap = 0;
            for file in 0..8 {
                match self.board[row * 8 + file] {
                    Some(pc) => {
                        if gap > 0 {
                            out.push(char::from(b'0' + gap));
                            gap = 0;
                        }
                        out.push(pc.to_fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push(char::from(b'0' + gap));
            }
        }
        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        out
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }
    pub fn is_empty(&self, sq: u8) -> bool {
        self.board[sq as usize].is_none()
    }

    /// Occupied squares in row-major order (rank 8 first, file a first).
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (i as u8, pc)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for file in 0..8u8 {
                let ch = self.board[(row * 8 + file) as usize]
                    .map(Piece::to_fen_char)
                    .unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
