//! Castling rights bookkeeping, castling synthesis and the en-passant window.

use std::fmt;

use tracing::debug;

use super::error::ParseError;
use super::graph::Board;
use super::{ChessField, Color, Direction, PieceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

    /// Direction the king travels along its back rank.
    pub fn direction(self) -> Direction {
        match self {
            CastlingSide::KingSide => Direction::Right,
            CastlingSide::QueenSide => Direction::Left,
        }
    }

    pub fn king_home(color: Color) -> ChessField {
        ChessField::new(color.back_row(), 4)
    }

    pub fn rook_home(self, color: Color) -> ChessField {
        match self {
            CastlingSide::KingSide => ChessField::new(color.back_row(), 7),
            CastlingSide::QueenSide => ChessField::new(color.back_row(), 0),
        }
    }

    pub fn king_landing(self, color: Color) -> ChessField {
        match self {
            CastlingSide::KingSide => ChessField::new(color.back_row(), 6),
            CastlingSide::QueenSide => ChessField::new(color.back_row(), 2),
        }
    }

    pub fn rook_landing(self, color: Color) -> ChessField {
        match self {
            CastlingSide::KingSide => ChessField::new(color.back_row(), 5),
            CastlingSide::QueenSide => ChessField::new(color.back_row(), 3),
        }
    }

    /// The side a king move from `from` to `to` castles to, if it is a castle.
    pub fn from_king_move(from: ChessField, to: ChessField) -> Option<Self> {
        if from.row != to.row {
            return None;
        }
        match to.col as i8 - from.col as i8 {
            2 => Some(CastlingSide::KingSide),
            -2 => Some(CastlingSide::QueenSide),
            _ => None,
        }
    }
}

/// White king-side, White queen-side, Black king-side, Black queen-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights([bool; 4]);

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights([true; 4]);
    pub const NONE: CastlingRights = CastlingRights([false; 4]);

    fn slot(color: Color, side: CastlingSide) -> usize {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => 0,
            (Color::White, CastlingSide::QueenSide) => 1,
            (Color::Black, CastlingSide::KingSide) => 2,
            (Color::Black, CastlingSide::QueenSide) => 3,
        }
    }

    pub fn has(&self, color: Color, side: CastlingSide) -> bool {
        self.0[Self::slot(color, side)]
    }

    pub fn grant(&mut self, color: Color, side: CastlingSide) {
        self.0[Self::slot(color, side)] = true;
    }

    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        self.0[Self::slot(color, side)] = false;
    }

    /// Revokes every right whose king or rook home square was touched by a
    /// move from `from` to `to`, covering both moving away and being captured.
    pub fn update_after_move(&mut self, from: ChessField, to: ChessField) {
        for color in [Color::White, Color::Black] {
            for side in CastlingSide::ALL {
                let homes = [CastlingSide::king_home(color), side.rook_home(color)];
                if homes.contains(&from) || homes.contains(&to) {
                    self.revoke(color, side);
                }
            }
        }
    }

    pub fn from_fen(castling: &str) -> Result<Self, ParseError> {
        let mut rights = Self::NONE;
        if castling == "-" {
            return Ok(rights);
        }
        if castling.is_empty() {
            return Err(ParseError::CastlingRights(castling.to_string()));
        }
        for c in castling.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastlingSide::KingSide),
                'Q' => (Color::White, CastlingSide::QueenSide),
                'k' => (Color::Black, CastlingSide::KingSide),
                'q' => (Color::Black, CastlingSide::QueenSide),
                _ => return Err(ParseError::CastlingRights(castling.to_string())),
            };
            rights.grant(color, side);
        }
        Ok(rights)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut castling = String::new();
        for (i, c) in "KQkq".chars().enumerate() {
            if self.0[i] {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        f.write_str(&castling)
    }
}

/// Castling destinations for the king of `color` on `king`, given the king's
/// already filtered one-step moves. Whether the landing square is attacked is
/// left to the caller's self-check filter.
pub fn castling_moves(
    board: &Board,
    rights: CastlingRights,
    color: Color,
    king: ChessField,
    king_steps: &[ChessField],
) -> Vec<ChessField> {
    let mut moves = Vec::new();
    if king != CastlingSide::king_home(color) {
        return moves;
    }

    for side in CastlingSide::ALL {
        if !rights.has(color, side) {
            continue;
        }
        let rook_home = side.rook_home(color);
        if !matches!(board.piece_at(rook_home), Some(p) if p.is(color, PieceType::Rook)) {
            continue;
        }
        let direction = side.direction();
        let Some(adjacent) = board.neighbor(king, direction) else {
            continue;
        };
        if !king_steps.contains(&adjacent) {
            continue;
        }
        if path_is_clear(board, king, rook_home, direction) {
            moves.push(side.king_landing(color));
        }
    }

    if !moves.is_empty() {
        debug!(%color, ?moves, "castling candidates");
    }
    moves
}

/// Whether every cell strictly between `from` and `to` along `direction` is empty.
fn path_is_clear(board: &Board, from: ChessField, to: ChessField, direction: Direction) -> bool {
    let mut current = board.neighbor(from, direction);
    while let Some(field) = current {
        if field == to {
            return true;
        }
        if !board.is_empty(field) {
            return false;
        }
        current = board.neighbor(field, direction);
    }
    false
}

/// The square a pawn skipped when it advanced two ranks from its home rank,
/// or `None` for any other move.
pub fn en_passant_target(kind: PieceType, color: Color, from: ChessField, to: ChessField) -> Option<ChessField> {
    if kind != PieceType::Pawn || from.row != color.pawn_row() || from.col != to.col {
        return None;
    }
    let skipped = from.step(color.forward())?;
    (skipped.step(color.forward()) == Some(to)).then_some(skipped)
}
