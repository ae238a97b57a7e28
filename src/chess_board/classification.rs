use super::graph::Board;
use super::{ChessField, PieceType};

/// Legal destinations of one piece, split into quiet moves and captures.
/// Both lists are sorted by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    pub empty: Vec<ChessField>,
    pub captures: Vec<ChessField>,
}

impl MoveSet {
    pub fn is_empty(&self) -> bool {
        self.empty.is_empty() && self.captures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.empty.len() + self.captures.len()
    }

    pub fn contains(&self, field: ChessField) -> bool {
        self.empty.contains(&field) || self.captures.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = ChessField> + '_ {
        self.empty.iter().chain(self.captures.iter()).copied()
    }
}

/// Splits `candidates` for the piece on `from` into quiet moves and captures.
/// Own-color destinations are dropped; pawns only move forward onto empty
/// cells and only move diagonally to capture, en passant included.
pub fn classify_moves(
    board: &Board,
    from: ChessField,
    candidates: &[ChessField],
    en_passant: Option<ChessField>,
) -> MoveSet {
    let mut moves = MoveSet::default();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    for &to in candidates {
        let target = board.piece_at(to);
        if piece.kind == PieceType::Pawn && to.col == from.col {
            if target.is_none() {
                moves.empty.push(to);
            }
            continue;
        }
        match target {
            Some(target) if target.color != piece.color => moves.captures.push(to),
            Some(_) => {}
            None if piece.kind != PieceType::Pawn => moves.empty.push(to),
            None => {
                if Some(to) == en_passant && is_en_passant_victim(board, from, to) {
                    moves.captures.push(to);
                }
            }
        }
    }

    moves.empty.sort();
    moves.captures.sort();
    moves
}

/// Whether an enemy pawn stands beside `from` on the file of `to`, where a
/// pawn that just skipped `to` would be.
pub fn is_en_passant_victim(board: &Board, from: ChessField, to: ChessField) -> bool {
    let Some(pawn) = board.piece_at(from) else {
        return false;
    };
    let victim = ChessField::new(from.row, to.col);
    matches!(board.piece_at(victim), Some(p) if p.is(pawn.color.opposite(), PieceType::Pawn))
}
