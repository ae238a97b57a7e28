//! Pseudo-legal destinations per piece kind. Nothing here looks at check
//! safety; own-color destinations are removed by the caller.

use super::graph::Board;
use super::{ChessField, Color, Direction, PieceType};

/// Pseudo-legal destinations for the piece on `from`, empty if the cell is empty.
pub fn generate_pseudo_moves(board: &Board, from: ChessField) -> Vec<ChessField> {
    match board.piece_at(from) {
        Some(piece) => match piece.kind {
            PieceType::Pawn => generate_pawn_moves(board, from, piece.color),
            PieceType::Knight => knight_leaps(board, from),
            PieceType::Bishop => generate_sliding_moves(board, from, &Direction::DIAGONAL),
            PieceType::Rook => generate_sliding_moves(board, from, &Direction::ORTHOGONAL),
            PieceType::Queen => generate_sliding_moves(board, from, &Direction::ALL),
            PieceType::King => king_steps(board, from),
        },
        None => Vec::new(),
    }
}

/// Walks every direction until the board edge or the first occupied cell,
/// which is included regardless of its color.
pub fn generate_sliding_moves(board: &Board, from: ChessField, directions: &[Direction]) -> Vec<ChessField> {
    let mut moves = Vec::new();
    for &direction in directions {
        let mut current = board.neighbor(from, direction);
        while let Some(field) = current {
            moves.push(field);
            if !board.is_empty(field) {
                break; // Block sliding
            }
            current = board.neighbor(field, direction);
        }
    }
    moves
}

/// Knight destinations: one orthogonal leg, then one of the two diagonals
/// flanking it.
pub fn knight_leaps(board: &Board, from: ChessField) -> Vec<ChessField> {
    let mut moves = Vec::with_capacity(8);
    for leg in Direction::ORTHOGONAL {
        if let Some(corner) = board.neighbor(from, leg) {
            for diagonal in leg.flanking_diagonals() {
                if let Some(field) = board.neighbor(corner, diagonal) {
                    moves.push(field);
                }
            }
        }
    }
    moves
}

pub fn king_steps(board: &Board, from: ChessField) -> Vec<ChessField> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| board.neighbor(from, direction))
        .collect()
}

/// Squares a pawn of `color` standing on `from` would capture onto, whatever
/// occupies them.
pub fn pawn_diagonals(board: &Board, from: ChessField, color: Color) -> Vec<ChessField> {
    Direction::pawn_diagonals(color.forward())
        .iter()
        .filter_map(|&direction| board.neighbor(from, direction))
        .collect()
}

fn generate_pawn_moves(board: &Board, from: ChessField, color: Color) -> Vec<ChessField> {
    let mut moves = Vec::with_capacity(4);
    let forward = color.forward();

    // Regular forward move
    if let Some(one_forward) = board.neighbor(from, forward) {
        if board.is_empty(one_forward) {
            moves.push(one_forward);

            // Double move from start position
            if from.row == color.pawn_row() {
                if let Some(two_forward) = board.neighbor(one_forward, forward) {
                    if board.is_empty(two_forward) {
                        moves.push(two_forward);
                    }
                }
            }
        }
    }

    // Diagonals are proposed unconditionally, classification decides
    moves.extend(pawn_diagonals(board, from, color));
    moves
}
