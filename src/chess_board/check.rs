//! Attack detection. Rays and leaps are walked outward from the attacked
//! square, and only the first piece met along each one can be an attacker.

use super::graph::Board;
use super::move_generation::{king_steps, knight_leaps, pawn_diagonals};
use super::{ChessField, Color, Direction, PieceType};

/// How an attacker reaches a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Geometry {
    Orthogonal,
    Diagonal,
    Knight,
    King,
    Pawn,
}

/// Which piece kinds attack along which geometry.
const ATTACKERS: [(Geometry, &[PieceType]); 5] = [
    (Geometry::Orthogonal, &[PieceType::Rook, PieceType::Queen]),
    (Geometry::Diagonal, &[PieceType::Bishop, PieceType::Queen]),
    (Geometry::Knight, &[PieceType::Knight]),
    (Geometry::King, &[PieceType::King]),
    (Geometry::Pawn, &[PieceType::Pawn]),
];

/// Whether the piece on `field` is attacked by the other color. An empty
/// field is never attacked by this definition.
pub fn is_square_attacked(board: &Board, field: ChessField) -> bool {
    match board.piece_at(field) {
        Some(piece) => is_square_attacked_by_color(board, field, piece.color.opposite()),
        None => false,
    }
}

/// Whether any piece of `attacker` could capture on `field`.
pub fn is_square_attacked_by_color(board: &Board, field: ChessField, attacker: Color) -> bool {
    ATTACKERS.iter().any(|&(geometry, kinds)| {
        sources(board, field, attacker, geometry)
            .into_iter()
            .any(|source| matches!(board.piece_at(source), Some(p) if p.color == attacker && kinds.contains(&p.kind)))
    })
}

/// Fields from which an attacker using `geometry` could reach `field`.
fn sources(board: &Board, field: ChessField, attacker: Color, geometry: Geometry) -> Vec<ChessField> {
    match geometry {
        Geometry::Orthogonal => rays(board, field, &Direction::ORTHOGONAL),
        Geometry::Diagonal => rays(board, field, &Direction::DIAGONAL),
        Geometry::Knight => knight_leaps(board, field),
        Geometry::King => king_steps(board, field),
        // An enemy pawn stands where a defending pawn on `field` would capture.
        Geometry::Pawn => pawn_diagonals(board, field, attacker.opposite()),
    }
}

fn rays(board: &Board, field: ChessField, directions: &[Direction]) -> Vec<ChessField> {
    directions
        .iter()
        .filter_map(|&direction| board.first_occupied(field, direction))
        .collect()
}
