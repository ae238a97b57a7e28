use crate::chess_board::{ChessBoard, Move, PieceType};

const PROMOTION_PIECES: [PieceType; 4] = [PieceType::Queen, PieceType::Rook, PieceType::Bishop, PieceType::Knight];

/// Every position reachable in one move by the side to move. A move reaching
/// the last rank yields one successor per promotion piece.
fn successors(board: &ChessBoard) -> Vec<(Move, ChessBoard)> {
    let mut result = Vec::new();
    for mv in board.all_legal_moves(board.active_color) {
        let mut new_board = board.clone();
        if !new_board.make_move(mv.from, mv.to).promotion_pending {
            result.push((mv, new_board));
            continue;
        }
        for kind in PROMOTION_PIECES {
            let mut promoted = new_board.clone();
            if promoted.promote(mv.to, kind).is_ok() {
                result.push((mv.with_promotion(kind), promoted));
            }
        }
    }
    result
}

pub fn perft(board: &ChessBoard, depth: u8) -> u64 {
    if depth == 0 {
        return 1u64;
    }
    successors(board)
        .iter()
        .map(|(_, new_board)| perft(new_board, depth - 1))
        .sum()
}

/// Node counts below each root move, sorted by move.
pub fn divide(board: &ChessBoard, depth: u8) -> Vec<(Move, u64)> {
    let mut result: Vec<_> = successors(board)
        .iter()
        .map(|(mv, new_board)| (*mv, perft(new_board, depth.saturating_sub(1))))
        .collect();
    result.sort();
    result
}
