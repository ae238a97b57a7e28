//! A bot that plays uniformly random legal moves.

use rand::prelude::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::chess_board::{ChessBoard, Move, PieceType};

const PROMOTION_PIECES: [PieceType; 4] = [PieceType::Queen, PieceType::Rook, PieceType::Bishop, PieceType::Knight];

pub struct RandomMover<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomMover<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A legal move for the side to move, or `None` when there is none.
    /// Pawns reaching the last rank get a random promotion piece.
    pub fn choose(&mut self, board: &ChessBoard) -> Option<Move> {
        let moves = board.all_legal_moves(board.active_color);
        let mv = *moves.choose(&mut self.rng)?;
        let promotes = matches!(
            board.board.piece_at(mv.from),
            Some(p) if p.kind == PieceType::Pawn && mv.to.row == p.color.promotion_row()
        );
        if promotes {
            let kind = *PROMOTION_PIECES.choose(&mut self.rng)?;
            return Some(mv.with_promotion(kind));
        }
        Some(mv)
    }
}

impl RandomMover<Pcg64> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(Pcg64::from_entropy())
    }
}
