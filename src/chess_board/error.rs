//! Error types for position parsing and checked move commitment.

use thiserror::Error;

use super::{ChessField, PieceType};

/// Malformed position or move text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid FEN string: expected 1, 4 or 6 fields, got {0}")]
    FieldCount(usize),

    #[error("Invalid FEN string: expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("Invalid FEN string: row {row} covers {files} files instead of 8")]
    RowWidth { row: usize, files: usize },

    #[error("Invalid FEN string: empty-square run in row {row} must be 1-8, got '{run}'")]
    EmptyRun { row: usize, run: char },

    #[error("Invalid piece character in FEN string: {0}")]
    UnknownPiece(char),

    #[error("Invalid FEN string: invalid active color '{0}'")]
    ActiveColor(String),

    #[error("Invalid FEN string: invalid castling rights '{0}'")]
    CastlingRights(String),

    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Invalid FEN string: {field} is not a valid number: {value}")]
    Counter { field: &'static str, value: String },

    #[error("Invalid move: {0}")]
    InvalidMove(String),
}

/// Rejected request to commit a move through the checked API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("No piece at source square {0}")]
    NoPieceAtSquare(ChessField),

    #[error("Piece at square {0} does not belong to the side to move")]
    WrongPieceColor(ChessField),

    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: ChessField, to: ChessField },

    #[error("A pawn promotion is pending on {0}")]
    PromotionPending(ChessField),

    #[error("No pawn awaits promotion on {0}")]
    NoPromotionPending(ChessField),

    #[error("Pawns cannot promote to {0:?}")]
    InvalidPromotion(PieceType),
}
