pub mod apply;
pub mod check;
pub mod classification;
pub mod error;
pub mod fen;
pub mod graph;
pub mod model;
pub mod move_generation;
pub mod special_moves;

mod chess_board;
#[cfg(test)]
mod test_utils;

pub use apply::MoveKind;
pub use chess_board::{fifty_move_draw, ChessBoard, GameStatus, MoveEffects, FIFTY_MOVE_LIMIT};
pub use classification::MoveSet;
pub use error::{MoveError, ParseError};
pub use fen::INITIAL_POSITION;
pub use model::{ChessField, Color, Direction, Move, Piece, PieceType};
pub use special_moves::{CastlingRights, CastlingSide};
