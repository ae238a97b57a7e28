pub mod bot;
pub mod chess_board;
pub mod config;
pub mod perft;

pub use bot::RandomMover;
pub use chess_board::{ChessBoard, ChessField, Color, GameStatus, Move, MoveError, MoveSet, ParseError, PieceType};
pub use config::Config;
