use rand_pcg::Pcg64;

use crate::bot::RandomMover;
use crate::chess_board::{ChessBoard, ParseError, INITIAL_POSITION};

/// Where a game starts and how the bot is seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub start_position: String,
    /// `None` seeds the bot from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_position: INITIAL_POSITION.to_string(),
            seed: None,
        }
    }
}

impl Config {
    pub fn load(&self) -> Result<ChessBoard, ParseError> {
        ChessBoard::from_fen(&self.start_position)
    }

    pub fn bot(&self) -> RandomMover<Pcg64> {
        match self.seed {
            Some(seed) => RandomMover::seeded(seed),
            None => RandomMover::from_entropy(),
        }
    }
}
