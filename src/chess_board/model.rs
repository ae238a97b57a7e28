use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction in which pawns of this color advance.
    pub fn forward(&self) -> Direction {
        match self {
            Color::White => Direction::Up,
            Color::Black => Direction::Down,
        }
    }

    pub fn back_row(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn pawn_row(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn promotion_row(&self) -> u8 {
        self.opposite().back_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

/// A piece standing on the board. `field` mirrors the cell holding the piece
/// and is rewritten whenever the piece moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
    pub field: ChessField,
}

impl Piece {
    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is(&self, color: Color, kind: PieceType) -> bool {
        self.color == color && self.kind == kind
    }
}

/// Board coordinate. `row` 0 is rank 1, `col` 0 is file a.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChessField {
    pub row: u8,
    pub col: u8,
}

impl ChessField {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "field ({row}, {col}) is off the board");
        Self { row, col }
    }

    /// Packed arena index, a1 = 0 and h8 = 63.
    pub fn index(&self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::new((index / 8) as u8, (index % 8) as u8)
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, ParseError> {
        let mut chars = algebraic.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                Ok(Self::new(rank as u8 - b'1', file as u8 - b'a'))
            }
            _ => Err(ParseError::InvalidSquare(algebraic.to_string())),
        }
    }

    pub fn as_algebraic(&self) -> String {
        self.to_string()
    }

    /// Pure geometry: the neighboring field in `direction`, if it is on the board.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Same square seen from the other side of the board.
    pub fn mirrored(&self) -> Self {
        Self::new(7 - self.row, self.col)
    }
}

impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for ChessField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

/// Compass directions, "up" pointing towards rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];
    pub const ORTHOGONAL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Slot of this direction in a cell's neighbor table.
    pub fn index(self) -> usize {
        self as usize
    }

    fn offset(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::UpLeft => (1, -1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (-1, 1),
        }
    }

    /// The two diagonals that continue an orthogonal knight leg. Diagonal
    /// directions have no flank and return themselves twice.
    pub fn flanking_diagonals(self) -> [Direction; 2] {
        match self {
            Direction::Up => [Direction::UpLeft, Direction::UpRight],
            Direction::Right => [Direction::UpRight, Direction::DownRight],
            Direction::Down => [Direction::DownRight, Direction::DownLeft],
            Direction::Left => [Direction::DownLeft, Direction::UpLeft],
            diagonal => [diagonal, diagonal],
        }
    }

    /// Forward diagonals for a pawn advancing in `forward`.
    pub fn pawn_diagonals(forward: Direction) -> [Direction; 2] {
        match forward {
            Direction::Down => [Direction::DownLeft, Direction::DownRight],
            _ => [Direction::UpLeft, Direction::UpRight],
        }
    }
}

/// A source and destination pair, optionally carrying the piece a pawn
/// promotes to.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Move {
    pub from: ChessField,
    pub to: ChessField,
    pub promotion: Option<PieceType>,
}

impl Move {
    pub fn new(from: ChessField, to: ChessField) -> Self {
        Self { from, to, promotion: None }
    }

    pub fn with_promotion(mut self, promotion: PieceType) -> Self {
        self.promotion = Some(promotion);
        self
    }

    pub fn as_algebraic(&self) -> String {
        let base_move = format!("{}{}", self.from, self.to);
        if let Some(promo) = self.promotion {
            base_move + &promo.to_string().to_lowercase()
        } else {
            base_move
        }
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidMove(algebraic.to_string());
        if !algebraic.is_ascii() || !(4..=5).contains(&algebraic.len()) {
            return Err(invalid());
        }
        let from = ChessField::from_algebraic(&algebraic[0..2]).map_err(|_| invalid())?;
        let to = ChessField::from_algebraic(&algebraic[2..4]).map_err(|_| invalid())?;
        let promotion = match algebraic.chars().nth(4) {
            None => None,
            Some(c) => match PieceType::from_char(c) {
                Some(kind @ (PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Knight)) => Some(kind),
                _ => return Err(invalid()),
            },
        };
        Ok(Self { from, to, promotion })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_algebraic())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}
