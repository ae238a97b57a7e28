//! The board graph: 64 cells in an arena, each linked to its eight geometric
//! neighbors. Links are computed once in [`Board::build`] and never change.

use std::fmt;

use super::{ChessField, Color, Direction, Piece, PieceType};

/// One entry of the flat placement list consumed by [`Board::build`].
pub type Placement = Option<(Color, PieceType)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub piece: Option<Piece>,
    neighbors: [Option<ChessField>; 8],
}

impl Cell {
    pub fn neighbor(&self, direction: Direction) -> Option<ChessField> {
        self.neighbors[direction.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// Builds the board from 64 entries in FEN order: rank 8 to 1, file a to h.
    pub fn build(placement: &[Placement; 64]) -> Self {
        let mut cells = [Cell {
            piece: None,
            neighbors: [None; 8],
        }; 64];

        for (index, cell) in cells.iter_mut().enumerate() {
            let field = ChessField::from_index(index);
            for direction in Direction::ALL {
                cell.neighbors[direction.index()] = field.step(direction);
            }
        }

        for (fen_index, entry) in placement.iter().enumerate() {
            if let Some((color, kind)) = *entry {
                let field = Self::fen_order_field(fen_index);
                cells[field.index()].piece = Some(Piece { color, kind, field });
            }
        }

        Self { cells }
    }

    pub fn empty() -> Self {
        Self::build(&[None; 64])
    }

    /// Field at position `fen_index` of the FEN-ordered placement list.
    pub fn fen_order_field(fen_index: usize) -> ChessField {
        ChessField::new(7 - (fen_index / 8) as u8, (fen_index % 8) as u8)
    }

    /// All fields in FEN order.
    pub fn fields() -> impl Iterator<Item = ChessField> {
        (0..64).map(Self::fen_order_field)
    }

    pub fn cell(&self, field: ChessField) -> &Cell {
        &self.cells[field.index()]
    }

    pub fn piece_at(&self, field: ChessField) -> Option<&Piece> {
        self.cells[field.index()].piece.as_ref()
    }

    pub fn is_empty(&self, field: ChessField) -> bool {
        self.cells[field.index()].is_empty()
    }

    pub fn neighbor(&self, field: ChessField, direction: Direction) -> Option<ChessField> {
        self.cells[field.index()].neighbor(direction)
    }

    /// First occupied field walking from `field` in `direction`, excluding `field` itself.
    pub fn first_occupied(&self, field: ChessField, direction: Direction) -> Option<ChessField> {
        let mut current = self.neighbor(field, direction);
        while let Some(next) = current {
            if !self.is_empty(next) {
                return Some(next);
            }
            current = self.neighbor(next, direction);
        }
        None
    }

    /// Overwrites the occupant of `field`, keeping the piece's back-reference in sync.
    pub fn set(&mut self, field: ChessField, piece: Option<Piece>) {
        self.cells[field.index()].piece = piece.map(|mut p| {
            p.field = field;
            p
        });
    }

    pub fn take(&mut self, field: ChessField) -> Option<Piece> {
        self.cells[field.index()].piece.take()
    }

    /// Moves the occupant of `from` to `to`, returning whatever stood on `to`.
    pub fn relocate(&mut self, from: ChessField, to: ChessField) -> Option<Piece> {
        let moving = self.take(from);
        let captured = self.take(to);
        self.set(to, moving);
        captured
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        Self::fields().filter_map(move |field| self.piece_at(field).filter(|p| p.color == color))
    }

    /// Linear scan for the king of `color`.
    pub fn find_king(&self, color: Color) -> Option<ChessField> {
        self.pieces(color).find(|p| p.kind == PieceType::King).map(|p| p.field)
    }

    /// The FEN-ordered placement list this board would be built from.
    pub fn placement(&self) -> [Placement; 64] {
        let mut placement = [None; 64];
        for (fen_index, field) in Self::fields().enumerate() {
            placement[fen_index] = self.piece_at(field).map(|p| (p.color, p.kind));
        }
        placement
    }
}

impl fmt::Display for Board {
    /// FEN piece placement: rows from rank 8 down, empty runs as digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            let mut empty_count = 0;
            for col in 0..8 {
                match self.piece_at(ChessField::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{}", empty_count)?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{}", empty_count)?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(algebraic: &str) -> ChessField {
        ChessField::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn test_neighbor_links_at_edges() {
        let board = Board::empty();
        let a1 = board.cell(field("a1"));
        assert_eq!(a1.neighbor(Direction::Left), None);
        assert_eq!(a1.neighbor(Direction::Down), None);
        assert_eq!(a1.neighbor(Direction::DownRight), None);
        assert_eq!(a1.neighbor(Direction::UpLeft), None);
        assert_eq!(a1.neighbor(Direction::Right), Some(field("b1")));
        assert_eq!(a1.neighbor(Direction::Up), Some(field("a2")));
        assert_eq!(a1.neighbor(Direction::UpRight), Some(field("b2")));

        let h8 = board.cell(field("h8"));
        assert_eq!(h8.neighbor(Direction::Right), None);
        assert_eq!(h8.neighbor(Direction::Up), None);
        assert_eq!(h8.neighbor(Direction::DownLeft), Some(field("g7")));
    }

    #[test]
    fn test_interior_cell_has_all_neighbors() {
        let board = Board::empty();
        let d4 = board.cell(field("d4"));
        for direction in Direction::ALL {
            assert!(d4.neighbor(direction).is_some(), "{:?}", direction);
        }
        assert_eq!(d4.neighbor(Direction::UpLeft), Some(field("c5")));
        assert_eq!(d4.neighbor(Direction::DownRight), Some(field("e3")));
    }

    #[test]
    fn test_build_sets_back_references() {
        let mut placement = [None; 64];
        placement[0] = Some((Color::Black, PieceType::Rook));
        placement[63] = Some((Color::White, PieceType::Rook));
        let board = Board::build(&placement);

        let a8 = board.piece_at(field("a8")).unwrap();
        assert_eq!(a8.field, field("a8"));
        assert_eq!(a8.color, Color::Black);
        let h1 = board.piece_at(field("h1")).unwrap();
        assert_eq!(h1.field, field("h1"));
        assert_eq!(board.placement(), placement);
    }

    #[test]
    fn test_relocate_updates_back_reference() {
        let mut placement = [None; 64];
        placement[52] = Some((Color::White, PieceType::Pawn));
        let mut board = Board::build(&placement);
        assert!(board.relocate(field("e2"), field("e4")).is_none());
        assert!(board.is_empty(field("e2")));
        assert_eq!(board.piece_at(field("e4")).unwrap().field, field("e4"));
    }

    #[test]
    fn test_display_run_length_encodes_rows() {
        let mut placement = [None; 64];
        placement[4] = Some((Color::Black, PieceType::King));
        placement[60] = Some((Color::White, PieceType::King));
        placement[63] = Some((Color::White, PieceType::Rook));
        assert_eq!(Board::build(&placement).to_string(), "4k3/8/8/8/8/8/8/4K2R");
        assert_eq!(Board::empty().to_string(), "8/8/8/8/8/8/8/8");
    }
}
