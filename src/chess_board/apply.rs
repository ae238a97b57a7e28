//! Board mutation for a resolved move, with an exact undo record.

use std::ops::Deref;

use super::graph::Board;
use super::special_moves::CastlingSide;
use super::{ChessField, Piece, PieceType};

/// What a move does beyond relocating the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Regular,
    /// The captured pawn stands beside the source, on the destination's file.
    EnPassant,
    Castle(CastlingSide),
}

/// Prior occupants of every cell a move touched, in the order they were touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    cells: Vec<(ChessField, Option<Piece>)>,
}

impl Snapshot {
    fn record(&mut self, board: &Board, field: ChessField) {
        self.cells.push((field, board.piece_at(field).copied()));
    }

    /// Restores every recorded cell, newest first.
    pub fn revert(self, board: &mut Board) {
        for (field, piece) in self.cells.into_iter().rev() {
            board.set(field, piece);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub captured: Option<Piece>,
    pub promotion_pending: bool,
}

/// Applies a move already known to be legal.
pub fn apply_move(board: &mut Board, from: ChessField, to: ChessField, kind: MoveKind) -> (Snapshot, Applied) {
    let mut snapshot = Snapshot::default();
    snapshot.record(board, from);
    snapshot.record(board, to);
    let mut captured = board.relocate(from, to);

    match kind {
        MoveKind::Regular => {}
        MoveKind::EnPassant => {
            let victim = ChessField::new(from.row, to.col);
            snapshot.record(board, victim);
            captured = board.take(victim);
        }
        MoveKind::Castle(side) => {
            if let Some(king) = board.piece_at(to).copied() {
                let rook_from = side.rook_home(king.color);
                let rook_to = side.rook_landing(king.color);
                snapshot.record(board, rook_from);
                snapshot.record(board, rook_to);
                board.relocate(rook_from, rook_to);
            }
        }
    }

    let promotion_pending = matches!(
        board.piece_at(to),
        Some(p) if p.kind == PieceType::Pawn && to.row == p.color.promotion_row()
    );
    (snapshot, Applied { captured, promotion_pending })
}

/// A tentatively applied move. Dropping the trial reverts the board, on every
/// exit path.
pub struct Trial<'a> {
    board: &'a mut Board,
    snapshot: Option<Snapshot>,
}

impl<'a> Trial<'a> {
    pub fn new(board: &'a mut Board, from: ChessField, to: ChessField, kind: MoveKind) -> Self {
        let (snapshot, _) = apply_move(board, from, to, kind);
        Self {
            board,
            snapshot: Some(snapshot),
        }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            snapshot.revert(self.board);
        }
    }
}
