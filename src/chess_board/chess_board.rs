use tracing::{debug, trace};

use super::apply::{apply_move, MoveKind, Trial};
use super::check::is_square_attacked;
use super::classification::{classify_moves, is_en_passant_victim, MoveSet};
use super::error::{MoveError, ParseError};
use super::fen::{self, Position};
use super::graph::Board;
use super::move_generation::generate_pseudo_moves;
use super::special_moves::{castling_moves, en_passant_target, CastlingRights, CastlingSide};
use super::{ChessField, Color, Move, Piece, PieceType};

/// Half-move clock value at which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 50;

pub fn fifty_move_draw(halfmove_clock: u32) -> bool {
    halfmove_clock >= FIFTY_MOVE_LIMIT
}

/// What committing a move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffects {
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    /// A pawn reached its last rank; [`ChessBoard::promote`] picks its replacement.
    pub promotion_pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveDraw,
}

/// The board operator: the board graph plus the position metadata, answering
/// legality queries and committing moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub board: Board,
    pub active_color: Color,
    pub castling_rights: CastlingRights,
    pub en_passant: Option<ChessField>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pending_promotion: Option<ChessField>,
}

impl ChessBoard {
    pub fn from_position(position: Position) -> Self {
        Self {
            board: Board::build(&position.placement),
            active_color: position.active_color,
            castling_rights: position.castling_rights,
            en_passant: position.en_passant,
            halfmove_clock: position.halfmove_clock,
            fullmove_number: position.fullmove_number,
            pending_promotion: None,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        fen::load_position(fen).map(Self::from_position)
    }

    pub fn to_fen(&self) -> String {
        let en_passant_square = match self.en_passant {
            Some(square) => square.as_algebraic(),
            None => "-".to_string(),
        };
        let active_color = if self.active_color == Color::White { "w" } else { "b" };
        format!(
            "{} {} {} {} {} {}",
            self.board, active_color, self.castling_rights, en_passant_square, self.halfmove_clock, self.fullmove_number
        )
    }

    pub fn pending_promotion(&self) -> Option<ChessField> {
        self.pending_promotion
    }
}

impl ChessBoard {
    /// Legal destinations of the `color` piece on `from`. An empty square or
    /// a piece of the other color yields an empty set.
    pub fn legal_moves(&self, from: ChessField, color: Color) -> MoveSet {
        let mut scratch = self.board.clone();
        self.legal_moves_on(&mut scratch, from, color)
    }

    /// Every legal move of `color`, computed on a single scratch board.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut scratch = self.board.clone();
        let sources: Vec<ChessField> = self.board.pieces(color).map(|p| p.field).collect();
        let mut moves = Vec::new();
        for from in sources {
            for to in self.legal_moves_on(&mut scratch, from, color).iter() {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }

    fn legal_moves_on(&self, scratch: &mut Board, from: ChessField, color: Color) -> MoveSet {
        let piece = match scratch.piece_at(from) {
            Some(&piece) if piece.color == color => piece,
            _ => return MoveSet::default(),
        };

        let candidates: Vec<ChessField> = generate_pseudo_moves(scratch, from)
            .into_iter()
            .filter(|&to| !matches!(scratch.piece_at(to), Some(p) if p.color == color))
            .collect();
        let mut legal = self.filter_self_check(scratch, from, &candidates, color);

        if piece.kind == PieceType::King && !is_square_attacked(scratch, from) {
            let steps: Vec<ChessField> = legal.iter().copied().filter(|to| to.row == from.row).collect();
            let castles = castling_moves(scratch, self.castling_rights, color, from, &steps);
            legal.extend(self.filter_self_check(scratch, from, &castles, color));
        }

        classify_moves(scratch, from, &legal, self.en_passant)
    }

    /// Keeps the destinations that do not leave the king of `color` attacked.
    fn filter_self_check(
        &self,
        scratch: &mut Board,
        from: ChessField,
        candidates: &[ChessField],
        color: Color,
    ) -> Vec<ChessField> {
        let mut safe = Vec::with_capacity(candidates.len());
        for &to in candidates {
            let kind = self.resolve_kind(scratch, from, to);
            let trial = Trial::new(scratch, from, to, kind);
            let king = king_position(&trial, color);
            if is_square_attacked(&trial, king) {
                trace!(%from, %to, "leaves the king in check");
            } else {
                safe.push(to);
            }
        }
        safe
    }

    fn resolve_kind(&self, board: &Board, from: ChessField, to: ChessField) -> MoveKind {
        let Some(piece) = board.piece_at(from) else {
            return MoveKind::Regular;
        };
        match piece.kind {
            PieceType::King if from == CastlingSide::king_home(piece.color) => {
                CastlingSide::from_king_move(from, to).map_or(MoveKind::Regular, MoveKind::Castle)
            }
            PieceType::Pawn
                if from.col != to.col
                    && board.is_empty(to)
                    && Some(to) == self.en_passant
                    && is_en_passant_victim(board, from, to) =>
            {
                MoveKind::EnPassant
            }
            _ => MoveKind::Regular,
        }
    }

    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_square_attacked(&self.board, king_position(&self.board, color))
    }

    fn has_legal_moves(&self, color: Color) -> bool {
        let mut scratch = self.board.clone();
        let sources: Vec<ChessField> = self.board.pieces(color).map(|p| p.field).collect();
        sources
            .into_iter()
            .any(|from| !self.legal_moves_on(&mut scratch, from, color).is_empty())
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_draw_by_fifty_move_rule(&self) -> bool {
        fifty_move_draw(self.halfmove_clock)
    }

    /// State of the game for the side to move.
    pub fn status(&self) -> GameStatus {
        let color = self.active_color;
        if !self.has_legal_moves(color) {
            if self.is_king_in_check(color) {
                GameStatus::Checkmate { winner: color.opposite() }
            } else {
                GameStatus::Stalemate
            }
        } else if self.is_draw_by_fifty_move_rule() {
            GameStatus::FiftyMoveDraw
        } else {
            GameStatus::Ongoing
        }
    }
}

impl ChessBoard {
    /// Commits a move already known to be legal and hands the turn over.
    /// Moving from an empty square is a caller bug and panics.
    pub fn make_move(&mut self, from: ChessField, to: ChessField) -> MoveEffects {
        let Some(moving) = self.board.piece_at(from).copied() else {
            panic!("no piece on {from} to move to {to}: {}", self.board);
        };
        let kind = self.resolve_kind(&self.board, from, to);
        let (_, applied) = apply_move(&mut self.board, from, to, kind);

        self.castling_rights.update_after_move(from, to);
        self.en_passant = en_passant_target(moving.kind, moving.color, from, to);

        if moving.kind == PieceType::Pawn || applied.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if moving.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.active_color = moving.color.opposite();
        self.pending_promotion = applied.promotion_pending.then_some(to);

        debug!(
            %from,
            %to,
            ?kind,
            captured = ?applied.captured.map(|p| p.to_char()),
            promotion_pending = applied.promotion_pending,
            "move committed"
        );
        MoveEffects {
            kind,
            captured: applied.captured,
            promotion_pending: applied.promotion_pending,
        }
    }

    /// Replaces the pawn waiting on `field` with a piece of `kind`.
    pub fn promote(&mut self, field: ChessField, kind: PieceType) -> Result<(), MoveError> {
        if self.pending_promotion != Some(field) {
            return Err(MoveError::NoPromotionPending(field));
        }
        if matches!(kind, PieceType::Pawn | PieceType::King) {
            return Err(MoveError::InvalidPromotion(kind));
        }
        let pawn = self.board.piece_at(field).copied().ok_or(MoveError::NoPromotionPending(field))?;
        self.board.set(field, Some(Piece { kind, ..pawn }));
        self.pending_promotion = None;
        debug!(%field, ?kind, "pawn promoted");
        Ok(())
    }

    /// Checked commit for moves coming from outside: the source must hold a
    /// piece of the side to move and the destination must be legal. A pending
    /// promotion is resolved with the move's promotion piece, if it carries one.
    pub fn play(&mut self, mv: Move) -> Result<MoveEffects, MoveError> {
        if let Some(field) = self.pending_promotion {
            return Err(MoveError::PromotionPending(field));
        }
        let piece = self.board.piece_at(mv.from).copied().ok_or(MoveError::NoPieceAtSquare(mv.from))?;
        if piece.color != self.active_color {
            return Err(MoveError::WrongPieceColor(mv.from));
        }
        if !self.legal_moves(mv.from, piece.color).contains(mv.to) {
            return Err(MoveError::IllegalMove { from: mv.from, to: mv.to });
        }
        if let Some(kind) = mv.promotion {
            let promotes = piece.kind == PieceType::Pawn && mv.to.row == piece.color.promotion_row();
            if !promotes || matches!(kind, PieceType::Pawn | PieceType::King) {
                return Err(MoveError::InvalidPromotion(kind));
            }
        }

        let effects = self.make_move(mv.from, mv.to);
        if let (true, Some(kind)) = (effects.promotion_pending, mv.promotion) {
            self.promote(mv.to, kind)?;
        }
        Ok(effects)
    }
}

/// The king of `color`. A board without one is corrupt.
fn king_position(board: &Board, color: Color) -> ChessField {
    match board.find_king(color) {
        Some(field) => field,
        None => panic!("board has no {color} king: {board}"),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fen::INITIAL_POSITION;
    use super::super::test_utils::assert_fields;
    use super::*;

    fn field(algebraic: &str) -> ChessField {
        ChessField::from_algebraic(algebraic).unwrap()
    }

    fn legal(board: &ChessBoard, square: &str, color: Color) -> MoveSet {
        board.legal_moves(field(square), color)
    }

    #[test]
    fn test_knight_in_initial_position() {
        let board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        let moves = legal(&board, "g1", Color::White);
        assert_eq!(moves.empty, vec![field("f3"), field("h3")]);
        assert!(moves.captures.is_empty());
    }

    #[test]
    fn test_king_boxed_in() {
        let board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        assert!(legal(&board, "e1", Color::White).is_empty());
    }

    #[test]
    fn test_requests_for_empty_or_enemy_squares() {
        let board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        assert!(legal(&board, "e4", Color::White).is_empty());
        assert!(legal(&board, "e7", Color::White).is_empty());
        assert!(!legal(&board, "e7", Color::Black).is_empty());
    }

    #[test]
    fn test_initial_position_has_twenty_moves_per_side() {
        let board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        assert_eq!(board.all_legal_moves(Color::White).len(), 20);
        assert_eq!(board.all_legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_mirrored_pieces_have_mirrored_moves() {
        let board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        for piece in board.board.pieces(Color::White) {
            let white = board.legal_moves(piece.field, Color::White);
            let black = board.legal_moves(piece.field.mirrored(), Color::Black);
            let mut mirrored: Vec<_> = black.iter().map(|f| f.mirrored()).collect();
            mirrored.sort();
            let mut expected: Vec<_> = white.iter().collect();
            expected.sort();
            assert_eq!(mirrored, expected, "{}", piece.field);
        }
    }

    #[test]
    fn test_both_castles_available() {
        let board = ChessBoard::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = legal(&board, "e1", Color::White);
        assert_fields(moves.empty, vec!["c1", "d1", "d2", "e2", "f1", "f2", "g1"]);
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let board = ChessBoard::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1").unwrap();
        let moves = legal(&board, "e1", Color::White);
        assert!(!moves.contains(field("c1")));
        assert!(!moves.contains(field("g1")));
        assert!(moves.contains(field("e2")));
    }

    #[test]
    fn test_no_castling_through_attacked_square() {
        // f1 is covered by the rook on f8, d1 and c1 are free
        let board = ChessBoard::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let moves = legal(&board, "e1", Color::White);
        assert!(!moves.contains(field("g1")));
        assert!(!moves.contains(field("f1")));
        assert!(moves.contains(field("c1")));
    }

    #[test]
    fn test_no_castling_onto_attacked_square() {
        let board = ChessBoard::from_fen("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let moves = legal(&board, "e1", Color::White);
        assert!(moves.contains(field("f1")));
        assert!(!moves.contains(field("g1")));
        assert!(moves.contains(field("c1")));
    }

    #[test]
    fn test_queen_side_castle_ignores_attacked_b_file() {
        let board = ChessBoard::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        assert!(legal(&board, "e1", Color::White).contains(field("c1")));
    }

    #[test]
    fn test_en_passant_capture_is_offered() {
        let board =
            ChessBoard::from_fen("rnbqkbnr/p1pp3p/5p1b/P3pPp1/1pP1P3/RB5Q/1P1P2PP/1NB1K1NR w Kkq g6 0 1").unwrap();
        let moves = legal(&board, "f5", Color::White);
        assert_fields(moves.captures, vec!["g6"]);
        assert!(moves.empty.is_empty());
    }

    #[test]
    fn test_en_passant_exposing_the_king_is_illegal() {
        let board = ChessBoard::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1").unwrap();
        let moves = legal(&board, "b5", Color::White);
        assert!(!moves.contains(field("c6")));
        assert_fields(moves.empty, vec!["b6"]);
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let board = ChessBoard::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(legal(&board, "e2", Color::White).is_empty());
    }

    #[test]
    fn test_checkmate() {
        let board =
            ChessBoard::from_fen("1nr1k3/1Q4R1/pB1pp1N1/1ppP1p2/4bPPp/1N1nbq2/P1P3rP/2PK4 w - - 0 1").unwrap();
        assert!(board.is_king_in_check(Color::White));
        assert!(board.is_checkmate(Color::White));
        assert!(!board.is_stalemate(Color::White));
        assert_eq!(board.status(), GameStatus::Checkmate { winner: Color::Black });

        let board = ChessBoard::from_fen("1k6/8/8/8/8/8/PPn5/KN6 w - - 0 1").unwrap();
        assert!(board.is_checkmate(Color::White));
    }

    #[test]
    fn test_stalemate() {
        let board = ChessBoard::from_fen("1k6/8/8/8/8/1r6/7r/K7 w - - 0 1").unwrap();
        assert!(board.is_stalemate(Color::White));
        assert!(!board.is_checkmate(Color::White));
        assert_eq!(board.status(), GameStatus::Stalemate);
        for piece in board.board.pieces(Color::White) {
            assert!(board.legal_moves(piece.field, Color::White).is_empty());
        }
    }

    #[test]
    fn test_legal_moves_never_leave_the_king_in_check() {
        let board =
            ChessBoard::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
        let moves = board.all_legal_moves(Color::White);
        assert_eq!(moves.len(), 48);
        for mv in moves {
            let mut next = board.clone();
            next.make_move(mv.from, mv.to);
            assert!(!next.is_king_in_check(Color::White), "{}", mv);
        }
    }

    #[test]
    fn test_legal_moves_are_deterministic() {
        let board = ChessBoard::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let first = legal(&board, "e1", Color::White);
        assert_eq!(first, legal(&board, "e1", Color::White));
        assert_eq!(board, ChessBoard::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap());
    }

    #[test]
    fn test_double_step_opens_and_closes_en_passant_window() {
        let mut board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        board.make_move(field("a2"), field("a4"));
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.en_passant, Some(field("a3")));
        assert_eq!(board.active_color, Color::Black);
        assert_eq!(board.fullmove_number, 1);

        board.make_move(field("g8"), field("f6"));
        assert_eq!(board.en_passant, None);
        assert_eq!(board.halfmove_clock, 1);
        assert_eq!(board.fullmove_number, 2);
        assert_eq!(board.to_fen(), "rnbqkb1r/pppppppp/5n2/8/P7/8/1PPPPPPP/RNBQKBNR w KQkq - 1 2");
    }

    #[test]
    fn test_make_move_en_passant() {
        let mut board = ChessBoard::from_fen("8/2p5/3p4/KP5r/1R3pPk/8/4P3/8 b - g3 0 1").unwrap();
        let effects = board.make_move(field("f4"), field("g3"));
        assert_eq!(effects.kind, MoveKind::EnPassant);
        assert_eq!(effects.captured.map(|p| p.kind), Some(PieceType::Pawn));
        assert_eq!(board.to_fen(), "8/2p5/3p4/KP5r/1R5k/6p1/4P3/8 w - - 0 2");
    }

    #[test]
    fn test_make_move_castling() {
        let mut board = ChessBoard::from_fen("rnbqk2r/ppp2pbp/3p1np1/4p3/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        let effects = board.make_move(field("e1"), field("g1"));
        assert_eq!(effects.kind, MoveKind::Castle(CastlingSide::KingSide));
        assert_eq!(board.to_fen(), "rnbqk2r/ppp2pbp/3p1np1/4p3/8/8/PPPPPPPP/R4RK1 b kq - 1 1");

        let mut board = ChessBoard::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1").unwrap();
        board.make_move(field("e8"), field("c8"));
        assert_eq!(board.to_fen(), "2kr3r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQ - 1 2");
    }

    #[test]
    fn test_make_move_capture_rook_invalidates_castling() {
        let mut board = ChessBoard::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/P7/1PP1NnPP/RNBQK2R b KQ - 0 8").unwrap();
        board.make_move(field("f2"), field("h1"));
        assert_eq!(board.castling_rights.to_string(), "Q");
        assert_eq!(board.halfmove_clock, 0);
    }

    #[test]
    fn test_make_move_promotion() {
        let mut board = ChessBoard::from_fen("4k3/2P5/1p6/8/8/p7/PP6/4K3 w - - 0 1").unwrap();
        let effects = board.make_move(field("c7"), field("c8"));
        assert!(effects.promotion_pending);
        assert_eq!(board.pending_promotion(), Some(field("c8")));
        assert_eq!(board.promote(field("c8"), PieceType::King), Err(MoveError::InvalidPromotion(PieceType::King)));
        board.promote(field("c8"), PieceType::Queen).unwrap();
        assert_eq!(board.pending_promotion(), None);
        assert_eq!(board.to_fen(), "2Q1k3/8/1p6/8/8/p7/PP6/4K3 b - - 0 1");
        assert!(board.is_king_in_check(Color::Black));
    }

    #[test]
    fn test_play_rejects_bad_requests() {
        let mut board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        let mv = |s: &str| Move::from_algebraic(s).unwrap();
        assert_eq!(board.play(mv("e4e5")), Err(MoveError::NoPieceAtSquare(field("e4"))));
        assert_eq!(board.play(mv("e7e5")), Err(MoveError::WrongPieceColor(field("e7"))));
        assert_eq!(
            board.play(mv("e2e5")),
            Err(MoveError::IllegalMove { from: field("e2"), to: field("e5") })
        );
        assert!(board.play(mv("e2e4")).is_ok());
        assert!(board.play(mv("e7e5")).is_ok());
        assert_eq!(board.to_fen(), "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2");
    }

    #[test]
    fn test_play_with_promotion_piece() {
        let mut board = ChessBoard::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        board.play(Move::from_algebraic("a7a8n").unwrap()).unwrap();
        assert_eq!(board.to_fen(), "N7/7k/8/8/8/8/8/K7 b - - 0 1");

        let mut board = ChessBoard::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        board.play(Move::from_algebraic("a7a8").unwrap()).unwrap();
        assert_eq!(
            board.play(Move::from_algebraic("h7h6").unwrap()),
            Err(MoveError::PromotionPending(field("a8")))
        );
    }

    #[test]
    fn test_play_rejects_promotion_piece_on_ordinary_move() {
        let mut board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        assert_eq!(
            board.play(Move::from_algebraic("e2e4q").unwrap()),
            Err(MoveError::InvalidPromotion(PieceType::Queen))
        );
        assert_eq!(board.to_fen(), INITIAL_POSITION);
        let mut board = ChessBoard::from_fen("8/8/8/8/8/8/8/R3K2k w - - 0 1").unwrap();
        assert_eq!(
            board.play(Move::from_algebraic("a1a8r").unwrap()),
            Err(MoveError::InvalidPromotion(PieceType::Rook))
        );
    }

    #[test]
    fn test_counters_saturate() {
        let mut board = ChessBoard::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 4294967295 1").unwrap();
        board.make_move(field("h1"), field("h2"));
        assert_eq!(board.halfmove_clock, u32::MAX);

        let mut board = ChessBoard::from_fen("4k3/8/8/8/8/8/8/4K2R b - - 0 4294967295").unwrap();
        board.make_move(field("e8"), field("d8"));
        assert_eq!(board.fullmove_number, u32::MAX);
        assert_eq!(board.active_color, Color::White);
    }

    #[test]
    #[should_panic(expected = "no piece on e4")]
    fn test_make_move_from_empty_square_is_fatal() {
        let mut board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        board.make_move(field("e4"), field("e7"));
    }

    #[test]
    fn test_fifty_move_rule() {
        assert!(!fifty_move_draw(49));
        assert!(fifty_move_draw(50));
        let board = ChessBoard::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 50 80").unwrap();
        assert!(board.is_draw_by_fifty_move_rule());
        assert_eq!(board.status(), GameStatus::FiftyMoveDraw);
    }

    #[test]
    #[should_panic(expected = "no white king")]
    fn test_missing_king_is_fatal() {
        let board = ChessBoard::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        board.is_king_in_check(Color::White);
    }
}
