use super::error::ParseError;
use super::graph::Placement;
use super::special_moves::CastlingRights;
use super::{ChessField, Color, PieceType};

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Everything a FEN string describes, before the board graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Rank 8 to 1, file a to h.
    pub placement: [Placement; 64],
    pub active_color: Color,
    pub castling_rights: CastlingRights,
    pub en_passant: Option<ChessField>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Parses a FEN string.
///
/// Besides the full six fields, a bare piece placement and the four-field
/// EPD form are accepted; the missing fields default to `w - - 0 1`.
pub fn load_position(fen: &str) -> Result<Position, ParseError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if !matches!(parts.len(), 1 | 4 | 6) {
        return Err(ParseError::FieldCount(parts.len()));
    }

    let placement = parse_placement(parts[0])?;

    // Parse active color
    let active_color = match parts.get(1).copied().unwrap_or("w") {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(ParseError::ActiveColor(other.to_string())),
    };

    let castling_rights = CastlingRights::from_fen(parts.get(2).copied().unwrap_or("-"))?;

    // Parse en passant square
    let en_passant = match parts.get(3).copied().unwrap_or("-") {
        "-" => None,
        square => Some(ChessField::from_algebraic(square)?),
    };

    let halfmove_clock = parse_counter("halfmove clock", parts.get(4).copied().unwrap_or("0"))?;
    let fullmove_number = parse_counter("fullmove number", parts.get(5).copied().unwrap_or("1"))?;

    Ok(Position {
        placement,
        active_color,
        castling_rights,
        en_passant,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_placement(placement: &str) -> Result<[Placement; 64], ParseError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(ParseError::RowCount(rows.len()));
    }

    let mut pieces = [None; 64];
    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0;
        for c in row.chars() {
            if c.is_ascii_digit() {
                let run = c.to_digit(10).unwrap_or(0) as usize;
                if !(1..=8).contains(&run) {
                    return Err(ParseError::EmptyRun { row: row_index, run: c });
                }
                col_index += run;
            } else {
                let kind = PieceType::from_char(c).ok_or(ParseError::UnknownPiece(c))?;
                let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
                if col_index < 8 {
                    pieces[row_index * 8 + col_index] = Some((color, kind));
                }
                col_index += 1;
            }
        }
        if col_index != 8 {
            return Err(ParseError::RowWidth {
                row: row_index,
                files: col_index,
            });
        }
    }
    Ok(pieces)
}

fn parse_counter(field: &'static str, value: &str) -> Result<u32, ParseError> {
    value.parse::<u32>().map_err(|_| ParseError::Counter {
        field,
        value: value.to_string(),
    })
}
