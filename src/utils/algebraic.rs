//! Cell and move text conversions.
//!
//! Cells are written as a file letter (`a`..`l`, no `j`) followed by the
//! 1-based rank, so ranks run up to `11` on the `f` file. Moves are written
//! as the piece letter followed by the origin and destination cells, for
//! example `Kg1g2` or `Nd1c3`.

use crate::errors::{HexChessError, HexChessResult};
use crate::game_state::chess_types::{Cell, PieceKind};
use crate::game_state::hex_geometry::{cell_at, cell_is_ok, file_from_letter, file_letter, file_of, rank_of};
use crate::moves::move_descriptions::Move;

/// Render a playable cell (for example `f11`).
pub fn pos_to_str(cell: Cell) -> HexChessResult<String> {
    if !cell_is_ok(cell) {
        return Err(HexChessError::CellOutOfBounds(cell));
    }
    let mut out = String::with_capacity(3);
    push_cell(&mut out, cell);
    Ok(out)
}

/// Parse cell text such as `f11` or `K2`. File letters are case-insensitive.
pub fn parse_cell(text: &str) -> HexChessResult<Cell> {
    let invalid = || HexChessError::InvalidCell(text.to_owned());

    let mut chars = text.chars();
    let file = chars.next().and_then(file_from_letter).ok_or_else(invalid)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let rank: i32 = digits.parse().map_err(|_| invalid())?;

    cell_at(file, rank - 1).ok_or_else(invalid)
}

/// `Kg1g2` style text for a move.
pub fn render_move(mv: Move) -> String {
    let mut out = String::with_capacity(7);
    out.push(mv.piece().letter());
    push_cell(&mut out, mv.from());
    push_cell(&mut out, mv.to());
    out
}

/// Space-prefixed move list followed by the move count.
pub fn render_move_list(moves: &[Move]) -> String {
    let mut out = String::new();
    for &mv in moves {
        out.push(' ');
        out.push_str(&render_move(mv));
    }
    out.push_str(&format!("\ntotal number of moves = {}\n", moves.len()));
    out
}

/// Parse `Kg1g2`, `Nd1c3` or a bare `g1g2` into an optional piece kind and
/// the two cells.
pub fn parse_move_text(text: &str) -> HexChessResult<(Option<PieceKind>, Cell, Cell)> {
    let invalid = || HexChessError::InvalidMoveText(text.to_owned());
    let bytes = text.as_bytes();
    if bytes.len() < 4 || !text.is_ascii() {
        return Err(invalid());
    }

    // A piece letter is followed by another letter; a file letter by a digit.
    let (piece, cells) = if bytes[1].is_ascii_alphabetic() {
        let piece = match bytes[0].to_ascii_uppercase() {
            b'K' => PieceKind::King,
            b'N' => PieceKind::Knight,
            _ => return Err(invalid()),
        };
        (Some(piece), &text[1..])
    } else {
        (None, text)
    };

    let split = cells[1..]
        .find(|c: char| c.is_ascii_alphabetic())
        .map(|index| index + 1)
        .ok_or_else(invalid)?;
    let from = parse_cell(&cells[..split]).map_err(|_| invalid())?;
    let to = parse_cell(&cells[split..]).map_err(|_| invalid())?;

    Ok((piece, from, to))
}

fn push_cell(out: &mut String, cell: Cell) {
    out.push(file_letter(file_of(cell)).unwrap_or('?'));
    out.push_str(&(rank_of(cell) + 1).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::game_state::hex_geometry::PLAYABLE_CELLS;

    #[test]
    fn renders_and_parses_every_cell() {
        for cell in PLAYABLE_CELLS.cells() {
            let text = pos_to_str(cell).expect("playable cell should render");
            assert_eq!(parse_cell(&text).expect("rendered cell should parse"), cell);
        }
        assert_eq!(pos_to_str(125).expect("f11 should render"), "f11");
        assert_eq!(pos_to_str(10).expect("a1 should render"), "a1");
        assert_eq!(parse_cell("K2").expect("k2 should parse"), 30);
    }

    #[test]
    fn rejects_bad_cells() {
        for text in ["", "j1", "a0", "a7", "f12", "f", "g1x", "z3"] {
            assert!(parse_cell(text).is_err(), "{text} should be rejected");
        }
        assert!(matches!(pos_to_str(9), Err(HexChessError::CellOutOfBounds(9))));
        assert!(pos_to_str(76).is_err());
    }

    #[test]
    fn move_text_round_trips() {
        let mv = Move::new(Color::White, PieceKind::King, 16, 27);
        assert_eq!(render_move(mv), "Kg1g2");
        assert_eq!(
            parse_move_text("Kg1g2").expect("move text should parse"),
            (Some(PieceKind::King), 16, 27)
        );
        assert_eq!(
            parse_move_text("f10f11").expect("move text should parse"),
            (None, 114, 125)
        );
        assert_eq!(
            parse_move_text("nk2i3").expect("move text should parse"),
            (Some(PieceKind::Knight), 30, 40)
        );
        assert!(parse_move_text("Qa1a2").is_err());
        assert!(parse_move_text("a1").is_err());
    }

    #[test]
    fn move_list_ends_with_total() {
        let moves = [
            Move::new(Color::White, PieceKind::King, 16, 27),
            Move::new(Color::White, PieceKind::Knight, 13, 34),
        ];
        assert_eq!(
            render_move_list(&moves),
            " Kg1g2 Nd1c3\ntotal number of moves = 2\n"
        );
    }
}
