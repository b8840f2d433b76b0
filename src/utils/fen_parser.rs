//! Setup-notation-to-GameState parser.
//!
//! The notation lists files `a` to `l` separated by `/`. Inside a file,
//! `K N k n` place a White king, White knight, Black king or Black knight on
//! the current rank and move up one rank; a decimal number skips that many
//! ranks before the next piece. Trailing files may be omitted.

use crate::errors::{HexChessError, HexChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::game_state::hex_geometry::cell_at;

/// Parse a setup into a fresh position, White to move.
pub fn parse_setup(notation: &str) -> HexChessResult<GameState> {
    let mut game_state = GameState::new_empty();
    apply_setup(&mut game_state, notation)?;
    Ok(game_state)
}

/// Replace the pieces of `game_state` with the setup, keeping the side to
/// move and the history. On error the board holds whatever was
/// placed before the offending character; callers restore a snapshot.
pub fn apply_setup(game_state: &mut GameState, notation: &str) -> HexChessResult<()> {
    game_state.clear_board();

    let mut file = 0i32;
    let mut rank = 0i32;
    let mut skip = 0i32;

    for ch in notation.chars() {
        match ch {
            '/' => {
                file += 1;
                rank = 0;
                skip = 0;
            }
            '0'..='9' => {
                let digit = ch as i32 - '0' as i32;
                skip = skip.saturating_mul(10).saturating_add(digit);
            }
            'K' | 'N' | 'k' | 'n' => {
                rank = rank.saturating_add(skip);
                skip = 0;
                let cell = cell_at(file, rank).ok_or(HexChessError::InvalidSetupCell { file, rank })?;
                let (color, kind) = piece_from_setup_char(ch);
                game_state.set_piece(color, kind, cell);
                rank += 1;
            }
            other => return Err(HexChessError::InvalidSetupChar(other)),
        }
    }

    game_state.recompute_occupancy();
    Ok(())
}

fn piece_from_setup_char(ch: char) -> (Color, PieceKind) {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = if ch.eq_ignore_ascii_case(&'k') {
        PieceKind::King
    } else {
        PieceKind::Knight
    };
    (color, kind)
}
