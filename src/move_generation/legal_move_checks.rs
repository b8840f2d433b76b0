use crate::bitboard::hex_bitboard::HexBitboard;
use crate::errors::{HexChessError, HexChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;

/// Every cell attacked by `color`'s king and knights.
pub fn attack_set(game_state: &GameState, color: Color) -> HexBitboard {
    let mut attacks = HexBitboard::EMPTY;

    if let Some(king) = game_state.king_cell(color) {
        attacks |= king_attacks(king);
    }

    let mut knights = game_state.knights(color);
    while let Some(knight) = knights.pop_lsb() {
        attacks |= knight_attacks(knight);
    }

    attacks
}

/// Both kings are on the board and the side to move does not attack the
/// opposing king.
pub fn position_is_ok(game_state: &GameState) -> bool {
    if game_state.white_king().count() != 1 || game_state.black_king().count() != 1 {
        return false;
    }
    let side = game_state.side_to_move;
    (attack_set(game_state, side) & game_state.king(side.opposite())).is_empty()
}

/// Whether `color`'s king stands on a cell attacked by the other side.
#[inline]
pub fn is_king_exposed(game_state: &GameState, color: Color) -> bool {
    (attack_set(game_state, color.opposite()) & game_state.king(color)).any()
}

/// Whether the side to move is in check.
pub fn king_is_attacked(game_state: &GameState) -> HexChessResult<bool> {
    if !position_is_ok(game_state) {
        return Err(HexChessError::InvalidPosition);
    }
    Ok(is_king_exposed(game_state, game_state.side_to_move))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(notation: &str, side: Color) -> GameState {
        let mut game_state = GameState::from_setup(notation).expect("setup should parse");
        game_state.side_to_move = side;
        game_state
    }

    #[test]
    fn opening_array_is_ok_for_both_sides() {
        for side in Color::ALL {
            let game_state = position("///N7n///K8k/N7n", side);
            assert!(position_is_ok(&game_state));
            assert!(!king_is_attacked(&game_state).expect("opening should be valid"));
        }
    }

    #[test]
    fn adjacent_kings_are_illegal_for_either_side() {
        for side in Color::ALL {
            let game_state = position("/////5Kk", side);
            assert!(!position_is_ok(&game_state));
            assert!(matches!(
                king_is_attacked(&game_state),
                Err(HexChessError::InvalidPosition)
            ));
        }
    }

    #[test]
    fn knight_check_validity_depends_on_side_to_move() {
        let white = position("////5N/5K2k", Color::White);
        assert!(!position_is_ok(&white));

        let black = position("////5N/5K2k", Color::Black);
        assert!(position_is_ok(&black));
        assert!(king_is_attacked(&black).expect("black to move should be valid"));
    }

    #[test]
    fn missing_king_is_invalid() {
        let game_state = position("///N7n///K", Color::White);
        assert!(!position_is_ok(&game_state));
        assert!(king_is_attacked(&game_state).is_err());
    }

    #[test]
    fn attack_set_unions_king_and_knights() {
        let game_state = GameState::new_game();
        let white = attack_set(&game_state, Color::White);
        assert_eq!(
            white,
            king_attacks(16) | knight_attacks(13) | knight_attacks(17)
        );
    }
}
