use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::MoveStack;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, stack: &mut MoveStack) {
    let side = game_state.side_to_move;
    let blocked = game_state.occupancy(side) | game_state.king(side.opposite());

    let mut knights = game_state.knights(side);
    while let Some(from) = knights.pop_lsb() {
        let mut targets = knight_attacks(from) & !blocked;
        while let Some(to) = targets.pop_lsb() {
            stack.push(Move::new(side, PieceKind::Knight, from, to));
        }
    }
}
