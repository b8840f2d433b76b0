use crate::errors::{HexChessError, HexChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::MoveStack;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(game_state: &GameState, stack: &mut MoveStack) -> HexChessResult<()> {
    let side = game_state.side_to_move;
    let from = game_state
        .king_cell(side)
        .ok_or(HexChessError::InvalidPosition)?;

    let mut targets =
        king_attacks(from) & !game_state.occupancy(side) & !game_state.king(side.opposite());
    while let Some(to) = targets.pop_lsb() {
        stack.push(Move::new(side, PieceKind::King, from, to));
    }

    Ok(())
}
