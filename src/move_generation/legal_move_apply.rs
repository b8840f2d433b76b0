//! In-place make/unmake on a single `GameState`.
//!
//! `make_move` annotates the move with what it captured and pushes it on the
//! history stack; `unmake_move` pops it and reverses every bit it touched, so
//! a make/unmake pair leaves the position bit-for-bit as it was.

use log::trace;

use crate::bitboard::hex_bitboard::HexBitboard;
use crate::errors::{HexChessError, HexChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

/// Play `mv` for its color and return the move as recorded in history.
pub fn make_move(game_state: &mut GameState, mv: Move) -> Move {
    let side = mv.color();
    let enemy = side.opposite();
    let (from, to) = (mv.from(), mv.to());

    let board = &mut game_state.pieces[side.index()][mv.piece().index()];
    match mv.piece() {
        PieceKind::King => *board = HexBitboard::from_cell(to),
        PieceKind::Knight => {
            board.clear(from);
            board.set(to);
        }
    }
    game_state.recompute_occupancy_for(side);

    let mut made = mv.without_flags();
    if game_state.occupancy(enemy).is_set(to) {
        let captured = if game_state.knights(enemy).is_set(to) {
            PieceKind::Knight
        } else {
            PieceKind::King
        };
        game_state.pieces[enemy.index()][captured.index()].clear(to);
        game_state.recompute_occupancy_for(enemy);
        made = made.with_capture(captured);
    }

    game_state.history.push(made);
    game_state.side_to_move = enemy;
    trace!("make {:08x}", made.to_bits());
    made
}

/// Take back the most recent move.
pub fn unmake_move(game_state: &mut GameState) -> HexChessResult<Move> {
    let mv = game_state.history.pop().ok_or(HexChessError::EmptyHistory)?;
    let side = mv.color();
    let (from, to) = (mv.from(), mv.to());

    let board = &mut game_state.pieces[side.index()][mv.piece().index()];
    match mv.piece() {
        PieceKind::King => *board = HexBitboard::from_cell(from),
        PieceKind::Knight => {
            board.clear(to);
            board.set(from);
        }
    }

    if let Some(captured) = mv.captured_piece() {
        game_state.pieces[side.opposite().index()][captured.index()].set(to);
    }

    game_state.recompute_occupancy();
    game_state.side_to_move = side;
    trace!("unmake {:08x}", mv.to_bits());
    Ok(mv)
}
