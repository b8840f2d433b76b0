//! Full legal move generation pipeline.
//!
//! Pseudo-legal candidates are played with `make_move`, tested for a king left
//! in check, and taken back. Illegal candidates are swap-removed from the
//! frame, so the surviving order is not the generation order. Legal
//! candidates keep the capture annotation they picked up while made.

use log::debug;

use crate::errors::HexChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::{is_king_exposed, king_is_attacked};
use crate::move_generation::move_generator::{MoveGenerator, MoveStack, PseudoLegalMoveGenerator};
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_into(&self, game_state: &mut GameState, stack: &mut MoveStack) -> HexChessResult<()> {
        PseudoLegalMoveGenerator.generate_into(game_state, stack)?;
        remove_illegal_moves(game_state, stack)
    }
}

/// Filter the current frame of `stack` down to the legal moves.
///
/// The position is unchanged on return.
pub fn remove_illegal_moves(game_state: &mut GameState, stack: &mut MoveStack) -> HexChessResult<()> {
    let mover = game_state.side_to_move;
    let mut offset = 0;

    while offset < stack.frame_len() {
        let candidate = stack.frame()[offset];
        let made = make_move(game_state, candidate);
        let illegal = is_king_exposed(game_state, mover);
        unmake_move(game_state)?;

        if illegal {
            debug!("dropping {:08x}: leaves king in check", candidate.to_bits());
            stack.swap_remove_in_frame(offset);
        } else {
            stack.replace_in_frame(offset, made);
            offset += 1;
        }
    }

    Ok(())
}

pub fn generate_legal_moves(game_state: &mut GameState) -> HexChessResult<Vec<Move>> {
    LegalMoveGenerator.generate_moves(game_state)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Single-ply outcome for the side to move.
pub fn game_status(game_state: &mut GameState) -> HexChessResult<GameStatus> {
    if !generate_legal_moves(game_state)?.is_empty() {
        return Ok(GameStatus::Ongoing);
    }
    if king_is_attacked(game_state)? {
        Ok(GameStatus::Checkmate)
    } else {
        Ok(GameStatus::Stalemate)
    }
}
