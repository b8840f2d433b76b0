//! Engine session: the owned position plus its rollback snapshot.
//!
//! Every way of changing the position from outside (setup notation, the edit
//! mode, switching the side to move) goes through a snapshot first and is
//! rolled back if the result is unparsable or illegal. Accepted positions
//! start with an empty history; moves played with `play_move` can be taken
//! back with `undo_move`.

use log::{debug, info};

use crate::errors::{HexChessError, HexChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::hex_geometry::cell_is_ok;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::{king_is_attacked, position_is_ok};
use crate::move_generation::legal_move_generator::{game_status, GameStatus, LegalMoveGenerator};
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use crate::move_generation::perft::{perft, perft_divide, PerftCounts};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{parse_move_text, render_move};
use crate::utils::fen_generator::generate_setup;
use crate::utils::fen_parser::apply_setup;

#[derive(Debug, Clone)]
pub struct EngineSession {
    game_state: GameState,
    backup: PositionSnapshot,
}

impl Default for EngineSession {
    fn default() -> Self {
        let game_state = GameState::new_empty();
        let backup = game_state.snapshot();
        Self { game_state, backup }
    }
}

impl EngineSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Empty board, White to move, no history.
    pub fn initialize(&mut self) {
        *self = Self::default();
    }

    pub fn start_new_game(&mut self) {
        self.game_state = GameState::new_game();
        self.backup = self.game_state.snapshot();
        info!("new game: {}", generate_setup(&self.game_state));
    }

    pub fn backup(&mut self) {
        self.backup = self.game_state.snapshot();
    }

    pub fn restore(&mut self) {
        self.game_state.restore(&self.backup);
    }

    /// Replace the pieces with a setup and drop the move history. On a parse
    /// error the previous position is restored and the error returned. The
    /// result is not checked for legality; see `load_legal_position`.
    pub fn load_position(&mut self, notation: &str) -> HexChessResult<()> {
        self.backup();
        if let Err(err) = apply_setup(&mut self.game_state, notation) {
            debug!("rejected setup {notation:?}: {err}");
            self.restore();
            return Err(err);
        }
        self.game_state.history.clear();
        Ok(())
    }

    /// Like `load_position`, but an illegal result is rolled back together
    /// with the history it replaced.
    pub fn load_legal_position(&mut self, notation: &str) -> HexChessResult<()> {
        let history = self.game_state.history.clone();
        self.load_position(notation)?;
        if let Err(err) = self.confirm_position() {
            self.game_state.history = history;
            return Err(err);
        }
        Ok(())
    }

    /// Keep the current position if it is legal, otherwise go back to the
    /// last backup.
    pub fn confirm_position(&mut self) -> HexChessResult<()> {
        self.game_state.recompute_occupancy();
        if !self.is_position_valid() {
            debug!("rolling back illegal position {}", self.setup());
            self.restore();
            return Err(HexChessError::IllegalPosition);
        }
        self.game_state.history.clear();
        Ok(())
    }

    /// Put a piece on a cell. Occupancy is recomputed by `confirm_position`.
    pub fn set_piece(&mut self, color: Color, kind: PieceKind, cell: Cell) -> HexChessResult<()> {
        if !cell_is_ok(cell) {
            return Err(HexChessError::CellOutOfBounds(cell));
        }
        self.game_state.set_piece(color, kind, cell);
        Ok(())
    }

    pub fn clear_cell(&mut self, cell: Cell) -> HexChessResult<()> {
        if !cell_is_ok(cell) {
            return Err(HexChessError::CellOutOfBounds(cell));
        }
        self.game_state.clear_cell(cell);
        Ok(())
    }

    pub fn clear_board(&mut self) {
        self.game_state.clear_board();
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.game_state.side_to_move
    }

    /// Hand the move to `color`, reverting if that makes the position illegal.
    pub fn set_side_to_move(&mut self, color: Color) -> HexChessResult<()> {
        let previous = self.game_state.side_to_move;
        self.game_state.side_to_move = color;
        if !self.is_position_valid() {
            self.game_state.side_to_move = previous;
            return Err(HexChessError::IllegalPosition);
        }
        self.game_state.history.clear();
        self.backup();
        Ok(())
    }

    #[inline]
    pub fn is_position_valid(&self) -> bool {
        position_is_ok(&self.game_state)
    }

    #[inline]
    pub fn is_king_in_check(&self) -> HexChessResult<bool> {
        king_is_attacked(&self.game_state)
    }

    pub fn generate_legal_moves(&mut self) -> HexChessResult<Vec<Move>> {
        LegalMoveGenerator.generate_moves(&mut self.game_state)
    }

    pub fn generate_pseudo_legal_moves(&mut self) -> HexChessResult<Vec<Move>> {
        PseudoLegalMoveGenerator.generate_moves(&mut self.game_state)
    }

    pub fn status(&mut self) -> HexChessResult<GameStatus> {
        game_status(&mut self.game_state)
    }

    #[inline]
    pub fn render_move(&self, mv: Move) -> String {
        render_move(mv)
    }

    pub fn setup(&self) -> String {
        generate_setup(&self.game_state)
    }

    /// Play the legal move written as `text` (`Kg1g2`, `g1g2`, ...).
    pub fn play_move(&mut self, text: &str) -> HexChessResult<Move> {
        let (piece, from, to) = parse_move_text(text)?;
        let chosen = self
            .generate_legal_moves()?
            .into_iter()
            .find(|mv| {
                mv.from() == from && mv.to() == to && piece.map_or(true, |kind| kind == mv.piece())
            })
            .ok_or_else(|| HexChessError::NoSuchMove(text.to_owned()))?;

        let made = make_move(&mut self.game_state, chosen);
        self.backup();
        info!("played {}", render_move(made));
        Ok(made)
    }

    pub fn undo_move(&mut self) -> HexChessResult<Move> {
        let mv = unmake_move(&mut self.game_state)?;
        self.backup();
        Ok(mv)
    }

    pub fn perft(&mut self, depth: u8) -> HexChessResult<PerftCounts> {
        if !self.is_position_valid() {
            return Err(HexChessError::InvalidPosition);
        }
        perft(&LegalMoveGenerator, &mut self.game_state, depth)
    }

    pub fn perft_divide(&mut self, depth: u8) -> HexChessResult<Vec<(Move, usize)>> {
        if !self.is_position_valid() {
            return Err(HexChessError::InvalidPosition);
        }
        perft_divide(&LegalMoveGenerator, &mut self.game_state, depth)
    }
}
