use crate::errors::{HexChessError, HexChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::moves::move_descriptions::Move;

/// Candidate move stack shared by nested generation passes.
///
/// Entries below `bottom` belong to outer frames and are never touched by the
/// current pass; entries from `bottom` to the top are the current frame's
/// unconfirmed candidates.
#[derive(Debug, Clone, Default)]
pub struct MoveStack {
    moves: Vec<Move>,
    bottom: usize,
}

impl MoveStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
            bottom: 0,
        }
    }

    /// Drop every frame.
    pub fn reset(&mut self) {
        self.moves.clear();
        self.bottom = 0;
    }

    /// Open a frame above the current top. Returns the bottom to hand back to
    /// `pop_frame`.
    #[inline]
    pub fn push_frame(&mut self) -> usize {
        let previous = self.bottom;
        self.bottom = self.moves.len();
        previous
    }

    /// Discard the current frame and reopen the one below it.
    #[inline]
    pub fn pop_frame(&mut self, previous_bottom: usize) {
        self.moves.truncate(self.bottom);
        self.bottom = previous_bottom;
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn bottom(&self) -> usize {
        self.bottom
    }

    #[inline]
    pub fn frame(&self) -> &[Move] {
        &self.moves[self.bottom..]
    }

    #[inline]
    pub fn frame_len(&self) -> usize {
        self.moves.len() - self.bottom
    }

    #[inline]
    pub fn replace_in_frame(&mut self, offset: usize, mv: Move) {
        self.moves[self.bottom + offset] = mv;
    }

    /// Remove a frame entry by moving the top entry into its slot.
    #[inline]
    pub fn swap_remove_in_frame(&mut self, offset: usize) -> Move {
        self.moves.swap_remove(self.bottom + offset)
    }
}

pub trait MoveGenerator {
    /// Push the moves for the side to move into the current frame of `stack`.
    fn generate_into(&self, game_state: &mut GameState, stack: &mut MoveStack) -> HexChessResult<()>;

    fn generate_moves(&self, game_state: &mut GameState) -> HexChessResult<Vec<Move>> {
        let mut stack = MoveStack::with_capacity(64);
        self.generate_into(game_state, &mut stack)?;
        Ok(stack.frame().to_vec())
    }
}

/// King and knight moves to cells not held by the mover or the opposing
/// king, without self-check filtering.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_into(&self, game_state: &mut GameState, stack: &mut MoveStack) -> HexChessResult<()> {
        if Color::ALL.iter().any(|&color| game_state.king(color).is_empty()) {
            return Err(HexChessError::InvalidPosition);
        }

        generate_king_moves(game_state, stack)?;
        generate_knight_moves(game_state, stack);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_nest_and_unwind() {
        let mut stack = MoveStack::default();
        let a = Move::new(Color::White, PieceKind::King, 16, 27);
        let b = Move::new(Color::White, PieceKind::Knight, 13, 24);
        let c = Move::new(Color::Black, PieceKind::King, 115, 104);

        stack.push(a);
        stack.push(b);
        let outer = stack.push_frame();
        assert_eq!(outer, 0);
        assert_eq!(stack.bottom(), 2);
        assert!(stack.frame().is_empty());

        stack.push(c);
        assert_eq!(stack.frame(), &[c]);
        stack.pop_frame(outer);
        assert_eq!(stack.frame(), &[a, b]);

        assert_eq!(stack.swap_remove_in_frame(0), a);
        assert_eq!(stack.frame(), &[b]);
        stack.reset();
        assert_eq!(stack.frame_len(), 0);
    }

    #[test]
    fn opening_pseudo_moves_skip_own_cells() {
        let mut game_state = GameState::new_game();
        let moves = PseudoLegalMoveGenerator
            .generate_moves(&mut game_state)
            .expect("opening should generate");
        assert_eq!(moves.len(), 17);
        assert!(moves.iter().all(|mv| mv.color() == Color::White));
        assert!(moves
            .iter()
            .all(|mv| !game_state.white_pieces().is_set(mv.to())));
    }

    #[test]
    fn missing_king_is_reported() {
        let mut game_state = GameState::from_setup("///N7n").expect("setup should parse");
        assert!(matches!(
            PseudoLegalMoveGenerator.generate_moves(&mut game_state),
            Err(HexChessError::InvalidPosition)
        ));
    }
}
