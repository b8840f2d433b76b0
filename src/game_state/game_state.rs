//! Position state for the king-and-knight hexagonal engine.
//!
//! `GameState` owns the piece bitboards, the per-color occupancy caches, the
//! side to move and the history stack used by make/unmake. The raw cell
//! mutators (`set_piece`, `clear_cell`, `clear_board`) touch only the piece
//! boards; callers pair them with `recompute_occupancy` before querying the
//! position, the same way the make/unmake code recomputes per side.

use crate::bitboard::hex_bitboard::HexBitboard;
use crate::errors::HexChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_SETUP;
use crate::game_state::chess_types::*;
use crate::game_state::hex_geometry::cell_is_ok;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_setup;
use crate::utils::fen_parser::parse_setup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[HexBitboard; 2]; 2],

    // Derived: king | knights per color.
    pub occupancy_by_color: [HexBitboard; 2],

    pub side_to_move: Color,

    // Moves made and not yet unmade, annotated with capture flags.
    pub history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[HexBitboard::EMPTY; 2]; 2],
            occupancy_by_color: [HexBitboard::EMPTY; 2],
            side_to_move: Color::White,
            history: Vec::with_capacity(64),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_setup(STARTING_POSITION_SETUP).expect("starting setup should always parse")
    }

    #[inline]
    pub fn from_setup(notation: &str) -> HexChessResult<Self> {
        parse_setup(notation)
    }

    #[inline]
    pub fn get_setup(&self) -> String {
        generate_setup(self)
    }

    #[inline]
    pub fn king(&self, color: Color) -> HexBitboard {
        self.pieces[color.index()][PieceKind::King.index()]
    }

    #[inline]
    pub fn knights(&self, color: Color) -> HexBitboard {
        self.pieces[color.index()][PieceKind::Knight.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> HexBitboard {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn white_king(&self) -> HexBitboard {
        self.king(Color::White)
    }

    #[inline]
    pub fn black_king(&self) -> HexBitboard {
        self.king(Color::Black)
    }

    #[inline]
    pub fn white_knight(&self) -> HexBitboard {
        self.knights(Color::White)
    }

    #[inline]
    pub fn black_knight(&self) -> HexBitboard {
        self.knights(Color::Black)
    }

    #[inline]
    pub fn white_pieces(&self) -> HexBitboard {
        self.occupancy(Color::White)
    }

    #[inline]
    pub fn black_pieces(&self) -> HexBitboard {
        self.occupancy(Color::Black)
    }

    #[inline]
    pub fn king_cell(&self, color: Color) -> Option<Cell> {
        self.king(color).lsb()
    }

    /// Piece standing on `cell`, read from the piece boards.
    pub fn piece_on(&self, cell: Cell) -> Option<(Color, PieceKind)> {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                if self.pieces[color.index()][kind.index()].is_set(cell) {
                    return Some((color, kind));
                }
            }
        }
        None
    }

    /// Put a piece on `cell`, removing whatever stood there. A king replaces
    /// that side's previous king. Occupancy is not recomputed.
    ///
    /// `cell` must be playable; padding bits are never set.
    pub fn set_piece(&mut self, color: Color, kind: PieceKind, cell: Cell) {
        self.clear_cell(cell);
        let board = &mut self.pieces[color.index()][kind.index()];
        match kind {
            PieceKind::King => *board = HexBitboard::from_cell(cell),
            PieceKind::Knight => board.set(cell),
        }
    }

    /// Remove any piece on `cell`. Occupancy is not recomputed.
    pub fn clear_cell(&mut self, cell: Cell) {
        debug_assert!(cell_is_ok(cell), "cell {cell} is off the board");
        let mask = !HexBitboard::from_cell(cell);
        for side in self.pieces.iter_mut() {
            for board in side.iter_mut() {
                *board &= mask;
            }
        }
    }

    /// Remove every piece from the board. Side to move and history are kept.
    pub fn clear_board(&mut self) {
        self.pieces = [[HexBitboard::EMPTY; 2]; 2];
        self.occupancy_by_color = [HexBitboard::EMPTY; 2];
    }

    #[inline]
    pub fn recompute_occupancy_for(&mut self, color: Color) {
        self.occupancy_by_color[color.index()] = self.king(color) | self.knights(color);
    }

    #[inline]
    pub fn recompute_occupancy(&mut self) {
        self.recompute_occupancy_for(Color::White);
        self.recompute_occupancy_for(Color::Black);
    }

    /// Whether the occupancy caches agree with the piece boards.
    pub fn occupancy_is_synced(&self) -> bool {
        Color::ALL
            .iter()
            .all(|&color| self.occupancy(color) == self.king(color) | self.knights(color))
    }

    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            pieces: self.pieces,
            occupancy_by_color: self.occupancy_by_color,
            side_to_move: self.side_to_move,
        }
    }

    pub fn restore(&mut self, snapshot: &PositionSnapshot) {
        self.pieces = snapshot.pieces;
        self.occupancy_by_color = snapshot.occupancy_by_color;
        self.side_to_move = snapshot.side_to_move;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::hex_geometry::PLAYABLE_CELLS;

    #[test]
    fn new_game_places_standard_array() {
        let game = GameState::new_game();
        assert_eq!(game.white_king(), HexBitboard::from_cell(16));
        assert_eq!(game.black_king(), HexBitboard::from_cell(115));
        assert_eq!(game.white_knight(), [13u8, 17].into_iter().collect());
        assert_eq!(game.black_knight(), [101u8, 105].into_iter().collect());
        assert_eq!(game.side_to_move, Color::White);
        assert!(game.occupancy_is_synced());
        assert_eq!(game.get_setup(), STARTING_POSITION_SETUP);
    }

    #[test]
    fn occupancy_follows_mutations_after_recompute() {
        let mut game = GameState::new_game();
        game.set_piece(Color::Black, PieceKind::Knight, 17);
        game.set_piece(Color::White, PieceKind::King, 70);
        game.clear_cell(101);
        assert!(!game.occupancy_is_synced());

        game.recompute_occupancy();
        assert!(game.occupancy_is_synced());
        assert_eq!(game.white_pieces(), [13u8, 70].into_iter().collect());
        assert_eq!(game.black_pieces(), [17u8, 105, 115].into_iter().collect());
        assert_eq!(game.piece_on(17), Some((Color::Black, PieceKind::Knight)));
        assert_eq!(game.piece_on(16), None);
        assert_eq!(game.king_cell(Color::White), Some(70));
        assert!((game.white_pieces() | game.black_pieces()) & !PLAYABLE_CELLS == HexBitboard::EMPTY);
    }

    #[test]
    fn restore_undoes_speculative_edit() {
        let mut game = GameState::new_game();
        let snapshot = game.snapshot();

        game.clear_board();
        game.side_to_move = Color::Black;
        game.set_piece(Color::White, PieceKind::King, 70);
        game.recompute_occupancy();
        assert_ne!(game.snapshot(), snapshot);

        game.restore(&snapshot);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the board")]
    fn set_piece_rejects_padding_cell() {
        let mut game = GameState::new_empty();
        game.set_piece(Color::White, PieceKind::Knight, 127);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the board")]
    fn clear_cell_rejects_cell_between_files() {
        let mut game = GameState::new_game();
        game.clear_cell(76);
    }
}
