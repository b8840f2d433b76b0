//! Basic value types shared by every layer of the engine.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::position_snapshot::PositionSnapshot;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Piece kinds this engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Knight,
}

impl PieceKind {
    pub const ALL: [PieceKind; 2] = [PieceKind::King, PieceKind::Knight];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Knight => 1,
        }
    }

    /// Upper-case letter used in move lists and setup notation.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Knight => 'N',
        }
    }
}

/// Linear cell address (`0..=125`); only the 91 hexes accepted by
/// `hex_geometry::cell_is_ok` are playable.
pub type Cell = u8;
