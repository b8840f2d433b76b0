//! King attack bitboards.
//!
//! The hex king steps to the six edge-adjacent cells and the six cells
//! across a corner: both same-file neighbours, four cells on each adjacent
//! file and one cell two files away on either side.

use crate::bitboard::hex_bitboard::HexBitboard;
use crate::game_state::chess_types::Cell;
use crate::game_state::hex_geometry::CELL_SLOTS;
use crate::moves::leaper_attacks::leaper_attack_table;

/// `(file_step, rank_step)` before skew correction.
pub const KING_STEPS: [(i32, i32); 12] = [
    (0, 1),
    (0, -1),
    (-1, -2),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (-2, -1),
    (2, -1),
];

pub const KING_ATTACKS: [HexBitboard; CELL_SLOTS] = leaper_attack_table(&KING_STEPS);

#[inline]
pub const fn king_attacks(cell: Cell) -> HexBitboard {
    KING_ATTACKS[cell as usize]
}
