//! Knight attack bitboards.

use crate::bitboard::hex_bitboard::HexBitboard;
use crate::game_state::chess_types::Cell;
use crate::game_state::hex_geometry::CELL_SLOTS;
use crate::moves::leaper_attacks::leaper_attack_table;

/// `(file_step, rank_step)` before skew correction.
pub const KNIGHT_STEPS: [(i32, i32); 12] = [
    (-1, 2),
    (-1, -3),
    (1, 2),
    (1, -3),
    (-2, 1),
    (-2, -3),
    (2, 1),
    (2, -3),
    (-3, -1),
    (-3, -2),
    (3, -1),
    (3, -2),
];

pub const KNIGHT_ATTACKS: [HexBitboard; CELL_SLOTS] = leaper_attack_table(&KNIGHT_STEPS);

#[inline]
pub const fn knight_attacks(cell: Cell) -> HexBitboard {
    KNIGHT_ATTACKS[cell as usize]
}
