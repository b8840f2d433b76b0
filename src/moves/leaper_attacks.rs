//! Compile-time construction of leaper attack tables on the hex board.
//!
//! A step is given as `(file_step, rank_step)` in the coordinates of the
//! origin file; `rank_skew` adds the correction for the files crossed, so one
//! step list describes the same move from every cell.

use crate::bitboard::hex_bitboard::HexBitboard;
use crate::game_state::hex_geometry::{cell_at, cell_is_ok, file_of, rank_of, rank_skew, CELL_SLOTS};

pub const fn leaper_attack_table(steps: &[(i32, i32)]) -> [HexBitboard; CELL_SLOTS] {
    let mut table = [HexBitboard::EMPTY; CELL_SLOTS];
    let mut cell = 0usize;

    while cell < CELL_SLOTS {
        if cell_is_ok(cell as u8) {
            table[cell] = leaper_attacks_from(cell as u8, steps);
        }
        cell += 1;
    }

    table
}

const fn leaper_attacks_from(cell: u8, steps: &[(i32, i32)]) -> HexBitboard {
    let file = file_of(cell);
    let rank = rank_of(cell);
    let mut attacks = HexBitboard::EMPTY;
    let mut i = 0usize;

    while i < steps.len() {
        let (file_step, rank_step) = steps[i];
        let target_rank = rank + rank_step + rank_skew(file, file_step);
        if let Some(target) = cell_at(file + file_step, target_rank) {
            attacks = attacks.with(target);
        }
        i += 1;
    }

    attacks
}

/// Same table built from axial hex coordinates, where `y = |file - 5| + 2 * rank`
/// and two cells are related when their `(file, y)` difference is in `deltas`.
#[cfg(test)]
pub(crate) fn axial_reference_table(deltas: &[(i32, i32)]) -> [HexBitboard; CELL_SLOTS] {
    use crate::game_state::hex_geometry::{CENTER_FILE, PLAYABLE_CELLS};

    let axial = |cell: u8| {
        let file = file_of(cell);
        (file, (file - CENTER_FILE).abs() + 2 * rank_of(cell))
    };

    let mut table = [HexBitboard::EMPTY; CELL_SLOTS];
    for from in PLAYABLE_CELLS.cells() {
        let (q0, y0) = axial(from);
        table[from as usize] = PLAYABLE_CELLS
            .cells()
            .filter(|&to| {
                let (q1, y1) = axial(to);
                deltas.contains(&(q1 - q0, y1 - y0))
            })
            .collect();
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::hex_geometry::PLAYABLE_CELLS;

    #[test]
    fn padding_cells_have_no_attacks() {
        let table = leaper_attack_table(&[(0, 1), (1, 0), (-1, 0)]);
        for cell in 0..CELL_SLOTS {
            if !cell_is_ok(cell as u8) {
                assert!(table[cell].is_empty(), "padding cell {cell} has attacks");
            }
        }
    }

    #[test]
    fn targets_stay_on_the_board() {
        let table = leaper_attack_table(&[(0, 1), (0, -1), (3, -2), (-3, -1)]);
        for entry in table {
            assert!((entry & !PLAYABLE_CELLS).is_empty());
        }
    }
}
