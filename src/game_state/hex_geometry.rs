//! Coordinate system of the 91-cell hexagonal board.
//!
//! Files `a`..`l` (there is no `j` file) are numbered 0..=10 from left to
//! right and ranks 0..=10 from the bottom of each file upward. The hexagon
//! makes the file heights uneven: the central file `f` holds 11 cells and
//! every step away from it loses one, down to 6 cells on `a` and `l`.
//!
//! A (file, rank) pair is linearized as `file + 10 + rank * 11`, so the
//! first ten addresses are never used and `f11` lands on 125.

use crate::bitboard::hex_bitboard::HexBitboard;
use crate::game_state::chess_types::Cell;

pub const FILE_COUNT: i32 = 11;
pub const RANK_COUNT: i32 = 11;
pub const RANK_WIDTH: i32 = 11;
/// Address of `a1`; everything below is padding.
pub const CELL_BASE: i32 = 10;
/// Size of per-cell lookup tables.
pub const CELL_SLOTS: usize = 126;
pub const PLAYABLE_CELL_COUNT: u32 = 91;
pub const CENTER_FILE: i32 = 5;

/// Highest rank index per file, `a` through `l`.
pub const MAX_RANK_BY_FILE: [i32; 11] = [5, 6, 7, 8, 9, 10, 9, 8, 7, 6, 5];

pub const FILE_LETTERS: [char; 11] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'k', 'l'];

/// Every playable cell.
pub const PLAYABLE_CELLS: HexBitboard = playable_cells();

/// Whether (file, rank) names a cell of the hexagon. Any input is accepted.
#[inline]
pub const fn hex_is_ok(file: i32, rank: i32) -> bool {
    if file < 0 || file >= FILE_COUNT || rank < 0 || rank >= RANK_COUNT {
        return false;
    }
    rank <= MAX_RANK_BY_FILE[file as usize]
}

/// Address of (file, rank), or `None` off the board.
#[inline]
pub const fn cell_at(file: i32, rank: i32) -> Option<Cell> {
    if !hex_is_ok(file, rank) {
        return None;
    }
    Some((file + CELL_BASE + rank * RANK_WIDTH) as Cell)
}

#[inline]
pub const fn file_of(cell: Cell) -> i32 {
    (cell as i32 - CELL_BASE).rem_euclid(RANK_WIDTH)
}

#[inline]
pub const fn rank_of(cell: Cell) -> i32 {
    (cell as i32 - CELL_BASE).div_euclid(RANK_WIDTH)
}

#[inline]
pub const fn cell_is_ok(cell: Cell) -> bool {
    (cell as i32) >= CELL_BASE
        && (cell as usize) < CELL_SLOTS
        && hex_is_ok(file_of(cell), rank_of(cell))
}

/// Rank correction when stepping `file_step` files away from `file`.
///
/// Each file step that moves toward (or onto) the central file shifts the
/// rank numbering by one, because files grow from the bottom as they
/// approach the center. Steps away from the center need no correction.
#[inline]
pub const fn rank_skew(file: i32, file_step: i32) -> i32 {
    let from_center = (file - CENTER_FILE).abs();
    let to_center = (file + file_step - CENTER_FILE).abs();
    (from_center - to_center + file_step.abs()) / 2
}

#[inline]
pub const fn file_letter(file: i32) -> Option<char> {
    if file < 0 || file >= FILE_COUNT {
        return None;
    }
    Some(FILE_LETTERS[file as usize])
}

pub fn file_from_letter(letter: char) -> Option<i32> {
    let letter = letter.to_ascii_lowercase();
    FILE_LETTERS
        .iter()
        .position(|&c| c == letter)
        .map(|file| file as i32)
}

const fn playable_cells() -> HexBitboard {
    let mut cells = HexBitboard::EMPTY;
    let mut file = 0;
    while file < FILE_COUNT {
        let mut rank = 0;
        while rank <= MAX_RANK_BY_FILE[file as usize] {
            if let Some(cell) = cell_at(file, rank) {
                cells = cells.with(cell);
            }
            rank += 1;
        }
        file += 1;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexagon_has_91_cells_and_30_holes() {
        let mut valid = 0;
        let mut invalid = 0;
        for file in 0..11 {
            for rank in 0..11 {
                let expected = rank <= [5, 6, 7, 8, 9, 10, 9, 8, 7, 6, 5][file as usize];
                assert_eq!(hex_is_ok(file, rank), expected, "file {file} rank {rank}");
                if expected {
                    valid += 1;
                } else {
                    invalid += 1;
                }
            }
        }
        assert_eq!((valid, invalid), (91, 30));
        assert_eq!(PLAYABLE_CELLS.count(), PLAYABLE_CELL_COUNT);
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        assert!(!hex_is_ok(-1, 0));
        assert!(!hex_is_ok(0, -1));
        assert!(!hex_is_ok(11, 0));
        assert!(!hex_is_ok(5, 11));
        assert!(!hex_is_ok(i32::MIN, i32::MAX));
    }

    #[test]
    fn linear_addresses_match_layout() {
        assert_eq!(cell_at(0, 0), Some(10));
        assert_eq!(cell_at(6, 0), Some(16));
        assert_eq!(cell_at(5, 5), Some(70));
        assert_eq!(cell_at(5, 10), Some(125));
        assert_eq!(cell_at(0, 6), None);

        for cell in PLAYABLE_CELLS.cells() {
            assert!(cell >= 10);
            assert_eq!(cell_at(file_of(cell), rank_of(cell)), Some(cell));
        }
        assert!(!cell_is_ok(9));
        assert!(!cell_is_ok(76));
        assert!(cell_is_ok(77));
        assert!(!cell_is_ok(126));
    }

    #[test]
    fn skew_counts_steps_toward_center() {
        assert_eq!(rank_skew(0, 1), 1);
        assert_eq!(rank_skew(0, 3), 3);
        assert_eq!(rank_skew(4, 2), 1);
        assert_eq!(rank_skew(5, 1), 0);
        assert_eq!(rank_skew(5, -1), 0);
        assert_eq!(rank_skew(6, -1), 1);
        assert_eq!(rank_skew(9, -3), 3);
        assert_eq!(rank_skew(3, -2), 0);
    }

    #[test]
    fn file_letters_skip_j() {
        assert_eq!(file_letter(8), Some('i'));
        assert_eq!(file_letter(9), Some('k'));
        assert_eq!(file_from_letter('K'), Some(9));
        assert_eq!(file_from_letter('j'), None);
        assert_eq!(file_letter(11), None);
    }
}
