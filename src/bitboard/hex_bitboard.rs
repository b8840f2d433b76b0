//! 128-bit cell set over the 126-slot hex address space.
//!
//! The set is stored as two 64-bit words; the split stays private. Cells
//! 0..=63 live in the low word and 64..=127 in the high word, so a cell
//! index maps straight to a bit position.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl};

use crate::bitboard::bit_scan::lsb_index;
use crate::game_state::chess_types::Cell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HexBitboard {
    lo: u64,
    hi: u64,
}

impl HexBitboard {
    pub const EMPTY: Self = Self { lo: 0, hi: 0 };

    const SINGLE: Self = Self { lo: 1, hi: 0 };

    #[inline]
    pub const fn from_cell(cell: Cell) -> Self {
        Self::SINGLE.shifted_left(cell as u32)
    }

    /// Left shift across the word boundary. Shifts of 128 or more empty the set.
    #[inline]
    pub const fn shifted_left(self, amount: u32) -> Self {
        if amount == 0 {
            self
        } else if amount >= 128 {
            Self::EMPTY
        } else if amount >= 64 {
            Self {
                lo: 0,
                hi: self.lo << (amount - 64),
            }
        } else {
            Self {
                lo: self.lo << amount,
                hi: (self.hi << amount) | (self.lo >> (64 - amount)),
            }
        }
    }

    /// Copy of `self` with `cell` added; usable in const table generation.
    #[inline]
    pub const fn with(self, cell: Cell) -> Self {
        let bit = Self::from_cell(cell);
        Self {
            lo: self.lo | bit.lo,
            hi: self.hi | bit.hi,
        }
    }

    #[inline]
    pub fn set(&mut self, cell: Cell) {
        *self |= Self::from_cell(cell);
    }

    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        *self &= !Self::from_cell(cell);
    }

    #[inline]
    pub const fn is_set(self, cell: Cell) -> bool {
        let bit = Self::from_cell(cell);
        (self.lo & bit.lo) | (self.hi & bit.hi) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.lo == 0 && self.hi == 0
    }

    /// Truthiness: at least one cell is set.
    #[inline]
    pub const fn any(self) -> bool {
        !self.is_empty()
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.lo.count_ones() + self.hi.count_ones()
    }

    /// Lowest set cell, if any.
    #[inline]
    pub const fn lsb(self) -> Option<Cell> {
        if self.lo != 0 {
            Some(lsb_index(self.lo))
        } else if self.hi != 0 {
            Some(lsb_index(self.hi) + 64)
        } else {
            None
        }
    }

    /// Remove and return the lowest set cell.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Cell> {
        if self.lo != 0 {
            let cell = lsb_index(self.lo);
            self.lo &= self.lo - 1;
            Some(cell)
        } else if self.hi != 0 {
            let cell = lsb_index(self.hi) + 64;
            self.hi &= self.hi - 1;
            Some(cell)
        } else {
            None
        }
    }

    /// Iterate set cells in ascending order.
    #[inline]
    pub fn cells(self) -> Cells {
        Cells { remaining: self }
    }
}

/// Iterator over the set cells of a [`HexBitboard`], lowest first.
#[derive(Debug, Clone)]
pub struct Cells {
    remaining: HexBitboard,
}

impl Iterator for Cells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        self.remaining.pop_lsb()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count() as usize;
        (n, Some(n))
    }
}

impl BitAnd for HexBitboard {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            lo: self.lo & rhs.lo,
            hi: self.hi & rhs.hi,
        }
    }
}

impl BitAndAssign for HexBitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.lo &= rhs.lo;
        self.hi &= rhs.hi;
    }
}

impl BitOr for HexBitboard {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            lo: self.lo | rhs.lo,
            hi: self.hi | rhs.hi,
        }
    }
}

impl BitOrAssign for HexBitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.lo |= rhs.lo;
        self.hi |= rhs.hi;
    }
}

/// Full 128-bit complement. Padding bits come back set, so the result is
/// only meant as an AND mask and never stored in a position.
impl Not for HexBitboard {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self {
            lo: !self.lo,
            hi: !self.hi,
        }
    }
}

impl Shl<u32> for HexBitboard {
    type Output = Self;

    #[inline]
    fn shl(self, amount: u32) -> Self {
        self.shifted_left(amount)
    }
}

impl FromIterator<Cell> for HexBitboard {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, HexBitboard::with)
    }
}
