//! Forward bit scan for 64-bit words.
//!
//! Isolates the least significant one bit, multiplies it by a De Bruijn
//! sequence and reads the bit index from a 64-entry table.

const DEBRUIJN_64: u64 = 0x07ED_D5E5_9A4E_28C2;

const INDEX_64: [u8; 64] = [
    63, 0, 58, 1, 59, 47, 53, 2, //
    60, 39, 48, 27, 54, 33, 42, 3, //
    61, 51, 37, 40, 49, 18, 28, 20, //
    55, 30, 34, 11, 43, 14, 22, 4, //
    62, 57, 46, 52, 38, 26, 32, 41, //
    50, 36, 17, 19, 29, 10, 13, 21, //
    56, 45, 25, 31, 35, 16, 9, 12, //
    44, 24, 15, 8, 23, 7, 6, 5,
];

/// Index (`0..=63`) of the least significant set bit.
///
/// `word` must be non-zero; callers test for emptiness first.
#[inline]
pub const fn lsb_index(word: u64) -> u8 {
    debug_assert!(word != 0);
    let isolated = word & word.wrapping_neg();
    INDEX_64[(isolated.wrapping_mul(DEBRUIJN_64) >> 58) as usize]
}
