use crate::bitboard::hex_bitboard::HexBitboard;
use crate::game_state::chess_types::Color;

/// Copy of the board taken before a speculative edit or setup.
///
/// The move history is not part of the snapshot; setups and edits start a
/// fresh history once they are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub pieces: [[HexBitboard; 2]; 2],
    pub occupancy_by_color: [HexBitboard; 2],
    pub side_to_move: Color,
}
