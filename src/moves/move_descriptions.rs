use crate::game_state::chess_types::{Cell, Color, PieceKind};

pub const COLOR_WHITE: u8 = 1;
pub const COLOR_BLACK: u8 = 2;
pub const PIECE_KING: u8 = 4;
pub const PIECE_KNIGHT: u8 = 8;
const COLOR_MASK: u8 = COLOR_WHITE | COLOR_BLACK;

pub const FLAG_CAPTURE: u8 = 4;
pub const FLAG_CAPTURED_KNIGHT: u8 = 8;

/// Four-byte move record: `{ color|piece, from, to, flags }`.
///
/// Generation leaves `flags` empty; making the move fills in the capture
/// bits so the captured piece can be put back on unmake.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    color_piece: u8,
    from: Cell,
    to: Cell,
    flags: u8,
}

impl Move {
    #[inline]
    pub const fn new(color: Color, piece: PieceKind, from: Cell, to: Cell) -> Self {
        let color_code = match color {
            Color::White => COLOR_WHITE,
            Color::Black => COLOR_BLACK,
        };
        let piece_code = match piece {
            PieceKind::King => PIECE_KING,
            PieceKind::Knight => PIECE_KNIGHT,
        };
        Self {
            color_piece: color_code | piece_code,
            from,
            to,
            flags: 0,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        if self.color_piece & COLOR_MASK == COLOR_WHITE {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub const fn piece(self) -> PieceKind {
        if self.color_piece & PIECE_KNIGHT != 0 {
            PieceKind::Knight
        } else {
            PieceKind::King
        }
    }

    #[inline]
    pub const fn from(self) -> Cell {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Cell {
        self.to
    }

    #[inline]
    pub const fn flags(self) -> u8 {
        self.flags
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    /// Kind of the piece this move took, once the move has been made.
    #[inline]
    pub const fn captured_piece(self) -> Option<PieceKind> {
        if self.flags & FLAG_CAPTURE == 0 {
            None
        } else if self.flags & FLAG_CAPTURED_KNIGHT != 0 {
            Some(PieceKind::Knight)
        } else {
            Some(PieceKind::King)
        }
    }

    /// Copy of the move annotated with a capture of `piece`.
    #[inline]
    pub const fn with_capture(self, piece: PieceKind) -> Self {
        let mut flags = self.flags | FLAG_CAPTURE;
        if let PieceKind::Knight = piece {
            flags |= FLAG_CAPTURED_KNIGHT;
        }
        Self { flags, ..self }
    }

    /// Same move with the capture annotation dropped.
    #[inline]
    pub const fn without_flags(self) -> Self {
        Self { flags: 0, ..self }
    }

    /// Packed little-endian form, byte 0 being `color|piece`.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        u32::from_le_bytes([self.color_piece, self.from, self.to, self.flags])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_record_is_four_bytes() {
        assert_eq!(std::mem::size_of::<Move>(), 4);
    }

    #[test]
    fn fields_survive_packing() {
        let mv = Move::new(Color::Black, PieceKind::Knight, 101, 80);
        assert_eq!(mv.color(), Color::Black);
        assert_eq!(mv.piece(), PieceKind::Knight);
        assert_eq!((mv.from(), mv.to()), (101, 80));
        assert!(!mv.is_capture());
        assert_eq!(mv.to_bits(), u32::from_le_bytes([COLOR_BLACK | PIECE_KNIGHT, 101, 80, 0]));
    }

    #[test]
    fn capture_annotation_records_piece_kind() {
        let mv = Move::new(Color::White, PieceKind::King, 10, 22).with_capture(PieceKind::Knight);
        assert!(mv.is_capture());
        assert_eq!(mv.flags(), FLAG_CAPTURE | FLAG_CAPTURED_KNIGHT);
        assert_eq!(mv.captured_piece(), Some(PieceKind::Knight));
        assert_eq!(mv.without_flags().captured_piece(), None);
        assert_eq!(mv.without_flags(), Move::new(Color::White, PieceKind::King, 10, 22));
    }
}
