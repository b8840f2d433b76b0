//! ASCII hex board renderer.
//!
//! The board is drawn from a picture in which every cell carries a two-letter
//! code: the file letter (`A`..`L`, `J` unused) and the rank letter (`A` for
//! rank 1 up to `K` for rank 11). Rendering swaps each code for the piece on
//! that cell: `K_`/`N_` for White, `K*`/`N*` for Black and `__` for empty.
//! The shading marks `.`, `+` and blank tell the three cell colors apart.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::game_state::hex_geometry::cell_at;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardOrientation {
    /// White at the bottom, rank 11 of the `f` file on top.
    #[default]
    Normal,
    /// Half a turn, Black at the bottom.
    Rotated,
}

impl BoardOrientation {
    pub fn toggled(self) -> Self {
        match self {
            BoardOrientation::Normal => BoardOrientation::Rotated,
            BoardOrientation::Rotated => BoardOrientation::Normal,
        }
    }
}

const NORMAL_PICTURE: &str = r"
              11  __  11
           10  __/  \__  10
         9  __/. \FK/. \__  9
      8  __/+ \EJ/+ \GJ/+ \__  8
   7  __/  \DI/  \FJ/  \HI/  \__  7
   __/. \CH/. \EI/. \GI/. \IH/. \__
 6/+ \BG/+ \DH/+ \FI/+ \HH/+ \KG/+ \6
  \AF/  \CG/  \EH/  \GH/  \IG/  \LF/
 5/. \BF/. \DG/. \FH/. \HG/. \KF/. \5
  \AE/+ \CF/+ \EG/+ \GG/+ \IF/+ \LE/
 4/  \BE/  \DF/  \FG/  \HF/  \KE/  \4
  \AD/. \CE/. \EF/. \GF/. \IE/. \LD/
 3/+ \BD/+ \DE/+ \FF/+ \HE/+ \KD/+ \3
  \AC/  \CD/  \EE/  \GE/  \ID/  \LC/
 2/. \BC/. \DD/. \FE/. \HD/. \KC/. \2
  \AB/+ \CC/+ \ED/+ \GD/+ \IC/+ \LB/
 1/  \BB/  \DC/  \FD/  \HC/  \KB/  \1
  \AA/. \CB/. \EC/. \GC/. \IB/. \LA/
   a \BA/+ \DB/+ \FC/+ \HB/+ \KA/l
      b \CA/  \EB/  \GB/  \IA/k
         c \DA/. \FB/. \HA/i
            d \EA/+ \GA/h
               e \FA/g
                  f
";

const ROTATED_PICTURE: &str = r"
                  f
               g  __  e
            h  __/+ \__  d
         i  __/. \FA/. \__  c
      k  __/  \GA/  \EA/  \__  b
   l  __/+ \HA/+ \FB/+ \DA/+ \__  a
   __/. \IA/. \GB/. \EB/. \CA/. \__
  /  \KA/  \HB/  \FC/  \DB/  \BA/  \
 1\LA/+ \IB/+ \GC/+ \EC/+ \CB/+ \AA/1
  /. \KB/. \HC/. \FD/. \DC/. \BB/. \
 2\LB/  \IC/  \GD/  \ED/  \CC/  \AB/2
  /+ \KC/+ \HD/+ \FE/+ \DD/+ \BC/+ \
 3\LC/. \ID/. \GE/. \EE/. \CD/. \AC/3
  /  \KD/  \HE/  \FF/  \DE/  \BD/  \
 4\LD/+ \IE/+ \GF/+ \EF/+ \CE/+ \AD/4
  /. \KE/. \HF/. \FG/. \DF/. \BE/. \
 5\LE/  \IF/  \GG/  \EG/  \CF/  \AE/5
  /+ \KF/+ \HG/+ \FH/+ \DG/+ \BF/+ \
 6\LF/. \IG/. \GH/. \EH/. \CG/. \AF/6
    7\KG/  \HH/  \FI/  \DH/  \BG/7
       8\IH/+ \GI/+ \EI/+ \CH/8
          9\HI/. \FJ/. \DI/9
            10\GJ/  \EJ/10
               11\FK/11
";

pub fn render_game_state(game_state: &GameState, orientation: BoardOrientation) -> String {
    let picture = match orientation {
        BoardOrientation::Normal => NORMAL_PICTURE,
        BoardOrientation::Rotated => ROTATED_PICTURE,
    };

    let bytes = picture.as_bytes();
    let mut out = String::with_capacity(picture.len());
    let mut i = 0;

    while i < bytes.len() {
        if let Some(cell) = bytes.get(i + 1).and_then(|&rank| picture_cell(bytes[i], rank)) {
            out.push_str(piece_code(game_state, cell));
            i += 2;
        } else {
            out.push(char::from(bytes[i]));
            i += 1;
        }
    }

    out
}

fn picture_cell(file_code: u8, rank_code: u8) -> Option<Cell> {
    if !(b'A'..=b'L').contains(&file_code) || !(b'A'..=b'K').contains(&rank_code) {
        return None;
    }
    let mut file = i32::from(file_code - b'A');
    if file_code > b'J' {
        file -= 1;
    }
    cell_at(file, i32::from(rank_code - b'A'))
}

fn piece_code(game_state: &GameState, cell: Cell) -> &'static str {
    match game_state.piece_on(cell) {
        Some((Color::White, PieceKind::King)) => "K_",
        Some((Color::White, PieceKind::Knight)) => "N_",
        Some((Color::Black, PieceKind::King)) => "K*",
        Some((Color::Black, PieceKind::Knight)) => "N*",
        None => "__",
    }
}
