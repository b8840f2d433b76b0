//! GameState-to-setup-notation serializer.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::game_state::hex_geometry::{cell_at, FILE_COUNT, MAX_RANK_BY_FILE};

/// Shortest setup notation for the pieces of `game_state`. Empty trailing
/// files and empty cells above the last piece of a file are omitted.
pub fn generate_setup(game_state: &GameState) -> String {
    let mut segments = Vec::with_capacity(FILE_COUNT as usize);

    for file in 0..FILE_COUNT {
        let mut segment = String::new();
        let mut empty = 0;

        for rank in 0..=MAX_RANK_BY_FILE[file as usize] {
            let Some(cell) = cell_at(file, rank) else {
                continue;
            };
            match game_state.piece_on(cell) {
                Some((color, kind)) => {
                    if empty > 0 {
                        segment.push_str(&empty.to_string());
                        empty = 0;
                    }
                    segment.push(setup_char(color, kind));
                }
                None => empty += 1,
            }
        }

        segments.push(segment);
    }

    segments.join("/").trim_end_matches('/').to_owned()
}

fn setup_char(color: Color, kind: PieceKind) -> char {
    match color {
        Color::White => kind.letter(),
        Color::Black => kind.letter().to_ascii_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::make_move;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::utils::fen_parser::parse_setup;

    #[test]
    fn opening_array_round_trips() {
        let notation = "///N7n///K8k/N7n";
        let game_state = parse_setup(notation).expect("opening should parse");
        assert_eq!(generate_setup(&game_state), notation);
    }

    #[test]
    fn canonical_form_is_reparsed_exactly() {
        for notation in ["K/1n//N//10k", "K1k/3n/3n", "/////5Kk", "K1k1n////n", "", "//////////n"] {
            let game_state = parse_setup(notation).expect("setup should parse");
            let regenerated = generate_setup(&game_state);
            assert_eq!(regenerated, notation);
            assert_eq!(parse_setup(&regenerated).expect("regenerated should parse"), game_state);
        }
    }

    #[test]
    fn positions_after_moves_round_trip() {
        let mut game_state = GameState::new_game();
        for _ in 0..6 {
            let moves = generate_legal_moves(&mut game_state).expect("opening play should be valid");
            make_move(&mut game_state, moves[0]);
            let reparsed = parse_setup(&generate_setup(&game_state)).expect("regenerated should parse");
            assert_eq!(reparsed.pieces, game_state.pieces);
        }
    }
}
