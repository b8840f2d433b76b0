//! Crate root module declarations for the hexagonal chess core.
//!
//! Exposes the board primitives, hex geometry, attack tables, legal move
//! generation and the console front end so the binary, benches and tests can
//! import stable module paths.

pub mod errors;

pub mod bitboard {
    pub mod bit_scan;
    pub mod hex_bitboard;
}

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod hex_geometry;
    pub mod position_snapshot;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod leaper_attacks;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub mod console {
    pub mod console_top;
    pub mod session;
}
