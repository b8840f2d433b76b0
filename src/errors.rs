//! Errors used throughout the hexagonal chess core.
//!
//! `HexChessError` is the single error type returned by setup parsing,
//! position validation, move generation and the console front end. Parsing
//! and position variants are recoverable: the session rolls back to its
//! snapshot and reports them. `InvalidPosition` replaces the precondition
//! assertions of check detection, so callers get an error instead of a
//! garbage answer when a king is missing or the side not to move is already
//! in check.

use crate::game_state::chess_types::Cell;

/// Unified error type for the engine core.
#[derive(thiserror::Error, Debug)]
pub enum HexChessError {
    /// A character outside `K N k n / 0-9` appeared in setup notation.
    #[error("unexpected character '{0}' in setup notation")]
    InvalidSetupChar(char),

    /// Setup notation moved the rank cursor off the hexagon before placing a piece.
    #[error("setup notation places a piece outside the board (file {file}, rank {rank})")]
    InvalidSetupCell { file: i32, rank: i32 },

    /// The position parsed or edited fine but is not a legal position for the side to move.
    #[error("position is illegal")]
    IllegalPosition,

    /// An operation that needs a valid position (both kings present, side
    /// not to move not in check) was called on an invalid one.
    #[error("operation requires a valid position")]
    InvalidPosition,

    /// Cell text that does not name one of the 91 playable cells.
    #[error("invalid cell: {0}")]
    InvalidCell(String),

    /// Cell index outside the playable address space.
    #[error("cell index {0} is not a playable cell")]
    CellOutOfBounds(Cell),

    /// Move text that could not be read as `[K|N]<from><to>`.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// Move text was readable but matches no legal move.
    #[error("no legal move matches {0}")]
    NoSuchMove(String),

    /// Unmake was requested with nothing on the history stack.
    #[error("history stack is empty")]
    EmptyHistory,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations.
pub type HexChessResult<T> = Result<T, HexChessError>;
