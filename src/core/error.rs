//! Configuration errors.
//!
//! Gameplay itself is infallible: illegal moves are ignored rather than
//! reported. Only building a board from a bad configuration or layout can fail.

/// Reasons a `BoardConfig` cannot produce a board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board needs at least {min} rows, got {rows}")]
    TooFewRows { rows: usize, min: usize },

    #[error("board needs at least {min} columns, got {columns}")]
    TooFewColumns { columns: usize, min: usize },

    #[error("board of {rows}x{columns} cells is too large")]
    TooManyCells { rows: usize, columns: usize },

    #[error("layout is {rows}x{columns} but the board is {expected_rows}x{expected_columns}")]
    LayoutMismatch {
        rows: usize,
        columns: usize,
        expected_rows: usize,
        expected_columns: usize,
    },

    #[error("cell ({row}, {column}) is off the board")]
    OutOfBounds { row: usize, column: usize },
}
