use thiserror::Error;

/// Rejected simulation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board width must be positive, got {0}")]
    InvalidWidth(usize),
    #[error("board height must be positive, got {0}")]
    InvalidHeight(usize),
    #[error("population percentage must be within 0..=100, got {0}")]
    PopulationPercentage(u32),
    #[error("frames per second must be a positive finite number, got {0}")]
    FramesPerSecond(f64),
    #[error("board of {width}x{height} cells is too large")]
    BoardTooLarge { width: usize, height: usize },
}

/// Failure to read a board from its glyph grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("board text contains no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
    #[error("expected {expected} cells, got {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
