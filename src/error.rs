use std::path::PathBuf;

/// Errors from grid reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("column {column} is outside the valid range 0..{cols}")]
    InvalidColumn { column: usize, cols: usize },

    #[error("cell ({row}, {column}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from constructing an evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("board with {cells} cells exceeds the search limit of {max}")]
    BoardTooLarge { cells: usize, max: usize },
}
