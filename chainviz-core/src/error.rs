//! Error types for tournament data validation

/// Shape violations of an outcome matrix
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("row {row} has {found} cells, expected {expected} (matrix must be square)")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix has {expected} rows but {found} category labels")]
    LabelCount { expected: usize, found: usize },

    #[error("diagonal cell ({index}, {index}) must be undefined")]
    DiagonalDefined { index: usize },

    #[error("cell ({row}, {col}) holds {value}, expected 0 (loss) or 1 (win)")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

/// Error types for tournament data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("invalid outcome matrix: {0}")]
    Shape(#[from] ShapeError),

    #[error("record for {category} has zero games played")]
    InvalidRecord { category: String },

    #[error("timing for {category} is not a non-negative number: {value}")]
    InvalidTiming { category: String, value: f64 },
}

/// Result alias for data operations
pub type Result<T> = std::result::Result<T, DataError>;
