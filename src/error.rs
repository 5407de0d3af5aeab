use thiserror::Error;

/// Main error type for explmap
#[derive(Error, Debug)]
pub enum ExplmapError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Low-level table decoding errors
    #[error("Table error: {0}")]
    Table(#[from] csv::Error),

    /// A required header column is absent
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Structurally broken input, e.g. a prediction table read with the
    /// wrong separator
    #[error("Format error: {0}")]
    Format(String),
}

/// Convenient Result type using ExplmapError
pub type Result<T> = std::result::Result<T, ExplmapError>;
