//! Error types for vipani-map

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// vipani-map error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file error
    #[error("Config error: {0}")]
    Config(String),

    /// Items CSV parse error
    #[error("CSV error at line {line}: {message}")]
    Csv {
        /// 1-based line number in the input file
        line: usize,
        /// What went wrong on that line
        message: String,
    },

    /// Catalog document error
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
