// crates/restcountries-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading the catalogue or answering a query.
///
/// "Nothing matched" is never an error: lookups return `None` or an empty
/// collection for that.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be located.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The binary cache could not be encoded or decoded.
    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    /// A record is missing its primary key (`cca3`). Fatal at startup.
    #[error("record #{position} ({name:?}) has no cca3 code")]
    DataIntegrity { position: usize, name: String },

    /// A single-result code lookup hit more than one record.
    #[error("code {code:?} is ambiguous: {count} countries share it")]
    AmbiguousResult { code: String, count: usize },
}

/// Result type for catalogue operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
