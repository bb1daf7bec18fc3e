/// Error types for loading the states dataset
use thiserror::Error;

/// A failure to produce a usable dataset. Fatal for the page that hit it.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset could not be fetched
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    /// The dataset document is not valid JSON or has the wrong shape
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same abbreviation
    #[error("Duplicate state abbreviation: {0}")]
    DuplicateAbbreviation(String),

    /// The document parsed but contains no states
    #[error("Dataset contains no states")]
    Empty,
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
