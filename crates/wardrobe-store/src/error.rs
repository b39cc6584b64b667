//! Error types for the wardrobe-store crate.

use thiserror::Error;

/// Errors that can occur when reading from the upstream data layer.
///
/// The engine's contract is graceful degradation: every stage catches
/// these locally and falls back to an empty value, so none of them
/// should ever surface to an engine caller.
#[derive(Error, Debug)]
pub enum DataAccessError {
    /// The backing data source could not be reached
    #[error("data source unavailable: {source_name}")]
    Unavailable { source_name: String },

    /// I/O error while reading fixture or snapshot data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be decoded into its expected shape
    #[error("malformed {entity} record: {reason}")]
    Malformed { entity: String, reason: String },

    /// Referenced entity doesn't exist
    #[error("missing {entity} with id {id}")]
    MissingRecord { entity: String, id: u32 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataAccessError>;
