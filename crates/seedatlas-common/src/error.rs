//! Error types for Seedatlas queries.

use thiserror::Error;

/// Top-level error type for query operations.
///
/// Unknown version or dimension selectors are deliberately NOT errors;
/// they resolve through the documented fallback mappings before a query
/// runs. Likewise, a feature type with no tiling configuration, a tile
/// with no candidate, or a candidate that fails viability are ordinary
/// filtering outcomes, not failures.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The requested region exceeds the per-query size limit.
    #[error("query region of {cells} cells exceeds the limit of {limit}")]
    RegionTooLarge {
        /// Requested cell count.
        cells: i64,
        /// Maximum allowed cell count.
        limit: i64,
    },

    /// The generation oracle failed internally.
    ///
    /// Oracles are expected to be infallible for any bound seed; a
    /// backend that can fail reports it here and the whole query aborts.
    #[error("oracle failure: {0}")]
    Oracle(String),
}

/// Result type alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
