//! Error types for temporal primitives.

use thiserror::Error;

/// Error type for temporal identity, edge and graph operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required value was absent or a numeric value was not finite.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A time range whose start lies after its end.
    #[error("invalid time range: start {start} > end {end}")]
    InvalidTimeRange { start: f64, end: f64 },

    /// An edge endpoint that is not a vertex of the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
}

impl Error {
    pub(crate) fn non_finite(what: &str, value: f64) -> Self {
        Self::InvalidArgument(format!("{what} must be finite, got {value}"))
    }
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
