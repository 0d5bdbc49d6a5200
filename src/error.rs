//! Error types for parsing and formatting operations.

/// Common error type for the fallible functions in this crate.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    /// A date string did not match the expected grammar.
    #[error("invalid date string: {0}")]
    Parse(#[from] chrono::ParseError),

    /// A duration template contained a unit code this crate does not know.
    #[error("unrecognized unit code '{0}' in duration template")]
    InvalidFormat(char),
}
