//! Error types for the state-communication channel.

use thiserror::Error;

/// Result type alias for fallible SCC operations.
pub type SccResult<T> = Result<T, SccError>;

/// Errors that can occur at the edges of the channel.
///
/// Reporting and querying never fail. These only surface when raw codes,
/// names, or config files are converted into typed values.
#[derive(Debug, Error)]
pub enum SccError {
    #[error("unknown follower state code: {0}")]
    UnknownState(u8),

    #[error("unknown follower state name: {0}")]
    UnknownStateName(String),

    #[error("failed to read config: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("failed to serialize config: {0}")]
    Serialize(String),
}
