use thiserror::Error;

use crate::fetch::LookupAborted;

/// Reasons a pokemon lookup can fail.
///
/// Kept `Clone + PartialEq` so a failure can sit in lifecycle state; transport
/// errors are captured as their message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokemonError {
    /// The API answered but knows no pokemon by that name
    #[error("No pokemon with the name \"{name}\"")]
    NotFound { name: String },

    /// Request exceeded the configured total timeout
    #[error("Lookup timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Failed to reach the endpoint
    #[error("Connection to '{endpoint}' failed: {message}")]
    Connection { endpoint: String, message: String },

    /// Endpoint returned an error status or GraphQL errors
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Response body was not the expected shape
    #[error("Invalid response: {message}")]
    Decode { message: String },

    /// The lookup task died before answering
    #[error(transparent)]
    Aborted(#[from] LookupAborted),
}

impl PokemonError {
    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Timeout { .. } => "timeout",
            Self::Connection { .. } => "connection_error",
            Self::Upstream { .. } => "upstream_error",
            Self::Decode { .. } => "decode_error",
            Self::Aborted(_) => "aborted",
        }
    }
}
