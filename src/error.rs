//! Error types for the Zabbix API client.

use crate::dto::rpc::RpcError;

/// Unified error type for all client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or empty URL/username/password at construction time.
    /// Returned before any network activity happens.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Connection, timeout, or HTTP-level failure from the transport.
    /// Never retried automatically; the caller decides.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body was not a valid JSON-RPC envelope.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A well-formed response envelope carrying a non-zero error code.
    #[error(transparent)]
    Api(#[from] RpcError),

    /// A success-shaped response with no result value to return.
    #[error("unexpected response: no result or error in envelope")]
    UnexpectedResponse,
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The protocol-level error, if this is one.
    pub fn as_api_error(&self) -> Option<&RpcError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
