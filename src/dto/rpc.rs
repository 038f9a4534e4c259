use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Protocol version constant for every request envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request envelope.
///
/// `auth` carries the session token and is omitted from the wire entirely
/// while the session is logged out (the Zabbix API rejects a null `auth`
/// on `user.login`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: String,
    pub method: String,
    pub params: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    pub id: u64,
}

impl<T> JsonRpcRequest<T> {
    pub fn new(method: &str, params: T, auth: Option<String>, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
            auth,
            id,
        }
    }
}

/// JSON-RPC 2.0 response envelope.
///
/// Zabbix returns either `result` or `error`, but some proxies emit an
/// error object with `code: 0` on success, so absence and code 0 are both
/// treated as "no error".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    #[serde(default)]
    pub id: u64,
}

impl<T> JsonRpcResponse<T> {
    /// The protocol-level error carried by this envelope, if any.
    pub fn api_error(&self) -> Option<&RpcError> {
        self.error.as_ref().filter(|err| err.code != 0)
    }

    /// Unwrap the envelope into its result value.
    ///
    /// A non-zero error code becomes [`Error::Api`]; a success-shaped
    /// envelope with no result becomes [`Error::UnexpectedResponse`].
    pub fn into_result(self) -> Result<T, Error> {
        if let Some(err) = self.error {
            if err.code != 0 {
                return Err(Error::Api(err));
            }
        }
        self.result.ok_or(Error::UnexpectedResponse)
    }
}

/// Structured protocol error reported inside a response envelope.
///
/// Code 0 is the "no error" sentinel; any other code means the call
/// failed at the protocol level and `result` is undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("api error {code}: {message} {data}")]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: String,
}

/// Parameters for `user.login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginParams {
    pub user: String,
    pub password: String,
}
