pub mod model;
pub mod rpc;

// Re-export commonly used types for convenience
pub use model::*;
pub use rpc::{JsonRpcRequest, JsonRpcResponse, LoginParams, RpcError, JSONRPC_VERSION};
