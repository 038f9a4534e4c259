//! # zabbix-rs
//!
//! A Rust client library for the Zabbix monitoring API, speaking JSON-RPC
//! 2.0 over HTTP with session-scoped authentication.
//!
//! ## Quick Start
//!
//! ```no_run
//! use zabbix_rs::ZabbixApiClient;
//! use serde_json::json;
//!
//! # async fn example() -> zabbix_rs::Result<()> {
//! // Create a client and login
//! let mut client = ZabbixApiClient::new(
//!     "https://zabbix.example.com/api_jsonrpc.php",
//!     "Admin",
//!     "zabbix",
//! )?;
//! client.login().await?;
//!
//! // Fetch hosts; params are whatever filter object the method accepts
//! let response = client.get_hosts(json!({ "output": "extend" })).await?;
//! if let Some(err) = response.api_error() {
//!     eprintln!("host.get failed: {err}");
//! }
//!
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Session management**: login once, the auth token rides along on
//!   every subsequent call and ids are allocated monotonically per session
//! - **Generic call primitive**: any API method is reachable through
//!   [`ZabbixApiClient::request`] / [`ZabbixApiClient::call`] with
//!   caller-defined parameter and result shapes
//! - **Typed results**: [`ZabbixApiClient::call`] deserializes straight
//!   into your type and surfaces protocol errors as [`Error::Api`]
//! - **Structured errors**: configuration, transport, encode/decode, and
//!   protocol failures are distinct [`Error`] variants — a malformed
//!   response body is a [`Error::Decode`], never a silent empty result
//!
//! One call is one HTTP round trip: there is no retry, batching, or
//! caching layer. Timeouts follow whatever the `reqwest` transport is
//! configured with.

pub mod api_client;
pub mod dto;
pub mod error;

// Re-export commonly used types at the crate root
pub use api_client::ZabbixApiClient;
pub use dto::rpc::{JsonRpcRequest, JsonRpcResponse, RpcError};
pub use error::{Error, Result};
