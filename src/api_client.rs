use crate::dto::rpc::{JsonRpcRequest, JsonRpcResponse, LoginParams};
use crate::error::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Zabbix speaks JSON-RPC with its own media type.
const JSON_RPC_CONTENT_TYPE: &str = "application/json-rpc";

/// Session client for the Zabbix JSON-RPC API.
///
/// Holds the endpoint URL, credentials, and the session's auth state, and
/// routes every operation through one generic [`request`](Self::request)
/// primitive. The underlying `reqwest::Client` is created once and reused
/// across calls so connections are pooled.
///
/// Auth state (token, logged-in flag) and the request-id counter are a
/// single mutable resource: this type is meant for single-writer use, and
/// concurrent calls on one client must be serialized externally (e.g.
/// behind a `tokio::sync::Mutex`) if program-order id assignment matters.
#[derive(Debug)]
pub struct ZabbixApiClient {
    client: Client,
    url: String,
    username: String,
    password: String,
    auth_token: Option<String>,
    next_id: AtomicU64,
}

impl ZabbixApiClient {
    /// Create a new client for the given API endpoint.
    ///
    /// Performs no network I/O. Fails with [`Error::Config`] if any of
    /// the three values is empty.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let url = url.into();
        let username = username.into();
        let password = password.into();

        if url.is_empty() || username.is_empty() || password.is_empty() {
            return Err(Error::config(
                "url, username and password must all be provided",
            ));
        }

        Ok(Self {
            client: Client::new(),
            url,
            username,
            password,
            auth_token: None,
            next_id: AtomicU64::new(0),
        })
    }

    /// Login to Zabbix and store the session token.
    ///
    /// On a protocol error the session stays unauthenticated and the
    /// error is returned carrying the server's code/message/data.
    pub async fn login(&mut self) -> Result<()> {
        let params = LoginParams {
            user: self.username.clone(),
            password: self.password.clone(),
        };
        let token: String = self.call("user.login", params).await?;
        self.auth_token = Some(token);
        Ok(())
    }

    /// Logout and clear the session token.
    ///
    /// On a protocol error the auth state is left as-is: the server may
    /// or may not have invalidated the token, and a caller that wants a
    /// clean slate can follow up with [`set_session_token`](Self::set_session_token)
    /// using an empty token.
    pub async fn logout(&mut self) -> Result<()> {
        let _ack: Value = self.call("user.logout", serde_json::json!({})).await?;
        self.auth_token = None;
        Ok(())
    }

    /// Whether this session currently holds an auth token.
    pub fn is_logged_in(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Get current session token
    pub fn get_session_token(&self) -> Option<String> {
        self.auth_token.clone()
    }

    /// Set session token (useful for restoring sessions).
    ///
    /// An empty token logs the session out instead, keeping the
    /// token/logged-in invariant intact.
    pub fn set_session_token(&mut self, token: String) {
        if token.is_empty() {
            self.auth_token = None;
        } else {
            self.auth_token = Some(token);
        }
    }

    /// The endpoint URL this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Generic JSON-RPC call returning the full response envelope.
    ///
    /// Builds a fresh envelope (protocol version "2.0", the next request
    /// id, and the auth token whenever one is held), POSTs it as
    /// `application/json-rpc`, and parses the body back. The caller is
    /// responsible for inspecting `error.code`; see
    /// [`call`](Self::call) for the unwrapping variant.
    ///
    /// The id counter advances even when the call fails, so ids are
    /// strictly increasing and never reused within a session.
    pub async fn request<P, U>(&self, method: &str, params: P) -> Result<JsonRpcResponse<U>>
    where
        P: Serialize,
        U: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let envelope = JsonRpcRequest::new(method, params, self.auth_token.clone(), id);
        let body = serde_json::to_string(&envelope).map_err(Error::Encode)?;
        debug!("API request {id} {method}: {body}");

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, JSON_RPC_CONTENT_TYPE)
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        let response_text = response.text().await?;
        debug!("API response {id}: {response_text}");

        serde_json::from_str(&response_text).map_err(Error::Decode)
    }

    /// Call a method and unwrap its result, turning a non-zero error code
    /// into [`Error::Api`].
    pub async fn call<P, U>(&self, method: &str, params: P) -> Result<U>
    where
        P: Serialize,
        U: DeserializeOwned,
    {
        self.request(method, params).await?.into_result()
    }

    // ========================================================================
    // Domain Operations
    // ========================================================================
    //
    // Thin pass-throughs: a fixed method name routed through `request`.
    // Result shapes are method-defined, so the envelope carries a raw
    // `Value`; `dto::model` has typed records for the common ones.

    /// Fetch hosts with the given filter params (`host.get`).
    pub async fn get_hosts<P: Serialize>(&self, params: P) -> Result<JsonRpcResponse<Value>> {
        self.request("host.get", params).await
    }

    /// Fetch history with the given filter params (`history.get`).
    pub async fn get_history<P: Serialize>(&self, params: P) -> Result<JsonRpcResponse<Value>> {
        self.request("history.get", params).await
    }

    /// Update items with the given params (`item.update`).
    pub async fn update_item<P: Serialize>(&self, params: P) -> Result<JsonRpcResponse<Value>> {
        self.request("item.update", params).await
    }

    /// Update discovery rules with the given params (`discoveryrule.update`).
    pub async fn update_discovery_rule<P: Serialize>(
        &self,
        params: P,
    ) -> Result<JsonRpcResponse<Value>> {
        self.request("discoveryrule.update", params).await
    }
}
