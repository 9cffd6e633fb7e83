// Shared HTTP client.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use reqwest::{Method, RequestBuilder, StatusCode};
use schedulix_core::{ClientOptions, ErrorKind, SchedulixError};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::envelope;

/// Where the facade reads the current bearer token from.
///
/// The session store implements this; the client never writes a token,
/// it only attaches whatever is currently installed.
pub trait BearerSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// A source that never yields a token, for unauthenticated clients.
pub struct NoBearer;

impl BearerSource for NoBearer {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// Callback fired when any response comes back 401, before the call
/// rejects. The store registers a handler that tears the session down.
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

/// Single point of HTTP egress for the client core.
///
/// Each call is one round trip: no retries, no caching, no batching. A
/// fixed wall-clock timeout applies to every request.
pub struct ApiClient {
    http: reqwest::Client,
    options: ClientOptions,
    bearer: Arc<dyn BearerSource>,
    on_unauthorized: RwLock<Option<UnauthorizedHandler>>,
}

impl ApiClient {
    pub fn new(options: ClientOptions, bearer: Arc<dyn BearerSource>) -> Result<Self> {
        options.validate().map_err(|e| anyhow::anyhow!(e))?;

        let http = reqwest::Client::builder()
            .timeout(options.request_timeout)
            .build()?;

        Ok(Self {
            http,
            options,
            bearer,
            on_unauthorized: RwLock::new(None),
        })
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Install the forced-logout handler. At most one is active; a second
    /// registration replaces the first.
    pub fn set_unauthorized_handler(&self, handler: UnauthorizedHandler) {
        *self.on_unauthorized.write().unwrap() = Some(handler);
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.options.endpoint(path);
        let mut rb = self.http.request(method, url);
        if let Some(token) = self.bearer.bearer_token() {
            rb = rb.bearer_auth(token);
        }
        rb
    }

    /// Send a prepared request and map the response into the envelope
    /// body or a structured error.
    async fn execute(&self, method: Method, path: &str, rb: RequestBuilder) -> Result<Value> {
        debug!(%method, path, "api request");

        let response = match rb.send().await {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                warn!(path, "request timed out");
                return Err(SchedulixError::timeout("Request timed out")
                    .with_source(e.into())
                    .into_anyhow());
            }
            Err(e) => {
                warn!(path, error = %e, "request failed to reach the server");
                return Err(SchedulixError::unavailable("Could not reach the server")
                    .with_source(e.into())
                    .into_anyhow());
            }
        };

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if status == StatusCode::UNAUTHORIZED {
            // Session teardown happens here, synchronously with response
            // handling, before the caller sees the rejection.
            let handler = self.on_unauthorized.read().unwrap().clone();
            if let Some(handler) = handler {
                handler();
            }
            return Err(SchedulixError::not_authenticated(
                envelope::message(&body).unwrap_or_else(|| "Session expired".to_string()),
            )
            .into_anyhow());
        }

        if !status.is_success() {
            let kind = ErrorKind::from_status(status.as_u16());
            let message = envelope::message(&body)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            warn!(path, status = status.as_u16(), "api error response");

            let mut err = SchedulixError::new(kind, message);
            if let Some(fields) = envelope::validation_errors(&body) {
                err = err.with_field_errors(fields);
            }
            return Err(err.into_anyhow());
        }

        Ok(body)
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        let rb = self.builder(Method::GET, path);
        self.execute(Method::GET, path, rb).await
    }

    pub async fn get_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value> {
        let rb = self.builder(Method::GET, path).query(query);
        self.execute(Method::GET, path, rb).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let rb = self.builder(Method::POST, path).json(body);
        self.execute(Method::POST, path, rb).await
    }

    /// POST without a request body (e.g. logout, mark-as-read).
    pub async fn post_empty(&self, path: &str) -> Result<Value> {
        let rb = self.builder(Method::POST, path);
        self.execute(Method::POST, path, rb).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let rb = self.builder(Method::PUT, path).json(body);
        self.execute(Method::PUT, path, rb).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        let rb = self.builder(Method::DELETE, path);
        self.execute(Method::DELETE, path, rb).await
    }
}
