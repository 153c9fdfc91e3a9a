//! Transport layer for the PostgREST endpoint
//!
//! The store talks to the remote through the [`PostgrestTransport`] trait so
//! tests can inject a fake. [`HttpTransport`] is the real implementation: a
//! ureq agent doing one blocking HTTP exchange per operation, bridged to
//! async with `spawn_blocking`. Timeouts and cancellation belong to the
//! agent, not this layer.

use async_trait::async_trait;
use config::SupabaseConfig;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// HTTP methods used against PostgREST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// One request against a remote table.
///
/// Query pairs come from [`crate::query::QueryBuilder`]; the body, when
/// present, is the serialized record or partial update.
#[derive(Debug, Clone)]
pub struct PostgrestRequest {
    pub method: Method,
    pub table: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub prefer: Option<&'static str>,
}

impl PostgrestRequest {
    pub fn get(table: &str) -> Self {
        Self {
            method: Method::Get,
            table: table.to_string(),
            query: Vec::new(),
            body: None,
            prefer: None,
        }
    }

    pub fn post(table: &str, body: Value) -> Self {
        Self {
            method: Method::Post,
            table: table.to_string(),
            query: Vec::new(),
            body: Some(body),
            prefer: None,
        }
    }

    pub fn patch(table: &str, body: Value) -> Self {
        Self {
            method: Method::Patch,
            table: table.to_string(),
            query: Vec::new(),
            body: Some(body),
            prefer: None,
        }
    }

    pub fn delete(table: &str) -> Self {
        Self {
            method: Method::Delete,
            table: table.to_string(),
            query: Vec::new(),
            body: None,
            prefer: None,
        }
    }

    /// Attach query pairs built by a `QueryBuilder`
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Set the `Prefer` header (e.g. `return=representation`)
    pub fn with_prefer(mut self, prefer: &'static str) -> Self {
        self.prefer = Some(prefer);
        self
    }
}

/// Errors reported by a transport.
///
/// These stay inside the `RemoteQuery` error the store raises; callers that
/// want to classify failures can inspect the source.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("remote rejected the request with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("remote returned no rows")]
    NoRows,
}

/// Seam between the store and the remote query API.
///
/// Implementations execute one request and return the decoded JSON body
/// (`Value::Null` for bodyless responses such as DELETE's 204).
#[async_trait]
pub trait PostgrestTransport: Send + Sync {
    async fn execute(&self, request: PostgrestRequest) -> Result<Value, TransportError>;
}

/// HTTP transport backed by a shared ureq agent.
///
/// Cheap to clone; clones share the agent's connection pool. Every request
/// carries the `apikey` header plus a bearer token: the authenticated user's
/// JWT when one was attached, the anon key otherwise. Authorization itself
/// is enforced remotely by the row-level security policies.
#[derive(Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: Url,
    anon_key: String,
    access_token: Option<String>,
}

impl HttpTransport {
    /// Create a transport from connection configuration
    pub fn new(config: &SupabaseConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.rest_url())
            .map_err(|err| TransportError::InvalidUrl(err.to_string()))?;
        let scheme = base_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(TransportError::InvalidUrl(
                "endpoint URL must use http or https scheme".to_string(),
            ));
        }

        Ok(Self {
            agent: ureq::agent(),
            base_url,
            anon_key: config.anon_key.clone(),
            access_token: None,
        })
    }

    /// Attach an authenticated user's JWT.
    ///
    /// Row-level security then evaluates against that user's role instead
    /// of the anonymous one.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn bearer_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }

    fn table_url(&self, request: &PostgrestRequest) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl("endpoint URL cannot be a base".to_string()))?
            .push(&request.table);
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn execute_blocking(&self, request: PostgrestRequest) -> Result<Value, TransportError> {
        let url = self.table_url(&request)?;

        let mut http_request = self
            .agent
            .request(request.method.as_str(), url.as_str())
            .set("apikey", &self.anon_key)
            .set("Authorization", &format!("Bearer {}", self.bearer_token()))
            .set("Accept", "application/json");
        if let Some(prefer) = request.prefer {
            http_request = http_request.set("Prefer", prefer);
        }

        let response = match &request.body {
            Some(body) => {
                let payload = serde_json::to_string(body)?;
                http_request
                    .set("Content-Type", "application/json")
                    .send_string(&payload)
            }
            None => http_request.call(),
        };

        match response {
            Ok(resp) => read_json_response(resp),
            Err(ureq::Error::Status(status, resp)) => Err(parse_error_response(status, resp)),
            Err(ureq::Error::Transport(err)) => Err(TransportError::Network(err.to_string())),
        }
    }
}

#[async_trait]
impl PostgrestTransport for HttpTransport {
    async fn execute(&self, request: PostgrestRequest) -> Result<Value, TransportError> {
        let transport = self.clone();
        tokio::task::spawn_blocking(move || transport.execute_blocking(request))
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?
    }
}

fn read_json_response(response: ureq::Response) -> Result<Value, TransportError> {
    let body = response
        .into_string()
        .map_err(|err| TransportError::Network(err.to_string()))?;
    // DELETE and minimal-return responses have no body
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

fn parse_error_response(status: u16, response: ureq::Response) -> TransportError {
    let body = response.into_string().unwrap_or_default();
    // PostgREST errors carry {"message", "code", "details", "hint"}
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or(body);
    TransportError::Http { status, message }
}
