use crate::models::UpstreamNumbers;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Upstream providers addressable from `/numbers/{numberid}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    Primes,
    Fibonacci,
    Even,
    Random,
}

impl SourceId {
    pub const ALL: [SourceId; 4] = [
        SourceId::Primes,
        SourceId::Fibonacci,
        SourceId::Even,
        SourceId::Random,
    ];

    /// Short identifier used in request paths.
    pub fn code(&self) -> &'static str {
        match self {
            SourceId::Primes => "p",
            SourceId::Fibonacci => "f",
            SourceId::Even => "e",
            SourceId::Random => "r",
        }
    }

    /// Path segment of the upstream endpoint, relative to the base URL.
    fn endpoint_path(&self) -> &'static str {
        match self {
            SourceId::Primes => "primes",
            SourceId::Fibonacci => "fibo",
            SourceId::Even => "even",
            SourceId::Random => "rand",
        }
    }
}

impl FromStr for SourceId {
    type Err = FetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SourceId::ALL
            .into_iter()
            .find(|id| id.code() == value)
            .ok_or_else(|| FetchError::InvalidSource(value.to_string()))
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Upstream retrieval failures. The request handler logs these and carries on
/// with an empty batch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid number type: {0}")]
    InvalidSource(String),

    #[error("no endpoint configured for number type: {0}")]
    UnconfiguredSource(SourceId),

    #[error("retrieval exceeded {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned status code: {0}")]
    Status(StatusCode),

    #[error("malformed upstream payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Mapping from source identifier to upstream URL.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    endpoints: HashMap<SourceId, String>,
}

impl SourceTable {
    /// Table with every source mounted under `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let mut table = Self::default();
        for id in SourceId::ALL {
            table.insert(id, format!("{}/{}", base, id.endpoint_path()));
        }
        table
    }

    pub fn insert(&mut self, id: SourceId, url: impl Into<String>) {
        self.endpoints.insert(id, url.into());
    }

    pub fn endpoint(&self, id: SourceId) -> Option<&str> {
        self.endpoints.get(&id).map(String::as_str)
    }
}

/// Bounded-time provider of integer batches.
#[async_trait]
pub trait NumberSource: Send + Sync {
    async fn fetch(&self, id: SourceId) -> Result<Vec<i64>, FetchError>;
}

/// `NumberSource` backed by HTTP endpoints.
pub struct HttpNumberSource {
    http_client: Client,
    table: SourceTable,
    timeout: Duration,
    bearer_token: Option<String>,
}

impl HttpNumberSource {
    pub fn new(table: SourceTable, timeout: Duration, bearer_token: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            table,
            timeout,
            bearer_token,
        }
    }

    async fn request(&self, url: &str) -> Result<Vec<i64>, FetchError> {
        let mut req = self.http_client.get(url);
        if let Some(token) = &self.bearer_token {
            req = req.bearer_auth(token);
        }

        let res = req.send().await?;
        if res.status() != StatusCode::OK {
            return Err(FetchError::Status(res.status()));
        }

        let body = res.bytes().await?;
        let payload: UpstreamNumbers = serde_json::from_slice(&body)?;
        Ok(payload.numbers)
    }
}

#[async_trait]
impl NumberSource for HttpNumberSource {
    async fn fetch(&self, id: SourceId) -> Result<Vec<i64>, FetchError> {
        let url = self
            .table
            .endpoint(id)
            .ok_or(FetchError::UnconfiguredSource(id))?;

        // Dropping the in-flight request on expiry aborts it.
        tokio::time::timeout(self.timeout, self.request(url))
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))?
    }
}
