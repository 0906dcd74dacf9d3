//! Async HTTP fetcher wrapping reqwest.
//!
//! One GET per call with a fixed timeout. Non-2xx responses are errors and
//! nothing is retried. Idle connections are not kept between calls.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::params::QueryParams;
use crate::types::{DataportalError, DataportalResult, DocumentFormat};

/// Per-call timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("dataportal/", env!("CARGO_PKG_VERSION"));
const BODY_SNIPPET_CHARS: usize = 256;

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

/// HTTP client for the upstream open-data endpoints.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and return JSON or text depending on `format`.
    pub async fn get(
        &self,
        url: &str,
        params: &QueryParams,
        format: DocumentFormat,
    ) -> DataportalResult<Payload> {
        match format {
            DocumentFormat::Json => self.get_json(url, params).await.map(Payload::Json),
            DocumentFormat::Text | DocumentFormat::Html => self
                .get_text(url, params, format.accept())
                .await
                .map(Payload::Text),
        }
    }

    /// GET `url` with `Accept: application/json` and decode the body.
    pub async fn get_json(&self, url: &str, params: &QueryParams) -> DataportalResult<Value> {
        let (final_url, body) = self
            .send(url, params, DocumentFormat::Json.accept())
            .await?;

        serde_json::from_str(&body).map_err(|e| DataportalError::Decode {
            url: final_url,
            message: e.to_string(),
        })
    }

    /// GET `url` and return the raw body.
    pub async fn get_text(
        &self,
        url: &str,
        params: &QueryParams,
        accept: &str,
    ) -> DataportalResult<String> {
        self.send(url, params, accept).await.map(|(_, body)| body)
    }

    async fn send(
        &self,
        url: &str,
        params: &QueryParams,
        accept: &str,
    ) -> DataportalResult<(String, String)> {
        let response = self
            .client
            .get(url)
            .query(params)
            .header(ACCEPT, accept)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| DataportalError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let final_url = response.url().to_string();

        let body = response
            .text()
            .await
            .map_err(|source| DataportalError::Transport {
                url: final_url.clone(),
                source,
            })?;

        if !status.is_success() {
            tracing::debug!("Upstream {final_url} answered {status}");
            return Err(DataportalError::Status {
                url: final_url,
                status: status.as_u16(),
                body: body.trim().chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        Ok((final_url, body))
    }
}
