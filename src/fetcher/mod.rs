//! Outbound fetch of a submitted link.
//!
//! One GET per call, bounded by the client timeout. Any non-2xx status or
//! transport failure is reported as a [`FetchError`]; nothing is retried.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::info;

use crate::models::{FetchResult, Link};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const PREVIEW_CHARS: usize = 2000;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {url} timed out after {}s", .timeout.as_secs_f32())]
    Timeout { url: String, timeout: Duration },

    #[error("{0}")]
    Connect(#[source] reqwest::Error),

    #[error("{status} for url: {url}")]
    Status { status: StatusCode, url: String },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("{0}")]
    Request(#[source] reqwest::Error),
}

impl FetchError {
    fn from_reqwest(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else if err.is_body() || err.is_decode() {
            FetchError::Body(err)
        } else {
            FetchError::Request(err)
        }
    }

    /// Short label used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::ClientBuild(_) => "client_build",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Connect(_) => "connect",
            FetchError::Status { .. } => "status",
            FetchError::Body(_) => "body",
            FetchError::Request(_) => "request",
        }
    }
}

/// Performs the outbound GET. Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Fetcher { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn fetch(&self, link: &Link) -> Result<FetchResult, FetchError> {
        let url = link.as_str();

        let response = self
            .client
            .get(link.as_url().clone())
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        // The body is decoded per the response charset, invalid sequences
        // replaced, so binary payloads still yield text.
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url, self.timeout))?;

        let content_length = body.chars().count();
        info!(url, status = status.as_u16(), content_length, "Fetched link");

        Ok(FetchResult {
            original_url: url.to_string(),
            status_code: status.as_u16(),
            content_length,
            content_preview: preview(&body, PREVIEW_CHARS).to_string(),
        })
    }
}

/// First `max_chars` characters of `text`, never splitting a character.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
