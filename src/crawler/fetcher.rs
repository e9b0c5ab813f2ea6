//! HTTP fetcher implementation
//!
//! A thin adapter over reqwest: one client builder that pins the crawler's
//! User-Agent, and one GET that yields status plus body text. Transport
//! failures surface as [`SpiderError::Http`] with the offending URL attached;
//! status codes are reported, never interpreted here.

use crate::{Result, SpiderError};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Result of a successful fetch: the response status and its body text.
///
/// A non-success status is not an error at this layer; callers decide what
/// a 404 robots.txt or an error page means.
#[derive(Debug)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body decoded as text
    pub body: String,
}

impl FetchedPage {
    /// Whether the response carried a 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Builds the HTTP client used for every request this crawler makes.
///
/// The User-Agent is fixed for the client's lifetime; format is
/// `Spiderboi/<version>`.
pub fn build_http_client(user_agent: &str) -> Result<Client> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches a URL and returns its status and body text.
///
/// # Errors
///
/// Returns [`SpiderError::Http`] on transport-level failure (DNS, connection
/// refused, timeout) or if the body cannot be read. No retries are performed.
pub async fn fetch(client: &Client, url: &Url) -> Result<FetchedPage> {
    tracing::debug!("GET {}", url);

    let response = client.get(url.as_str()).send().await.map_err(|source| {
        SpiderError::Http {
            url: url.to_string(),
            source,
        }
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|source| SpiderError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::trace!("{} -> {} ({} bytes)", url, status, body.len());

    Ok(FetchedPage { status, body })
}
