//! Spiderboi: a single-site web crawler
//!
//! This crate implements a crawler scoped to one site. It fetches the site's
//! robots.txt once up front, then crawls individual paths on demand,
//! enforcing the robots policy and returning the same-host links it finds.
//!
//! The protocol is two-phase: construct a [`Crawler`], await
//! [`Crawler::ready_up`] exactly once, then call [`Crawler::crawl`] for each
//! path of interest.

pub mod crawler;
pub mod robots;

use thiserror::Error;

/// Main error type for Spiderboi operations
#[derive(Debug, Error)]
pub enum SpiderError {
    #[error("crawler is not ready; await ready_up() before crawling")]
    NotReady,

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("unsupported URL scheme: {0}")]
    InvalidScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Result type alias for Spiderboi operations
pub type Result<T> = std::result::Result<T, SpiderError>;

// Re-export commonly used types
pub use crawler::{CrawlOutcome, Crawler};
pub use robots::{PolicyEvaluator, RobotsPolicy};
