//! The crawler itself: the two-phase ready/crawl protocol.
//!
//! A [`Crawler`] is bound to one site. [`Crawler::ready_up`] fetches the
//! site's robots.txt and builds the policy; [`Crawler::crawl`] then fetches
//! one path at a time, enforcing the policy and returning the same-host
//! links the page contains. The two fetches are the only suspension points,
//! and `crawl` never writes shared state, so concurrent crawls on a ready
//! crawler are safe.

pub mod fetcher;
pub mod parser;

pub use fetcher::{build_http_client, fetch, FetchedPage};

use crate::robots::{PolicyEvaluator, RobotsPolicy};
use crate::{Result, SpiderError};
use reqwest::Client;
use url::Url;

/// Product token advertised in the User-Agent header and matched against
/// robots.txt user-agent groups.
pub const PRODUCT: &str = "Spiderboi";

/// Readiness state of a crawler.
///
/// The robots policy lives inside the `Ready` variant, so "ready" and
/// "policy present" cannot drift apart.
enum Readiness {
    /// No policy loaded; crawling is a usage error.
    Unready,
    /// Policy loaded, crawling permitted.
    Ready(Box<dyn PolicyEvaluator>),
}

/// Outcome of a successful [`Crawler::crawl`] call.
///
/// Blocked-by-policy and found-zero-links are distinct outcomes, and both
/// are distinct from the not-ready error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The robots policy forbids this URL; no page fetch was made.
    Disallowed,
    /// Links discovered on the page, same-host only, in document order,
    /// duplicates included.
    Links(Vec<String>),
}

/// A crawler bound to a single site.
///
/// # Example
///
/// ```no_run
/// use spiderboi::{CrawlOutcome, Crawler};
///
/// # async fn example() -> spiderboi::Result<()> {
/// let mut crawler = Crawler::new("https://example.org")?;
/// crawler.ready_up().await?;
///
/// match crawler.crawl("/").await? {
///     CrawlOutcome::Disallowed => println!("robots.txt says no"),
///     CrawlOutcome::Links(links) => println!("found {} links", links.len()),
/// }
/// # Ok(())
/// # }
/// ```
pub struct Crawler {
    /// The site's origin (scheme + host + port); resolution base for paths
    /// and discovered hrefs, and the reference for same-host filtering.
    origin: Url,
    /// Full User-Agent value, `Spiderboi/<version>`.
    user_agent: String,
    client: Client,
    readiness: Readiness,
}

impl Crawler {
    /// Creates a crawler for the site identified by `url`.
    ///
    /// The version in the User-Agent comes from this crate's package
    /// metadata; tests that need a deterministic value should use
    /// [`Crawler::with_version`].
    ///
    /// # Errors
    ///
    /// Fails immediately, before any network activity, if `url` is
    /// malformed, uses a scheme other than http/https, or has no host.
    pub fn new(url: &str) -> Result<Self> {
        Self::with_version(url, env!("CARGO_PKG_VERSION"))
    }

    /// Creates a crawler with an explicit version for the User-Agent.
    pub fn with_version(url: &str, version: &str) -> Result<Self> {
        let origin = site_origin(url)?;
        let user_agent = format!("{}/{}", PRODUCT, version);
        let client = build_http_client(&user_agent)?;

        Ok(Self {
            origin,
            user_agent,
            client,
            readiness: Readiness::Unready,
        })
    }

    /// The site origin this crawler is bound to.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// The exact User-Agent value sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Whether [`ready_up`](Crawler::ready_up) has completed.
    pub fn is_ready(&self) -> bool {
        matches!(self.readiness, Readiness::Ready(_))
    }

    /// Prepares the crawler for crawling. This always needs to be awaited
    /// first.
    ///
    /// Fetches `<origin>/robots.txt` and builds the policy from its body.
    /// An unreachable or non-2xx robots.txt yields an empty policy (no
    /// restrictions); a malformed body is tolerated, with unparseable
    /// directives ignored. Once this returns `Ok` the crawler is ready.
    /// Calling it again rebuilds the policy.
    ///
    /// # Errors
    ///
    /// Only transport-level failures (DNS, connection refused, timeout)
    /// propagate; they leave the crawler unready.
    pub async fn ready_up(&mut self) -> Result<()> {
        let robots_url = self.origin.join("/robots.txt")?;

        let response = fetch(&self.client, &robots_url).await?;

        let policy = if response.is_success() {
            RobotsPolicy::parse(&response.body, PRODUCT)
        } else {
            tracing::debug!(
                "robots.txt returned {}; crawling unrestricted",
                response.status
            );
            RobotsPolicy::allow_all(PRODUCT)
        };

        self.readiness = Readiness::Ready(Box::new(policy));
        Ok(())
    }

    /// Crawls a path on the site.
    ///
    /// The path is resolved against the site origin, so both `/about` and a
    /// full same-site URL are accepted. Returns
    /// [`CrawlOutcome::Disallowed`] when robots.txt forbids the resolved
    /// URL, without fetching the page. Otherwise the page is fetched and
    /// every anchor href is resolved against the origin; links whose host
    /// differs from the site's (other subdomains included) are silently
    /// dropped, as are anchors with missing or unresolvable hrefs.
    ///
    /// The response status is not inspected: an error page's body is parsed
    /// for links like any other.
    ///
    /// # Errors
    ///
    /// [`SpiderError::NotReady`] when called before
    /// [`ready_up`](Crawler::ready_up) completes (no network activity in
    /// that case), or a transport failure from the page fetch.
    pub async fn crawl(&self, path: &str) -> Result<CrawlOutcome> {
        let policy = match &self.readiness {
            Readiness::Unready => return Err(SpiderError::NotReady),
            Readiness::Ready(policy) => policy,
        };

        let target = self.origin.join(path)?;

        if policy.is_disallowed(target.as_str()) {
            tracing::debug!("{} disallowed by robots.txt", target);
            return Ok(CrawlOutcome::Disallowed);
        }

        let page = fetch(&self.client, &target).await?;

        let links = parser::anchor_hrefs(&page.body)
            .into_iter()
            .filter_map(|href| self.origin.join(&href).ok())
            .filter(|resolved| same_host(resolved, &self.origin))
            .map(|resolved| resolved.to_string())
            .collect();

        Ok(CrawlOutcome::Links(links))
    }
}

/// Reduces an input URL to its origin, validating it for crawling.
fn site_origin(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SpiderError::InvalidScheme(parsed.scheme().to_string()));
    }

    if parsed.host_str().is_none() {
        return Err(SpiderError::MissingHost(url.to_string()));
    }

    let mut origin = parsed;
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);

    Ok(origin)
}

/// Exact host match against the site, ports included (an explicit port
/// equal to the scheme default still matches).
fn same_host(candidate: &Url, origin: &Url) -> bool {
    candidate.host_str() == origin.host_str()
        && candidate.port_or_known_default() == origin.port_or_known_default()
}
