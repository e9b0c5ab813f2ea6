//! Robots.txt handling module
//!
//! The robots policy is exposed to the rest of the crate as an opaque
//! capability: something that can answer "is this URL disallowed?". The one
//! concrete implementation wraps the robotstxt crate.

mod parser;

pub use parser::RobotsPolicy;

/// A robots exclusion policy for a single site and user agent.
///
/// Implementations must tolerate arbitrary input: a malformed robots.txt
/// never produces an error, only a more permissive policy.
pub trait PolicyEvaluator: Send + Sync {
    /// Returns true if the policy forbids fetching `url`.
    fn is_disallowed(&self, url: &str) -> bool;
}
