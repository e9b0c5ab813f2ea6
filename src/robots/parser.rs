//! Robots.txt policy adapter built on the robotstxt crate.

use robotstxt::DefaultMatcher;

use super::PolicyEvaluator;

/// Parsed robots.txt data for one site, scoped to one user agent.
///
/// An empty body means "no restrictions". Malformed directives are ignored
/// by the underlying matcher, so building a policy never fails.
#[derive(Debug, Clone)]
pub struct RobotsPolicy {
    /// Raw robots.txt content (empty string means allow all)
    body: String,
    /// Agent product token the rules are evaluated against
    agent: String,
}

impl RobotsPolicy {
    /// Builds a policy from raw robots.txt content.
    ///
    /// # Arguments
    ///
    /// * `body` - The robots.txt file content, however malformed
    /// * `agent` - The crawler's product token (e.g. "Spiderboi")
    pub fn parse(body: &str, agent: &str) -> Self {
        Self {
            body: body.to_string(),
            agent: agent.to_string(),
        }
    }

    /// Builds a permissive policy that allows everything.
    ///
    /// Used when robots.txt cannot be fetched (non-success status).
    pub fn allow_all(agent: &str) -> Self {
        Self::parse("", agent)
    }
}

impl PolicyEvaluator for RobotsPolicy {
    fn is_disallowed(&self, url: &str) -> bool {
        if self.body.is_empty() {
            return false;
        }

        // Parse and match on demand; the matcher ignores unparseable lines.
        let mut matcher = DefaultMatcher::default();
        !matcher.one_agent_allowed_by_robots(&self.body, &self.agent, url)
    }
}
