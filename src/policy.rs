//! Route policy: maps request paths to an access requirement.
//!
//! Rules are evaluated in order and the first matching prefix wins.
//! Paths that match no rule default to [`Access::Authenticated`], so a
//! forgotten route is protected rather than exposed.

use crate::config::gateway::GatewayConfig;

/// Access requirement for a matched route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// No credentials required; the authorizer is bypassed entirely.
    Public,
    /// Any successfully verified identity is sufficient.
    Authenticated,
    /// Verified identity must hold the named role.
    RoleRestricted(String),
}

#[derive(Debug, Clone)]
pub struct RouteRule {
    pub prefix: String,
    pub access: Access,
}

impl RouteRule {
    pub fn new(prefix: impl Into<String>, access: Access) -> Self {
        Self {
            prefix: prefix.into(),
            access,
        }
    }

    /// Segment-aware prefix match: `/console` matches `/console` and
    /// `/console/db`, but not `/consoles`.
    fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || self.prefix.ends_with('/'),
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoutePolicy {
    rules: Vec<RouteRule>,
    default_access: Access,
}

impl RoutePolicy {
    pub fn new(rules: Vec<RouteRule>, default_access: Access) -> Self {
        Self {
            rules,
            default_access,
        }
    }

    /// Builds the policy from configuration: public prefixes first, then
    /// role rules, with everything else requiring authentication.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let mut rules = Vec::new();

        for prefix in &config.public_prefixes {
            rules.push(RouteRule::new(prefix.clone(), Access::Public));
        }

        for (prefix, role) in &config.role_rules {
            rules.push(RouteRule::new(
                prefix.clone(),
                Access::RoleRestricted(role.clone()),
            ));
        }

        Self::new(rules, Access::Authenticated)
    }

    /// First matching rule wins; unmatched paths get the default.
    pub fn decide(&self, path: &str) -> &Access {
        self.rules
            .iter()
            .find(|rule| rule.matches(path))
            .map(|rule| &rule.access)
            .unwrap_or(&self.default_access)
    }
}
