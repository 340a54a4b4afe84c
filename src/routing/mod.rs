//! Route access policy: who may see which view.
//!
//! Access is a static table mapping path prefixes to a required access
//! level, resolved in one place by longest-prefix match. The two guard
//! predicates are pure functions of session state and carry no other logic.

use crate::domain::models::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToDefault,
}

#[derive(Debug, Clone, Copy)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Roles(&'static [&'static str]),
}

pub fn require_authenticated(session: Option<&Session>) -> RouteDecision {
    match session {
        Some(_) => RouteDecision::Allow,
        None => RouteDecision::RedirectToLogin,
    }
}

pub fn require_role(session: Option<&Session>, allowed: &[&str]) -> RouteDecision {
    match session {
        None => RouteDecision::RedirectToLogin,
        Some(s) if allowed.contains(&s.user.role.as_str()) => RouteDecision::Allow,
        Some(_) => RouteDecision::RedirectToDefault,
    }
}

pub struct RouteRule {
    pub path: &'static str,
    pub access: RouteAccess,
}

pub struct RoutePolicy {
    rules: Vec<RouteRule>,
}

impl RoutePolicy {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// The site's routing table: public marketing pages, an authenticated
    /// admin area, and role-gated admin sections.
    pub fn default_table() -> Self {
        Self::new(vec![
            RouteRule { path: "/", access: RouteAccess::Public },
            RouteRule { path: "/arrangementer", access: RouteAccess::Public },
            RouteRule { path: "/aktiviteter", access: RouteAccess::Public },
            RouteRule { path: "/om-oss", access: RouteAccess::Public },
            RouteRule { path: "/kontakt", access: RouteAccess::Public },
            RouteRule { path: "/admin/login", access: RouteAccess::Public },
            RouteRule { path: "/admin", access: RouteAccess::Authenticated },
            RouteRule { path: "/admin/brukere", access: RouteAccess::Roles(&["admin"]) },
            RouteRule { path: "/admin/nyhetsbrev", access: RouteAccess::Roles(&["editor", "admin"]) },
            RouteRule { path: "/admin/rapportering", access: RouteAccess::Roles(&["editor", "admin"]) },
            RouteRule { path: "/admin/innstillinger", access: RouteAccess::Roles(&["admin"]) },
        ])
    }

    /// Longest matching prefix wins; unknown paths fall through to public
    /// (the site renders its own not-found view).
    pub fn resolve(&self, path: &str, session: Option<&Session>) -> RouteDecision {
        let rule = self
            .rules
            .iter()
            .filter(|r| prefix_matches(r.path, path))
            .max_by_key(|r| r.path.len());

        match rule.map(|r| r.access) {
            None | Some(RouteAccess::Public) => RouteDecision::Allow,
            Some(RouteAccess::Authenticated) => require_authenticated(session),
            Some(RouteAccess::Roles(allowed)) => require_role(session, allowed),
        }
    }
}

/// Matches whole path segments: `/admin` covers `/admin/arrangementer` but
/// not `/administrasjon`.
fn prefix_matches(rule_path: &str, path: &str) -> bool {
    if rule_path == "/" {
        return true;
    }
    path == rule_path || path.starts_with(&format!("{}/", rule_path))
}
