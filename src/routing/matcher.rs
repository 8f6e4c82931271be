//! Route matching logic.
//!
//! # Responsibilities
//! - Compare a normalized location path against a route path
//! - Apply trailing-slash and case rules from `MatchOptions`
//!
//! # Design Decisions
//! - Default is direct equality (strict and case-sensitive)
//! - Lenient mode mirrors browser routers: `/HOME/` matches `/home`
//! - No regex, no parameters: a route path is a literal

use serde::{Deserialize, Serialize};

use crate::routing::location::Location;

/// Trait for matching locations against a route condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the location satisfies this condition.
    fn matches(&self, location: &Location) -> bool;
}

/// Path comparison rules shared by every route in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Trailing slash is significant when true.
    pub strict: bool,
    /// Letter case is significant when true.
    pub sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strict: true,
            sensitive: true,
        }
    }
}

impl MatchOptions {
    /// Options reproducing the lenient defaults of browser routing libraries.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            sensitive: false,
        }
    }

    /// Bring a path into the form compared under these options.
    pub fn normalize(&self, path: &str) -> String {
        let mut path = if self.strict {
            path
        } else {
            trim_trailing_slash(path)
        }
        .to_string();
        if !self.sensitive {
            path = path.to_lowercase();
        }
        path
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Matches a location whose path equals the route path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    expected: String,
    options: MatchOptions,
}

impl ExactPathMatcher {
    /// Create a matcher for `path`, normalized once up front.
    pub fn new(path: impl Into<String>, options: MatchOptions) -> Self {
        let path = path.into();
        Self {
            expected: options.normalize(&path),
            options,
        }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, location: &Location) -> bool {
        self.options.normalize(&location.path) == self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher_strict() {
        let matcher = ExactPathMatcher::new("/home", MatchOptions::default());

        assert!(matcher.matches(&Location::parse("/home")));
        assert!(matcher.matches(&Location::parse("/home?tab=1#x")));
        assert!(!matcher.matches(&Location::parse("/home/")));
        assert!(!matcher.matches(&Location::parse("/HOME")));
        assert!(!matcher.matches(&Location::parse("/home/extra")));
        assert!(!matcher.matches(&Location::parse("/")));
    }

    #[test]
    fn test_exact_matcher_lenient() {
        let matcher = ExactPathMatcher::new("/home", MatchOptions::lenient());

        assert!(matcher.matches(&Location::parse("/home/")));
        assert!(matcher.matches(&Location::parse("/HOME")));
        assert!(!matcher.matches(&Location::parse("/homepage")));
    }

    #[test]
    fn test_root_survives_lenient_normalization() {
        let matcher = ExactPathMatcher::new("/", MatchOptions::lenient());
        assert!(matcher.matches(&Location::parse("/")));
        assert!(matcher.matches(&Location::parse("//")));
        assert!(!matcher.matches(&Location::parse("/home")));
    }
}
