//! Normalized navigation targets.

use serde::Serialize;
use std::fmt;

/// A navigation target split into the parts the router cares about.
///
/// Only `path` takes part in matching; query and fragment are carried along
/// so that history entries round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl Location {
    /// Parse a raw target such as `/home?ref=nav#top`.
    ///
    /// A missing leading slash is added; an empty target is the root.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self { path, query, hash }
    }

    /// The root location `/`.
    pub fn root() -> Self {
        Self::parse("/")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{}", hash)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_query_and_hash() {
        let loc = Location::parse("/home?ref=nav#top");
        assert_eq!(loc.path, "/home");
        assert_eq!(loc.query.as_deref(), Some("ref=nav"));
        assert_eq!(loc.hash.as_deref(), Some("top"));
        assert_eq!(loc.to_string(), "/home?ref=nav#top");
    }

    #[test]
    fn test_parse_adds_leading_slash() {
        assert_eq!(Location::parse("home").path, "/home");
        assert_eq!(Location::parse("").path, "/");
        assert_eq!(Location::parse("?q=1").path, "/");
    }
}
