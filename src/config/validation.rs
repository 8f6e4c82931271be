//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntax and unknown view names)
//! - Route paths are non-empty, absolute and literal
//! - Route paths are distinct under the configured match options
//! - Value ranges (timeouts > 0, bind address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route table is empty")]
    NoRoutes,

    #[error("route #{index} has an empty path")]
    EmptyPath { index: usize },

    #[error("route path {path:?} must start with '/'")]
    RelativePath { path: String },

    #[error("route path {path:?} contains {found:?}; only literal paths are supported")]
    NonLiteralPath { path: String, found: char },

    #[error("route path {path:?} is declared more than once")]
    DuplicatePath { path: String },

    #[error("invalid bind address {0:?}")]
    BindAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

const RESERVED_CHARS: [char; 4] = ['?', '#', ':', '*'];

/// Check a parsed config for semantic errors.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let router = &config.router;

    if router.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut seen: Vec<String> = Vec::new();
    for (index, route) in router.routes.iter().enumerate() {
        let path = route.path.as_str();
        if path.is_empty() {
            errors.push(ValidationError::EmptyPath { index });
            continue;
        }
        if !path.starts_with('/') {
            errors.push(ValidationError::RelativePath { path: path.to_string() });
        }
        if let Some(found) = path.chars().find(|c| RESERVED_CHARS.contains(c)) {
            errors.push(ValidationError::NonLiteralPath { path: path.to_string(), found });
        }

        let key = router.match_options.normalize(path);
        if seen.contains(&key) {
            errors.push(ValidationError::DuplicatePath { path: path.to_string() });
        } else {
            seen.push(key);
        }
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.server.bind_address.clone()));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{MatchOptions, RouteEntry, View};

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = AppConfig::default();
        config.router.routes = vec![
            RouteEntry::new("", View::SoundGate),
            RouteEntry::new("home", View::Landing),
            RouteEntry::new("/a/:id", View::Landing),
            RouteEntry::new("/", View::Landing),
            RouteEntry::new("/", View::SoundGate),
        ];
        config.server.request_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyPath { index: 0 },
                ValidationError::RelativePath { path: "home".into() },
                ValidationError::NonLiteralPath { path: "/a/:id".into(), found: ':' },
                ValidationError::DuplicatePath { path: "/".into() },
                ValidationError::ZeroTimeout,
            ]
        );
    }

    #[test]
    fn test_duplicates_follow_match_options() {
        let mut config = AppConfig::default();
        config.router.routes.push(RouteEntry::new("/Home/", View::Landing));
        assert!(validate_config(&config).is_ok());

        config.router.match_options = MatchOptions::lenient();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::DuplicatePath { path: "/Home/".into() }]);
    }

    #[test]
    fn test_empty_table_rejected() {
        let mut config = AppConfig::default();
        config.router.routes.clear();
        config.server.bind_address = "nowhere".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::NoRoutes, ValidationError::BindAddress("nowhere".into())]
        );
    }
}
