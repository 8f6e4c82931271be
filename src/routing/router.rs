//! Route lookup and navigation.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Resolve a location to the view it renders
//! - Drive the history stack (push, replace, back, forward, go)
//!
//! # Design Decisions
//! - Table is immutable after construction and shared via `Arc`
//! - First match wins; duplicate paths are kept but shadowed
//! - Unmatched locations are still navigated to and render no view
//! - Pushing the current location again is a no-op

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::RouterConfig;
use crate::history::{History, HistoryMode};
use crate::routing::location::Location;
use crate::routing::matcher::{ExactPathMatcher, MatchOptions, Matcher};
use crate::routing::view::View;

/// A `(path, view)` pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub view: View,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}

#[derive(Debug)]
struct CompiledRoute {
    entry: RouteEntry,
    matcher: ExactPathMatcher,
}

/// Ordered, immutable set of routes.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    options: MatchOptions,
}

impl RouteTable {
    /// Compile `entries` in order. Paths are normalized the same way
    /// navigation targets are, so `home` is stored as `/home`.
    pub fn new(entries: Vec<RouteEntry>, options: MatchOptions) -> Self {
        let mut routes: Vec<CompiledRoute> = Vec::with_capacity(entries.len());

        for mut entry in entries {
            entry.path = Location::parse(&entry.path).path;
            let matcher = ExactPathMatcher::new(entry.path.clone(), options);

            let key = options.normalize(&entry.path);
            if routes.iter().any(|r| options.normalize(&r.entry.path) == key) {
                tracing::warn!(
                    path = %entry.path,
                    view = %entry.view,
                    "Duplicate route path; earlier entry takes precedence"
                );
            }

            routes.push(CompiledRoute { entry, matcher });
        }

        tracing::debug!(
            routes = routes.len(),
            strict = options.strict,
            sensitive = options.sensitive,
            "Route table compiled"
        );
        Self { routes, options }
    }

    /// First entry matching `location`, if any.
    pub fn resolve(&self, location: &Location) -> Option<&RouteEntry> {
        self.routes
            .iter()
            .find(|r| r.matcher.matches(location))
            .map(|r| &r.entry)
    }

    /// Convenience wrapper over [`RouteTable::resolve`] for raw targets.
    pub fn resolve_view(&self, to: &str) -> Option<View> {
        self.resolve(&Location::parse(to)).map(|entry| entry.view)
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().map(|r| &r.entry)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.entries().any(|entry| entry.path == path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }
}

/// Outcome of resolving a navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub location: Location,
    /// URL as it appears in the address bar for the router's history mode.
    pub href: String,
    /// `None` when no route matched.
    pub view: Option<View>,
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        self.view.is_some()
    }
}

/// Everything needed to build a [`Router`].
#[derive(Debug)]
pub struct RouterOptions {
    pub history: Box<dyn History>,
    pub routes: Vec<RouteEntry>,
    pub match_options: MatchOptions,
}

/// Build a router from a history and a list of routes.
pub fn create_router(options: RouterOptions) -> Router {
    let table = Arc::new(RouteTable::new(options.routes, options.match_options));
    Router::new(table, options.history)
}

/// A route table bound to a history stack.
#[derive(Debug)]
pub struct Router {
    table: Arc<RouteTable>,
    history: Box<dyn History>,
}

impl Router {
    pub fn new(table: Arc<RouteTable>, history: Box<dyn History>) -> Self {
        tracing::info!(
            history = %history.mode(),
            base = %history.base(),
            routes = table.len(),
            "Router created"
        );
        Self { table, history }
    }

    /// Build the table and history described by a config section.
    pub fn from_config(config: &RouterConfig) -> Self {
        create_router(RouterOptions {
            history: config.history.create(&config.base),
            routes: config.routes.clone(),
            match_options: config.match_options,
        })
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    pub fn mode(&self) -> HistoryMode {
        self.history.mode()
    }

    pub fn current_location(&self) -> &Location {
        self.history.location()
    }

    pub fn current_route(&self) -> Option<&RouteEntry> {
        self.table.resolve(self.history.location())
    }

    /// View rendered for the current location.
    pub fn current_view(&self) -> Option<View> {
        self.current_route().map(|entry| entry.view)
    }

    /// Resolve `to` without navigating.
    pub fn resolve(&self, to: &str) -> Resolution {
        self.resolution_for(Location::parse(to))
    }

    /// Resolve an address-bar URL in this router's history mode.
    pub fn resolve_href(&self, href: &str) -> Option<Resolution> {
        self.history
            .location_from_href(href)
            .map(|location| self.resolution_for(location))
    }

    /// Navigate to `to`, adding a history entry.
    pub fn push(&mut self, to: &str) -> Resolution {
        let location = Location::parse(to);
        if &location == self.history.location() {
            tracing::debug!(location = %location, "Already at location; push skipped");
        } else {
            self.history.push(location);
        }
        self.on_navigated()
    }

    /// Navigate to `to`, overwriting the current history entry.
    pub fn replace(&mut self, to: &str) -> Resolution {
        self.history.replace(Location::parse(to));
        self.on_navigated()
    }

    pub fn back(&mut self) -> Option<Resolution> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<Resolution> {
        self.go(1)
    }

    /// Move `delta` entries through history. `None` if that leaves the stack.
    pub fn go(&mut self, delta: isize) -> Option<Resolution> {
        if self.history.go(delta).is_none() {
            tracing::debug!(delta, entries = self.history.entry_count(), "History move out of range");
            return None;
        }
        Some(self.on_navigated())
    }

    fn on_navigated(&self) -> Resolution {
        let resolution = self.resolution_for(self.history.location().clone());
        match resolution.view {
            Some(view) => tracing::debug!(location = %resolution.location, view = %view, "Navigated"),
            None => tracing::warn!(location = %resolution.location, "No match found for location"),
        }
        resolution
    }

    fn resolution_for(&self, location: Location) -> Resolution {
        Resolution {
            href: self.history.create_href(&location),
            view: self.table.resolve(&location).map(|entry| entry.view),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;

    fn router(routes: Vec<RouteEntry>) -> Router {
        create_router(RouterOptions {
            history: Box::new(MemoryHistory::new("/")),
            routes,
            match_options: MatchOptions::default(),
        })
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(
            vec![
                RouteEntry::new("/", View::SoundGate),
                RouteEntry::new("/", View::Landing),
            ],
            MatchOptions::default(),
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve_view("/"), Some(View::SoundGate));
    }

    #[test]
    fn test_entry_paths_are_normalized() {
        let table = RouteTable::new(
            vec![RouteEntry::new("home", View::Landing)],
            MatchOptions::default(),
        );
        assert!(table.contains_path("/home"));
        assert_eq!(table.resolve_view("/home"), Some(View::Landing));
    }

    #[test]
    fn test_unmatched_push_still_navigates() {
        let mut router = router(vec![RouteEntry::new("/", View::SoundGate)]);

        let resolution = router.push("/missing");
        assert!(!resolution.is_match());
        assert_eq!(router.current_location().path, "/missing");
        assert_eq!(router.current_view(), None);

        let back = router.back().unwrap();
        assert_eq!(back.view, Some(View::SoundGate));
    }

    #[test]
    fn test_duplicate_push_is_skipped() {
        let mut router = router(vec![RouteEntry::new("/", View::SoundGate)]);
        router.push("/");
        assert_eq!(router.history().entry_count(), 1);
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut router = router(vec![
            RouteEntry::new("/", View::SoundGate),
            RouteEntry::new("/home", View::Landing),
        ]);
        let resolution = router.replace("/home");
        assert_eq!(resolution.view, Some(View::Landing));
        assert_eq!(router.history().entry_count(), 1);
        assert!(router.back().is_none());
    }

    #[test]
    fn test_resolve_does_not_navigate() {
        let router = router(vec![RouteEntry::new("/home", View::Landing)]);
        let resolution = router.resolve("/home?ref=gate");
        assert_eq!(resolution.view, Some(View::Landing));
        assert_eq!(resolution.href, "/home?ref=gate");
        assert_eq!(router.current_location().path, "/");
    }
}
