//! Fragment mode: `https://host/base#/home`.
//!
//! The server only ever sees the base; everything after `#` is client-side.

use crate::history::{normalize_base, History, HistoryMode, HistoryStack};
use crate::routing::location::Location;

#[derive(Debug, Clone)]
pub struct HashHistory {
    base: String,
    stack: HistoryStack,
}

impl HashHistory {
    pub fn new(base: &str) -> Self {
        let base = match base.split_once('#') {
            Some((before, _)) => before,
            None => base,
        };
        Self {
            base: normalize_base(base),
            stack: HistoryStack::new(),
        }
    }
}

impl History for HashHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Hash
    }

    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> &Location {
        self.stack.current()
    }

    fn push(&mut self, to: Location) {
        self.stack.push(to);
    }

    fn replace(&mut self, to: Location) {
        self.stack.replace(to);
    }

    fn go(&mut self, delta: isize) -> Option<&Location> {
        self.stack.go(delta)
    }

    fn entry_count(&self) -> usize {
        self.stack.len()
    }

    fn create_href(&self, to: &Location) -> String {
        format!("{}#{}", self.base, to)
    }

    fn location_from_href(&self, href: &str) -> Option<Location> {
        let (document, fragment) = match href.split_once('#') {
            Some((document, fragment)) => (document, Some(fragment)),
            None => (href, None),
        };
        // Query on the document part belongs to the page, not the route.
        let document = document.split('?').next().unwrap_or_default();
        if normalize_base(document) != self.base {
            return None;
        }
        Some(fragment.map(Location::parse).unwrap_or_else(Location::root))
    }
}
