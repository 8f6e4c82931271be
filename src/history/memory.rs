//! In-process history with no address bar, for tests and non-browser hosts.

use crate::history::{normalize_base, strip_base, History, HistoryMode, HistoryStack};
use crate::routing::location::Location;

#[derive(Debug, Clone)]
pub struct MemoryHistory {
    base: String,
    stack: HistoryStack,
}

impl MemoryHistory {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            stack: HistoryStack::new(),
        }
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.stack.position()
    }
}

impl History for MemoryHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Memory
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
        format!("{}{}", self.base, to)
    }

    fn location_from_href(&self, href: &str) -> Option<Location> {
        strip_base(&self.base, href).map(Location::parse)
    }
}
