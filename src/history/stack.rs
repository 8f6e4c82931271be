//! Entry stack with a cursor, shared by every history mode.

use crate::routing::location::Location;

/// Ordered history entries and the index of the current one.
///
/// Invariant: `entries` is never empty and `position < entries.len()`.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<Location>,
    position: usize,
}

impl HistoryStack {
    /// A stack holding only the root entry.
    pub fn new() -> Self {
        Self {
            entries: vec![Location::root()],
            position: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.position]
    }

    pub fn push(&mut self, to: Location) {
        self.entries.truncate(self.position + 1);
        self.entries.push(to);
        self.position = self.entries.len() - 1;
    }

    pub fn replace(&mut self, to: Location) {
        self.entries[self.position] = to;
    }

    pub fn go(&mut self, delta: isize) -> Option<&Location> {
        let target = self.position.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.position = target;
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the root entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}
