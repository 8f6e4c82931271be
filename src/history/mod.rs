//! Navigation history subsystem.
//!
//! # Data Flow
//! ```text
//! Router navigation call (push / replace / go)
//!     → History (mode-specific URL encoding)
//!     → stack.rs (entries + cursor)
//!     → current Location handed back to the router for resolution
//!
//! Address bar (href)
//!     → History::location_from_href (strip base, decode mode encoding)
//!     → Location
//! ```
//!
//! # Design Decisions
//! - Mode is picked once when the router is created
//! - All modes keep their stack in-process; they differ in how a location
//!   is written to and read from a URL
//! - Out-of-range `go` is a no-op, like the browser's

pub mod hash;
pub mod memory;
pub mod stack;
pub mod web;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::routing::location::Location;

pub use hash::HashHistory;
pub use memory::MemoryHistory;
pub use stack::HistoryStack;
pub use web::WebHistory;

/// How navigation state is encoded in the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Clean paths through the browser history API.
    #[default]
    Web,
    /// Path kept in the URL fragment after `#`.
    Hash,
    /// No URL at all; the stack lives only in memory.
    Memory,
}

impl HistoryMode {
    /// Construct a history of this mode rooted at `base`.
    pub fn create(self, base: &str) -> Box<dyn History> {
        match self {
            HistoryMode::Web => Box::new(WebHistory::new(base)),
            HistoryMode::Hash => Box::new(HashHistory::new(base)),
            HistoryMode::Memory => Box::new(MemoryHistory::new(base)),
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HistoryMode::Web => "web",
            HistoryMode::Hash => "hash",
            HistoryMode::Memory => "memory",
        };
        f.write_str(name)
    }
}

/// A navigation history the router drives.
pub trait History: Send + fmt::Debug {
    /// Mode this history implements.
    fn mode(&self) -> HistoryMode;

    /// Normalized base the application is deployed under.
    fn base(&self) -> &str;

    /// Current entry.
    fn location(&self) -> &Location;

    /// Append a new entry, discarding any forward entries.
    fn push(&mut self, to: Location);

    /// Overwrite the current entry.
    fn replace(&mut self, to: Location);

    /// Move the cursor by `delta`. Returns `None` without moving when the
    /// target is outside the stack.
    fn go(&mut self, delta: isize) -> Option<&Location>;

    /// Number of entries in the stack.
    fn entry_count(&self) -> usize;

    /// URL under which `to` appears in the address bar.
    fn create_href(&self, to: &Location) -> String;

    /// Inverse of `create_href`. `None` if `href` lies outside the base.
    fn location_from_href(&self, href: &str) -> Option<Location>;

    fn back(&mut self) -> Option<&Location> {
        self.go(-1)
    }

    fn forward(&mut self) -> Option<&Location> {
        self.go(1)
    }
}

/// Normalize a deployment base: leading `/`, no trailing `/`, root is empty.
pub fn normalize_base(base: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        return String::new();
    }
    let base = if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{}", base)
    };
    base.trim_end_matches('/').to_string()
}

/// Strip `base` from a path-style href.
pub(crate) fn strip_base<'a>(base: &str, href: &'a str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(href);
    }
    let rest = href.strip_prefix(base)?;
    if rest.is_empty() || rest.starts_with(['/', '?', '#']) {
        Some(rest)
    } else {
        None
    }
}
