//! Views the router dispatches to.
//!
//! The view implementations live in the application's rendering layer. The
//! router only needs a stable handle for each of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A renderable unit of UI associated with a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Entry gate asking the visitor to enable sound.
    SoundGate,
    /// Main landing page.
    Landing,
}

impl View {
    /// Every view known to the application.
    pub const ALL: [View; 2] = [View::SoundGate, View::Landing];

    /// Stable identifier used in config files and rendered markup.
    pub fn id(&self) -> &'static str {
        match self {
            View::SoundGate => "sound-gate",
            View::Landing => "landing",
        }
    }

    /// Document title shown while the view is active.
    pub fn title(&self) -> &'static str {
        match self {
            View::SoundGate => "Sound Gate",
            View::Landing => "Home",
        }
    }

    /// DOM element id the view mounts into.
    pub fn mount_id(&self) -> String {
        format!("view-{}", self.id())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string names no known view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.id() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
