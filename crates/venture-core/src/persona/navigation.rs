use std::fmt;

use serde::{Deserialize, Serialize};

/// Default top-level screen at session start.
pub const DEFAULT_SCREEN: &str = "dashboard";

/// The active top-level screen and optional sub-tab.
///
/// Identifiers are free strings supplied by the navigation layer; they are
/// trimmed and lowercased so routing does not depend on caller formatting.
/// A blank tab is the same as no tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Navigation {
    pub screen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
}

impl Navigation {
    pub fn new(screen: impl AsRef<str>, tab: Option<&str>) -> Self {
        Self {
            screen: normalize(screen.as_ref()),
            tab: tab.map(normalize).filter(|t| !t.is_empty()),
        }
    }

    pub fn screen(screen: impl AsRef<str>) -> Self {
        Self::new(screen, None)
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::screen(DEFAULT_SCREEN)
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tab {
            Some(tab) => write!(f, "{}/{}", self.screen, tab),
            None => write!(f, "{}", self.screen),
        }
    }
}

fn normalize(id: &str) -> String {
    id.trim().to_lowercase()
}
