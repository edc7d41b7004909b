//! Persona domain model.

use serde::{Deserialize, Serialize};

/// A named contextual-assistant identity.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Stable identifier (kebab-case, e.g. `platform-guide`)
    pub id: String,
    /// Display name of the persona
    pub name: String,
    /// Role or title describing the persona's focus
    pub title: String,
    /// Canned greeting appended when the persona becomes active
    pub greeting: String,
    /// Neutral reply used when a message gives nothing to act on
    pub fallback: String,
}
