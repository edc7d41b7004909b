//! Application state domain models.

use serde::{Deserialize, Serialize};

use crate::chat::ChatEntry;
use crate::extraction::{Role, Suggestions};
use crate::persona::{AgentSelection, Navigation};
use crate::profile::{PreferencesDraft, ProfileDraft};

/// Everything the UI needs to render one session, apart from the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub role: Role,
    pub navigation: Navigation,
    pub agent: AgentSelection,
    pub profile: ProfileDraft,
    pub preferences: PreferencesDraft,
    /// Extracted values waiting for the user to confirm or dismiss them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_suggestions: Option<Suggestions>,
}

impl AppState {
    pub fn new(role: Role, agent: AgentSelection) -> Self {
        Self {
            role,
            navigation: Navigation::default(),
            agent,
            profile: ProfileDraft::new(),
            preferences: PreferencesDraft::new(),
            pending_suggestions: None,
        }
    }
}

/// Point-in-time copy of a session, including the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: AppState,
    pub transcript: Vec<ChatEntry>,
}
