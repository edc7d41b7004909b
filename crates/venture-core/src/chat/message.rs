//! Chat entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

/// Who wrote a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// A single entry in the chat log.
///
/// Entries are immutable once appended; the log hands out shared references
/// and clones only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEntry {
    /// Unique entry identifier (UUID format)
    pub id: String,
    pub speaker: Speaker,
    /// Persona that produced an assistant entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona_id: Option<String>,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    pub(crate) fn new(
        speaker: Speaker,
        persona_id: Option<String>,
        text: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            speaker,
            persona_id,
            text,
            timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }

    pub fn is_assistant(&self) -> bool {
        self.speaker == Speaker::Assistant
    }
}
