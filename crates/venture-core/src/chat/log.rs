//! Append-only chat log.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::message::{ChatEntry, Speaker};

/// Ordered chat history for one session.
///
/// Entries keep their append order and timestamps strictly increase: an
/// append whose clock reading is not after the last entry is stamped one
/// microsecond after it. There is no API to remove or edit an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_user(&mut self, text: impl Into<String>) -> &ChatEntry {
        self.append(Speaker::User, None, text.into())
    }

    pub fn append_assistant(
        &mut self,
        persona_id: impl Into<String>,
        text: impl Into<String>,
    ) -> &ChatEntry {
        self.append(Speaker::Assistant, Some(persona_id.into()), text.into())
    }

    fn append(&mut self, speaker: Speaker, persona_id: Option<String>, text: String) -> &ChatEntry {
        let timestamp = self.next_timestamp(Utc::now());
        self.entries
            .push(ChatEntry::new(speaker, persona_id, text, timestamp));
        let index = self.entries.len() - 1;
        &self.entries[index]
    }

    fn next_timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.entries.last() {
            Some(last) if now <= last.timestamp => last.timestamp + Duration::microseconds(1),
            _ => now,
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut log = ChatLog::new();
        log.append_user("first");
        log.append_assistant("platform-guide", "second");
        log.append_user("third");

        let texts: Vec<&str> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(log.entries()[1].persona_id.as_deref(), Some("platform-guide"));
        assert!(log.entries()[0].persona_id.is_none());
    }

    #[test]
    fn test_timestamps_strictly_increase() {
        let mut log = ChatLog::new();
        for i in 0..50 {
            log.append_user(format!("message {i}"));
        }

        for pair in log.entries().windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn test_identical_messages_are_distinct_entries() {
        let mut log = ChatLog::new();
        let first = log.append_user("hello").id.clone();
        let second = log.append_user("hello").id.clone();

        assert_eq!(log.len(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_clock_going_backwards_is_clamped() {
        let mut log = ChatLog::new();
        log.append_user("now");
        let last = log.last().unwrap().timestamp;

        let earlier = last - Duration::seconds(5);
        assert_eq!(log.next_timestamp(earlier), last + Duration::microseconds(1));
    }
}
