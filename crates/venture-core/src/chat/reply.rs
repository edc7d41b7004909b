//! Canned assistant replies.

use crate::extraction::Suggestions;
use crate::persona::Persona;

/// Produces the text of the simulated assistant reply.
///
/// The reply stands in for a backend call, so implementations must be cheap
/// and infallible; the text is computed when the user message is sent and
/// delivered after the configured delay.
pub trait ReplyComposer: Send + Sync {
    fn compose(&self, persona: &Persona, suggestions: &Suggestions) -> String;
}

/// Default composer: summarizes extracted suggestions, or falls back to the
/// persona's neutral prompt when nothing was recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedReplyComposer;

impl ReplyComposer for CannedReplyComposer {
    fn compose(&self, persona: &Persona, suggestions: &Suggestions) -> String {
        if suggestions.is_empty() {
            return persona.fallback.clone();
        }

        let mut reply = String::from("Here's what I picked up from that:");
        for (field, value) in suggestions.iter() {
            reply.push_str(&format!("\n- {}: {}", field.label(), value));
        }
        reply.push_str("\nConfirm to add these to your profile, or dismiss them.");
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileField;

    fn persona() -> Persona {
        Persona {
            id: "profile-coach".to_string(),
            name: "Iris".to_string(),
            title: "Profile Coach".to_string(),
            greeting: "Hi".to_string(),
            fallback: "Tell me about your industry.".to_string(),
        }
    }

    #[test]
    fn test_empty_suggestions_use_fallback() {
        let reply = CannedReplyComposer.compose(&persona(), &Suggestions::new());
        assert_eq!(reply, "Tell me about your industry.");
    }

    #[test]
    fn test_suggestions_are_listed_with_labels() {
        let mut suggestions = Suggestions::new();
        suggestions.insert(ProfileField::Country, "UAE");
        suggestions.insert(ProfileField::YearsExperience, "11-15");

        let reply = CannedReplyComposer.compose(&persona(), &suggestions);
        assert!(reply.contains("- Country: UAE"));
        assert!(reply.contains("- Years of experience: 11-15"));
    }
}
