//! Unidirectional session store.

use std::sync::Arc;
use std::time::Duration;

use super::action::{Action, Outcome};
use super::model::{AppState, SessionSnapshot};
use crate::chat::{CannedReplyComposer, ChatEntry, ChatSession, PendingReply, ReplyComposer};
use crate::config::VentureConfig;
use crate::error::{Result, VentureError};
use crate::extraction::{KeywordExtractor, Role};
use crate::persona::{AgentRouter, AgentSelection, Navigation, Persona};
use crate::profile::ApplyPolicy;

/// Behavioral knobs of a store, usually taken from `VentureConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub role: Role,
    pub apply_policy: ApplyPolicy,
    pub reply_delay: Duration,
    pub cancel_replies_on_navigation: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            role: Role::default(),
            apply_policy: ApplyPolicy::default(),
            reply_delay: Duration::from_millis(1200),
            cancel_replies_on_navigation: true,
        }
    }
}

impl StoreOptions {
    pub fn from_config(config: &VentureConfig) -> Self {
        Self {
            role: Role::default(),
            apply_policy: config.profile.apply_policy,
            reply_delay: config.chat.reply_delay(),
            cancel_replies_on_navigation: config.chat.cancel_replies_on_navigation,
        }
    }
}

/// Owns one session: its `AppState` and its chat log.
///
/// Every change goes through [`Store::dispatch`]. Actions are applied
/// synchronously in dispatch order; the only deferred effect is the
/// assistant reply scheduled by `SendMessage`, which requires a tokio
/// runtime.
pub struct Store {
    state: AppState,
    chat: ChatSession,
    extractor: KeywordExtractor,
    router: AgentRouter,
    composer: Arc<dyn ReplyComposer>,
    apply_policy: ApplyPolicy,
    cancel_replies_on_navigation: bool,
}

impl Store {
    /// Builds a store from configuration, loading the keyword table and
    /// persona catalog it names.
    pub fn from_config(config: &VentureConfig) -> Result<Self> {
        let extractor = KeywordExtractor::new(
            Arc::new(config.keyword_table()?),
            config.extraction.match_policy,
        );
        let router = AgentRouter::new(Arc::new(config.persona_catalog()?));
        Ok(Self::new(
            extractor,
            router,
            Arc::new(CannedReplyComposer),
            StoreOptions::from_config(config),
        ))
    }

    /// Starts a session on the default screen with the default persona,
    /// whose greeting opens the chat log.
    pub fn new(
        extractor: KeywordExtractor,
        router: AgentRouter,
        composer: Arc<dyn ReplyComposer>,
        options: StoreOptions,
    ) -> Self {
        let selection = router.initial_selection();
        let chat = ChatSession::opened_by(
            options.reply_delay,
            selection.persona_id(),
            selection.greeting(),
        );

        tracing::info!(
            role = %options.role,
            persona = selection.persona_id(),
            "Session started"
        );

        Self {
            state: AppState::new(options.role, selection),
            chat,
            extractor,
            router,
            composer,
            apply_policy: options.apply_policy,
            cancel_replies_on_navigation: options.cancel_replies_on_navigation,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> &AgentRouter {
        &self.router
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn transcript(&self) -> Vec<ChatEntry> {
        self.chat.transcript()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            transcript: self.chat.transcript(),
        }
    }

    pub fn is_ended(&self) -> bool {
        self.chat.is_ended()
    }

    /// Waits for scheduled assistant replies to land or be cancelled.
    pub async fn settle(&mut self) {
        self.chat.settle().await;
    }

    /// Applies one action.
    ///
    /// Fails without changing state when the session has ended, when a
    /// message is blank, or when an explicitly named persona is unknown.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        if self.chat.is_ended() {
            tracing::warn!(action = action.name(), "Rejected action on ended session");
            return Err(VentureError::SessionEnded);
        }
        tracing::debug!(action = action.name(), "Dispatch");

        let mut outcome = Outcome::default();

        match action {
            Action::Navigate { screen, tab } => {
                let navigation = Navigation::new(screen, tab.as_deref());
                // Re-selecting the current view keeps an explicitly chosen persona.
                if navigation != self.state.navigation {
                    if self.cancel_replies_on_navigation {
                        self.chat.cancel_pending();
                    }
                    let persona = self.router.route(&navigation).clone();
                    self.state.navigation = navigation;
                    self.select_persona(&persona, &mut outcome)?;
                }
            }
            Action::SwitchPersona { persona_id } => {
                let persona = self.router.persona(&persona_id)?.clone();
                self.select_persona(&persona, &mut outcome)?;
            }
            Action::SetRole { role } => {
                if role != self.state.role {
                    self.state.role = role;
                    // Pending values were extracted under the old role's categories.
                    self.state.pending_suggestions = None;
                }
            }
            Action::EditProfileField { field, value } => {
                self.state.profile.set(field, value);
            }
            Action::SetRiskTolerance { risk_tolerance } => {
                self.state.preferences.risk_tolerance = risk_tolerance;
            }
            Action::SetHorizon { horizon } => {
                self.state.preferences.horizon = horizon;
            }
            Action::TogglePreferredIndustry { industry } => {
                self.state.preferences.toggle_industry(&industry);
            }
            Action::ToggleGeographicFocus { region } => {
                self.state.preferences.toggle_region(&region);
            }
            Action::RequestAutofill { text } => {
                let suggestions = self.extractor.extract(&text, self.state.role);
                outcome.suggested_fields = suggestions.fields().collect();
                if !suggestions.is_empty() {
                    self.state.pending_suggestions = Some(suggestions);
                }
            }
            Action::ConfirmSuggestions => {
                if let Some(suggestions) = self.state.pending_suggestions.take() {
                    outcome.applied_fields =
                        self.state.profile.apply(&suggestions, self.apply_policy);
                    tracing::info!(
                        "Applied {} of {} suggested fields",
                        outcome.applied_fields.len(),
                        suggestions.len()
                    );
                }
            }
            Action::DismissSuggestions => {
                self.state.pending_suggestions = None;
            }
            Action::SendMessage { text } => {
                let persona = self.router.persona(self.state.agent.persona_id())?;
                let suggestions = self.extractor.extract(&text, self.state.role);
                let reply = PendingReply {
                    persona_id: persona.id.clone(),
                    text: self.composer.compose(persona, &suggestions),
                };

                let entry = self.chat.send(&text, reply)?;
                outcome.appended.push(entry);
                outcome.suggested_fields = suggestions.fields().collect();

                if !suggestions.is_empty() {
                    self.state.pending_suggestions = Some(suggestions);
                }
            }
            Action::EndSession => {
                self.chat.end();
            }
        }

        outcome.pending_suggestions = self
            .state
            .pending_suggestions
            .as_ref()
            .map_or(0, |s| s.len());
        Ok(outcome)
    }

    fn select_persona(&mut self, persona: &Persona, outcome: &mut Outcome) -> Result<()> {
        if persona.id == self.state.agent.persona_id() {
            return Ok(());
        }

        let entry = self.chat.post_assistant(&persona.id, &persona.greeting)?;
        tracing::info!(
            from = self.state.agent.persona_id(),
            to = %persona.id,
            "Persona changed"
        );
        self.state.agent = AgentSelection::from_persona(persona);
        outcome.persona_changed = true;
        outcome.appended.push(entry);
        Ok(())
    }
}
