//! Named session events.

use serde::{Deserialize, Serialize};

use crate::chat::ChatEntry;
use crate::extraction::Role;
use crate::profile::{InvestmentHorizon, ProfileField, RiskTolerance};

/// A discrete change requested by the user or the navigation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// The active screen or sub-tab changed.
    Navigate {
        screen: String,
        #[serde(default)]
        tab: Option<String>,
    },
    /// The user picked a persona explicitly.
    SwitchPersona { persona_id: String },
    SetRole { role: Role },
    EditProfileField { field: ProfileField, value: String },
    SetRiskTolerance { risk_tolerance: Option<RiskTolerance> },
    SetHorizon { horizon: Option<InvestmentHorizon> },
    TogglePreferredIndustry { industry: String },
    ToggleGeographicFocus { region: String },
    /// Extract suggestions from text without chatting; they become pending.
    RequestAutofill { text: String },
    /// Apply the pending suggestions to the profile.
    ConfirmSuggestions,
    DismissSuggestions,
    SendMessage { text: String },
    EndSession,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "navigate",
            Action::SwitchPersona { .. } => "switch_persona",
            Action::SetRole { .. } => "set_role",
            Action::EditProfileField { .. } => "edit_profile_field",
            Action::SetRiskTolerance { .. } => "set_risk_tolerance",
            Action::SetHorizon { .. } => "set_horizon",
            Action::TogglePreferredIndustry { .. } => "toggle_preferred_industry",
            Action::ToggleGeographicFocus { .. } => "toggle_geographic_focus",
            Action::RequestAutofill { .. } => "request_autofill",
            Action::ConfirmSuggestions => "confirm_suggestions",
            Action::DismissSuggestions => "dismiss_suggestions",
            Action::SendMessage { .. } => "send_message",
            Action::EndSession => "end_session",
        }
    }
}

/// What a dispatched action changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// The selected persona changed
    pub persona_changed: bool,
    /// Entries appended synchronously by this action
    pub appended: Vec<ChatEntry>,
    /// Fields recognized in the text of this action; empty when nothing matched
    pub suggested_fields: Vec<ProfileField>,
    /// Profile fields changed by confirmed suggestions
    pub applied_fields: Vec<ProfileField>,
    /// Number of suggestions pending after the action
    pub pending_suggestions: usize,
}
