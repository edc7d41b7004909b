//! Persona selection for the active screen.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::PersonaCatalog;
use super::model::Persona;
use super::navigation::Navigation;
use crate::error::{Result, VentureError};

/// The currently selected persona and its greeting.
///
/// Only constructible from a `Persona`, so the greeting always belongs to
/// the selected id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSelection {
    persona_id: String,
    greeting: String,
}

impl AgentSelection {
    pub fn from_persona(persona: &Persona) -> Self {
        Self {
            persona_id: persona.id.clone(),
            greeting: persona.greeting.clone(),
        }
    }

    pub fn persona_id(&self) -> &str {
        &self.persona_id
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }
}

/// Stateless lookup from navigation state to persona.
#[derive(Debug, Clone)]
pub struct AgentRouter {
    catalog: Arc<PersonaCatalog>,
}

impl AgentRouter {
    pub fn new(catalog: Arc<PersonaCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PersonaCatalog {
        &self.catalog
    }

    /// Selection before any screen-specific context exists.
    pub fn initial_selection(&self) -> AgentSelection {
        AgentSelection::from_persona(self.catalog.default_persona())
    }

    /// Returns the persona for a screen and optional tab.
    ///
    /// Unknown combinations resolve to the default persona.
    pub fn route(&self, navigation: &Navigation) -> &Persona {
        let persona = self.catalog.resolve(navigation);
        tracing::debug!(navigation = %navigation, persona = %persona.id, "Routed persona");
        persona
    }

    /// Looks up a persona the user asked for by id.
    pub fn persona(&self, persona_id: &str) -> Result<&Persona> {
        self.catalog
            .get(persona_id)
            .ok_or_else(|| VentureError::not_found("persona", persona_id))
    }
}
