//! Declarative persona catalog.
//!
//! Holds every persona plus the table of screen routes. The default catalog
//! ships embedded in the crate; a replacement can be loaded from TOML.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::Persona;
use super::navigation::Navigation;
use crate::error::{Result, VentureError};

const BUILTIN_CATALOG: &str = include_str!("../../assets/agents.toml");

/// Maps a screen (and optionally one of its tabs) to a persona.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub screen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    pub persona: String,
}

#[derive(Deserialize)]
struct RawCatalog {
    default_persona: String,
    #[serde(default, rename = "persona")]
    personas: Vec<Persona>,
    #[serde(default, rename = "route")]
    routes: Vec<Route>,
}

/// A validated persona catalog.
///
/// Invariants: persona ids are unique, the default persona exists and every
/// route points at a known persona.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
    index: HashMap<String, usize>,
    default_index: usize,
    routes: HashMap<Navigation, usize>,
}

impl PersonaCatalog {
    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Loads and validates a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VentureError::config(format!(
                "Failed to read persona catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded persona catalog from {} ({} personas)",
            path.display(),
            catalog.personas.len()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(content)
            .map_err(|e| VentureError::config(format!("Invalid persona catalog: {}", e)))?;
        Self::validate(raw)
    }

    fn validate(raw: RawCatalog) -> Result<Self> {
        let mut index = HashMap::with_capacity(raw.personas.len());
        for (i, persona) in raw.personas.iter().enumerate() {
            if persona.id.trim().is_empty() {
                return Err(VentureError::config("Persona without an id"));
            }
            if index.insert(persona.id.clone(), i).is_some() {
                return Err(VentureError::config(format!(
                    "Duplicate persona id '{}'",
                    persona.id
                )));
            }
        }

        let default_index = *index.get(&raw.default_persona).ok_or_else(|| {
            VentureError::config(format!(
                "Default persona '{}' is not defined",
                raw.default_persona
            ))
        })?;

        let mut routes = HashMap::with_capacity(raw.routes.len());
        for route in raw.routes {
            let target = *index.get(&route.persona).ok_or_else(|| {
                VentureError::config(format!(
                    "Route for screen '{}' names unknown persona '{}'",
                    route.screen, route.persona
                ))
            })?;
            let key = Navigation::new(&route.screen, route.tab.as_deref());
            if routes.contains_key(&key) {
                return Err(VentureError::config(format!("Duplicate route for '{}'", key)));
            }
            routes.insert(key, target);
        }

        Ok(Self {
            personas: raw.personas,
            index,
            default_index,
            routes,
        })
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn get(&self, persona_id: &str) -> Option<&Persona> {
        self.index.get(persona_id).map(|&i| &self.personas[i])
    }

    pub fn default_persona(&self) -> &Persona {
        &self.personas[self.default_index]
    }

    /// Screens that have at least one route, sorted.
    pub fn screens(&self) -> Vec<&str> {
        let screens: BTreeSet<&str> = self.routes.keys().map(|nav| nav.screen.as_str()).collect();
        screens.into_iter().collect()
    }

    /// Resolves a navigation target to a persona.
    ///
    /// Tries the exact screen and tab, then the screen alone, then falls back
    /// to the default persona. Never fails.
    pub fn resolve(&self, navigation: &Navigation) -> &Persona {
        let exact = self.routes.get(navigation);
        let screen_wide = || {
            navigation
                .tab
                .as_ref()
                .and_then(|_| self.routes.get(&Navigation::screen(&navigation.screen)))
        };

        match exact.or_else(screen_wide) {
            Some(&i) => &self.personas[i],
            None => self.default_persona(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        default_persona = "guide"

        [[persona]]
        id = "guide"
        name = "Guide"
        title = "Guide"
        greeting = "Hello"
        fallback = "Tell me more"
    "#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = PersonaCatalog::builtin().unwrap();
        assert_eq!(catalog.default_persona().id, "platform-guide");
        assert!(catalog.get("communication-assistant").is_some());
    }

    #[test]
    fn test_resolve_prefers_tab_route() {
        let catalog = PersonaCatalog::builtin().unwrap();
        let persona = catalog.resolve(&Navigation::new("profile", Some("preferences")));
        assert_eq!(persona.id, "investment-strategist");
    }

    #[test]
    fn test_resolve_falls_back_to_screen_route() {
        let catalog = PersonaCatalog::builtin().unwrap();
        let persona = catalog.resolve(&Navigation::new("profile", Some("photos")));
        assert_eq!(persona.id, "profile-coach");
    }

    #[test]
    fn test_resolve_unknown_screen_uses_default() {
        let catalog = PersonaCatalog::builtin().unwrap();
        let persona = catalog.resolve(&Navigation::new("no-such-screen", Some("x")));
        assert_eq!(persona.id, "platform-guide");
    }

    #[test]
    fn test_screens_are_unique_and_sorted() {
        let catalog = PersonaCatalog::builtin().unwrap();
        let screens = catalog.screens();

        assert_eq!(screens.iter().filter(|s| **s == "profile").count(), 1);
        assert!(screens.contains(&"messaging"));
        assert!(screens.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(PersonaCatalog::from_toml_str(MINIMAL).unwrap().screens().is_empty());
    }

    #[test]
    fn test_minimal_catalog_routes_everything_to_default() {
        let catalog = PersonaCatalog::from_toml_str(MINIMAL).unwrap();
        assert_eq!(catalog.resolve(&Navigation::screen("messaging")).id, "guide");
    }

    #[test]
    fn test_missing_default_persona_is_rejected() {
        let content = MINIMAL.replace("default_persona = \"guide\"", "default_persona = \"ghost\"");
        let err = PersonaCatalog::from_toml_str(&content).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_route_to_unknown_persona_is_rejected() {
        let content = format!(
            "{}\n[[route]]\nscreen = \"deals\"\npersona = \"ghost\"\n",
            MINIMAL
        );
        let err = PersonaCatalog::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_duplicate_persona_is_rejected() {
        let content = format!(
            "{}\n[[persona]]\nid = \"guide\"\nname = \"Again\"\ntitle = \"t\"\ngreeting = \"g\"\nfallback = \"f\"\n",
            MINIMAL
        );
        assert!(PersonaCatalog::from_toml_str(&content).is_err());
    }
}
