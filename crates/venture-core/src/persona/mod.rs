//! Persona domain module.
//!
//! Contextual assistant personas and the routing that picks one for the
//! screen the user is looking at.
//!
//! # Module Structure
//!
//! - `model`: Core persona model (`Persona`)
//! - `catalog`: Declarative persona catalog and screen routes
//! - `navigation`: The active screen and sub-tab (`Navigation`)
//! - `router`: Persona selection (`AgentRouter`, `AgentSelection`)

mod catalog;
mod model;
mod navigation;
mod router;

// Re-export public API
pub use catalog::{PersonaCatalog, Route};
pub use model::Persona;
pub use navigation::Navigation;
pub use router::{AgentRouter, AgentSelection};
