//! Contextual assistant core for the Venture Desk networking platform.
//!
//! The crate covers the parts of the assistant that make decisions:
//!
//! - [`extraction`]: keyword-driven profile autofill
//! - [`persona`]: which assistant persona a screen gets
//! - [`chat`]: the append-only chat log and its deferred replies
//! - [`state`]: one session's state behind a dispatch-only [`state::Store`]
//!
//! ```
//! use venture_core::config::VentureConfig;
//! use venture_core::state::{Action, Store};
//!
//! let mut store = Store::from_config(&VentureConfig::default()).unwrap();
//! store
//!     .dispatch(Action::Navigate { screen: "messaging".into(), tab: None })
//!     .unwrap();
//! assert_eq!(store.state().agent.persona_id(), "communication-assistant");
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod extraction;
pub mod persona;
pub mod profile;
pub mod state;

// Re-export common error type
pub use error::{Result, VentureError};
