//! Application state and its store.
//!
//! All session state lives in one serializable `AppState`, owned by a
//! `Store` and changed only by dispatching named `Action`s.

mod action;
mod model;
mod store;

pub use action::{Action, Outcome};
pub use model::{AppState, SessionSnapshot};
pub use store::{Store, StoreOptions};
