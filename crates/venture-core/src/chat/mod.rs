//! Chat domain module.
//!
//! # Module Structure
//!
//! - `message`: Chat entry types (`Speaker`, `ChatEntry`)
//! - `log`: Append-only, time-ordered entry log (`ChatLog`)
//! - `session`: Sending with deferred, cancellable replies (`ChatSession`)
//! - `reply`: Canned assistant reply text (`ReplyComposer`)

mod log;
mod message;
mod reply;
mod session;

// Re-export public API
pub use self::log::ChatLog;
pub use message::{ChatEntry, Speaker};
pub use reply::{CannedReplyComposer, ReplyComposer};
pub use session::{ChatSession, PendingReply};
