//! Chat session with simulated assistant latency.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::log::ChatLog;
use super::message::ChatEntry;
use crate::error::{Result, VentureError};

/// An assistant reply waiting to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub persona_id: String,
    pub text: String,
}

/// Owns the chat log and the deferred replies scheduled against it.
///
/// `send` appends the user entry immediately and schedules exactly one
/// assistant entry after `reply_delay`. Scheduled replies are tokio tasks
/// racing a cancellation token, so nothing ever blocks the caller:
///
/// - `cancel_pending` drops replies scheduled so far (the user navigated away);
/// - `end` drops them and refuses further messages;
/// - dropping the session aborts whatever is still scheduled.
pub struct ChatSession {
    log: Arc<Mutex<ChatLog>>,
    reply_delay: Duration,
    /// Cancelled when the session ends
    session_token: CancellationToken,
    /// Child of `session_token`, replaced on every `cancel_pending`
    view_token: CancellationToken,
    pending: JoinSet<()>,
    ended: bool,
}

impl ChatSession {
    pub fn new(reply_delay: Duration) -> Self {
        Self::with_log(reply_delay, ChatLog::new())
    }

    /// Opens a session whose log starts with an assistant greeting.
    pub fn opened_by(reply_delay: Duration, persona_id: &str, greeting: &str) -> Self {
        let mut log = ChatLog::new();
        log.append_assistant(persona_id, greeting);
        Self::with_log(reply_delay, log)
    }

    fn with_log(reply_delay: Duration, log: ChatLog) -> Self {
        let session_token = CancellationToken::new();
        let view_token = session_token.child_token();
        Self {
            log: Arc::new(Mutex::new(log)),
            reply_delay,
            session_token,
            view_token,
            pending: JoinSet::new(),
            ended: false,
        }
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Appends a user message and schedules the assistant reply.
    ///
    /// Must be called from within a tokio runtime. Returns the user entry.
    pub fn send(&mut self, text: &str, reply: PendingReply) -> Result<ChatEntry> {
        self.ensure_open()?;
        if text.trim().is_empty() {
            return Err(VentureError::invalid_input("Message is empty"));
        }
        tokio::runtime::Handle::try_current()
            .map_err(|e| VentureError::Runtime(format!("Cannot schedule reply: {}", e)))?;

        self.reap_finished();

        let entry = lock(&self.log).append_user(text).clone();

        let log = Arc::clone(&self.log);
        let token = self.view_token.clone();
        let delay = self.reply_delay;
        self.pending.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(persona = %reply.persona_id, "Scheduled reply cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    lock(&log).append_assistant(reply.persona_id, reply.text);
                }
            }
        });

        Ok(entry)
    }

    /// Appends an assistant entry immediately (persona greetings).
    pub fn post_assistant(&mut self, persona_id: &str, text: &str) -> Result<ChatEntry> {
        self.ensure_open()?;
        Ok(lock(&self.log).append_assistant(persona_id, text).clone())
    }

    /// Cancels every reply scheduled so far. Later sends are unaffected.
    pub fn cancel_pending(&mut self) {
        self.view_token.cancel();
        self.view_token = self.session_token.child_token();
    }

    /// Ends the session: scheduled replies are cancelled and further
    /// messages are rejected. Calling it twice is harmless.
    pub fn end(&mut self) {
        if !self.ended {
            tracing::info!("Chat session ended with {} entries", self.len());
        }
        self.session_token.cancel();
        self.ended = true;
    }

    /// Waits until every scheduled reply has been delivered or cancelled.
    pub async fn settle(&mut self) {
        while let Some(result) = self.pending.join_next().await {
            if let Err(e) = result {
                if e.is_panic() {
                    tracing::warn!("Reply task panicked: {}", e);
                }
            }
        }
    }

    /// Copy of the log at this instant.
    pub fn transcript(&self) -> Vec<ChatEntry> {
        lock(&self.log).entries().to_vec()
    }

    pub fn len(&self) -> usize {
        lock(&self.log).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.log).is_empty()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.ended {
            Err(VentureError::SessionEnded)
        } else {
            Ok(())
        }
    }

    fn reap_finished(&mut self) {
        while self.pending.try_join_next().is_some() {}
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.session_token.cancel();
    }
}

// The log is never held across an await, so a poisoned lock still holds a
// consistent vector.
fn lock(log: &Mutex<ChatLog>) -> MutexGuard<'_, ChatLog> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}
