//! Chat Session Manager
//!
//! Owns the conversation transcript and submits user turns to the chat
//! service with a bounded trailing context window. A reset bumps an epoch
//! counter under the transcript lock, so a send that was in flight when
//! the reset happened discards its late response instead of appending.


use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;

use crate::api::sink::PresentationSink;
use crate::constants::CHAT_HISTORY_WINDOW;

use super::service::{ChatHistoryEntry, ChatRequest, FwiService};

/// Re-greeting appended by a chat reset
const RESET_GREETING: &str = "Chat cleared. Hello again! I'm your FWI expert assistant. \
     How can I help you understand the Fire Weather Index today?";

/// Apology appended when the chat request never completed
const OFFLINE_APOLOGY: &str = "I'm having trouble connecting to the server right now. \
     Please check your internet connection and try again.";

/// One transcript entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatTurn {
    pub is_from_user: bool,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    fn user(text: String) -> Self {
        Self {
            is_from_user: true,
            text,
            timestamp: Utc::now(),
        }
    }

    fn bot(text: String) -> Self {
        Self {
            is_from_user: false,
            text,
            timestamp: Utc::now(),
        }
    }

    /// Wire form of this turn for the chat service's history array
    pub fn to_wire(&self) -> ChatHistoryEntry {
        ChatHistoryEntry {
            is_user: self.is_from_user,
            text: self.text.clone(),
            timestamp: self.timestamp.to_rfc3339(),
        }
    }
}

/// Outcome of one send action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The assistant answered
    Answered,
    /// A locally authored apology was appended instead
    Degraded,
    /// Empty or whitespace-only input; nothing happened
    Ignored,
    /// A reset invalidated this send; its response was discarded
    Superseded,
}

pub struct ChatManager {
    service: Arc<dyn FwiService>,
    sink: Arc<dyn PresentationSink>,
    transcript: RwLock<Vec<ChatTurn>>,
    epoch: AtomicU64,
    assistant_online: AtomicBool,
}

impl ChatManager {
    /// Create a manager whose transcript starts with the welcome greeting.
    pub fn new(
        service: Arc<dyn FwiService>,
        sink: Arc<dyn PresentationSink>,
        threshold: f64,
    ) -> Self {
        let greeting = format!(
            "Hello! I'm an FWI expert assistant. I can help you understand the \
             Fire Weather Index and its components. The current system uses a \
             {:.1} threshold for risk assessment.",
            threshold
        );
        Self {
            service,
            sink,
            transcript: RwLock::new(vec![ChatTurn::bot(greeting)]),
            epoch: AtomicU64::new(0),
            assistant_online: AtomicBool::new(true),
        }
    }

    /// Immutable snapshot of the transcript
    pub fn transcript(&self) -> Vec<ChatTurn> {
        self.transcript.read().clone()
    }

    pub fn is_assistant_online(&self) -> bool {
        self.assistant_online.load(Ordering::SeqCst)
    }

    /// Append a locally authored bot note (sample-load and fallback notes).
    pub fn append_note(&self, text: &str) {
        let snapshot = {
            let mut transcript = self.transcript.write();
            transcript.push(ChatTurn::bot(text.to_string()));
            transcript.clone()
        };
        self.sink.transcript_changed(&snapshot);
    }

    /// Send one user message.
    ///
    /// The request carries the new message plus the trailing window of the
    /// six most recent transcript entries, inclusive of the just-appended
    /// user turn; older history is never sent.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let message = text.trim();
        if message.is_empty() {
            return SendOutcome::Ignored;
        }

        // Append the user turn and capture the context window atomically
        let (epoch, history, snapshot) = {
            let mut transcript = self.transcript.write();
            let epoch = self.epoch.load(Ordering::SeqCst);
            transcript.push(ChatTurn::user(message.to_string()));
            let window_start = transcript.len().saturating_sub(CHAT_HISTORY_WINDOW);
            let history: Vec<ChatHistoryEntry> =
                transcript[window_start..].iter().map(ChatTurn::to_wire).collect();
            (epoch, history, transcript.clone())
        };
        self.sink.transcript_changed(&snapshot);
        self.sink.chat_busy(true);

        let response = self
            .service
            .chat(ChatRequest {
                message: message.to_string(),
                history,
            })
            .await;

        self.sink.chat_busy(false);

        let (reply, outcome) = match response {
            Ok(r) => match (r.success, r.response) {
                (true, Some(answer)) => (answer, SendOutcome::Answered),
                _ => {
                    let reason = r.error.unwrap_or_else(|| "unknown error".to_string());
                    log::warn!("Chat service failure: {}", reason);
                    (
                        format!(
                            "I'm sorry, I encountered an error: {}. \
                             Please try again or check your connection.",
                            reason
                        ),
                        SendOutcome::Degraded,
                    )
                }
            },
            Err(e) => {
                log::warn!("Chat transport failure: {}", e);
                (OFFLINE_APOLOGY.to_string(), SendOutcome::Degraded)
            }
        };

        // Epoch check and append happen under the same lock a reset takes,
        // so a reset strictly happens-before or strictly invalidates.
        let snapshot = {
            let mut transcript = self.transcript.write();
            if self.epoch.load(Ordering::SeqCst) != epoch {
                log::debug!("Chat response discarded: transcript was reset mid-flight");
                return SendOutcome::Superseded;
            }
            transcript.push(ChatTurn::bot(reply));
            transcript.clone()
        };
        self.sink.transcript_changed(&snapshot);

        let online = outcome == SendOutcome::Answered;
        self.assistant_online.store(online, Ordering::SeqCst);
        self.sink.assistant_status(online);
        outcome
    }

    /// Clear the transcript and greet afresh.
    ///
    /// Invalidates every in-flight send: their responses are discarded on
    /// arrival rather than appended to the new transcript.
    pub fn reset(&self) {
        let snapshot = {
            let mut transcript = self.transcript.write();
            self.epoch.fetch_add(1, Ordering::SeqCst);
            transcript.clear();
            transcript.push(ChatTurn::bot(RESET_GREETING.to_string()));
            transcript.clone()
        };
        self.sink.transcript_changed(&snapshot);
    }
}
