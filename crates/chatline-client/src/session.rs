//! Chat session: conversation, composer and transport wired together
//!
//! A send is split into two phases so a UI can keep drawing while the
//! request is in flight:
//!
//! 1. [`ChatSession::begin_send`] validates the draft, appends the user
//!    message and raises the awaiting-reply flag.
//! 2. [`ChatSession::finish_send`] applies the transport's result.
//!
//! [`ChatSession::send`] runs both phases around the transport call.

use std::sync::Arc;

use crate::composer::Composer;
use crate::conversation::Conversation;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::ChatMessage;

/// What a finished send did to the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was sent (empty draft or a request already in flight)
    Skipped,
    /// Reply arrived; this many ai messages were appended
    Replied(usize),
    /// The request failed; only the user message was appended
    Failed,
}

/// A message that has been committed to the conversation and awaits a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    text: String,
}

impl PendingSend {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Owns the conversation and the composer for one chat
pub struct ChatSession {
    transport: Arc<dyn Transport>,
    conversation: Conversation,
    composer: Composer,
}

impl ChatSession {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            conversation: Conversation::new(),
            composer: Composer::new(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.conversation.messages()
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn draft(&self) -> &str {
        self.composer.draft()
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.composer.set_draft(draft);
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.composer.is_awaiting_reply()
    }

    /// Shared handle to the transport, usable while the session is borrowed
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// First phase of a send.
    ///
    /// Returns `None` without touching any state when the draft is blank or
    /// a reply is still pending.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        if !self.composer.can_submit() {
            return None;
        }

        let text = self.composer.draft().to_string();
        self.conversation.push(ChatMessage::user(text.clone()));
        self.composer.set_awaiting_reply(true);
        tracing::debug!(messages = self.conversation.len(), "message submitted");

        Some(PendingSend { text })
    }

    /// Second phase of a send: apply the transport result
    pub fn finish_send(&mut self, result: Result<Vec<String>>) -> SendOutcome {
        let outcome = match result {
            Ok(responses) => {
                let added = self.conversation.extend_ai(responses);
                self.composer.clear_draft();
                SendOutcome::Replied(added)
            }
            Err(e) => {
                tracing::error!(error = %e, "chat request failed");
                SendOutcome::Failed
            }
        };
        self.composer.set_awaiting_reply(false);
        outcome
    }

    /// Submit the current draft and wait for the reply
    pub async fn send(&mut self) -> SendOutcome {
        let Some(pending) = self.begin_send() else {
            return SendOutcome::Skipped;
        };
        let transport = self.transport();
        let result = transport.send(pending.text()).await;
        self.finish_send(result)
    }
}
