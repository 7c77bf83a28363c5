//! Append-only conversation history

use crate::types::ChatMessage;

/// Ordered list of exchanged messages.
///
/// Only appends are exposed: nothing is ever removed or edited for the
/// lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single message
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Append one ai message per response string, preserving order
    pub fn extend_ai<I, S>(&mut self, responses: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.messages.len();
        self.messages
            .extend(responses.into_iter().map(ChatMessage::ai));
        self.messages.len() - before
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_extend_ai_keeps_order() {
        let mut conv = Conversation::new();
        conv.push(ChatMessage::user("hi"));
        let added = conv.extend_ai(vec!["one", "two", "three"]);

        assert_eq!(added, 3);
        let contents: Vec<&str> = conv.messages().iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["hi", "one", "two", "three"]);
        assert!(conv.messages()[1..].iter().all(|m| m.role() == Role::Ai));
    }

    #[test]
    fn test_extend_ai_empty() {
        let mut conv = Conversation::new();
        assert_eq!(conv.extend_ai(Vec::<String>::new()), 0);
        assert!(conv.is_empty());
        assert!(conv.messages().is_empty());
    }
}
