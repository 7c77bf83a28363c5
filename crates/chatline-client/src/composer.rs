//! Draft text and the awaiting-reply flag

/// State of the message composer
#[derive(Debug, Clone, Default)]
pub struct Composer {
    draft: String,
    awaiting_reply: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub(crate) fn set_awaiting_reply(&mut self, awaiting: bool) {
        self.awaiting_reply = awaiting;
    }

    /// Whether the draft has anything besides whitespace
    pub fn has_content(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// A submit is accepted only with content and no request in flight
    pub fn can_submit(&self) -> bool {
        self.has_content() && !self.awaiting_reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_draft_cannot_submit() {
        let mut composer = Composer::new();
        assert!(!composer.can_submit());

        composer.set_draft("  \t ");
        assert!(!composer.has_content());
        assert!(!composer.can_submit());

        composer.set_draft(" hi ");
        assert!(composer.can_submit());
    }

    #[test]
    fn test_awaiting_reply_blocks_submit() {
        let mut composer = Composer::new();
        composer.set_draft("hello");
        composer.set_awaiting_reply(true);
        assert!(composer.has_content());
        assert!(!composer.can_submit());
    }
}
