//! Message list widget for displaying the conversation

use crate::theme::Theme;
use chatline_client::{ChatMessage, Role};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Lines one message occupies at `width`: header, wrapped body, separator
fn message_lines(msg: &ChatMessage, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let (prefix, label, header_style) = match msg.role() {
        Role::User => ("▶ ", "You", theme.user_header()),
        Role::Ai => ("◀ ", "AI", theme.ai_header()),
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("{}{}", prefix, label),
        header_style,
    ))];

    let content_width = width.saturating_sub(2).max(1);
    for line in textwrap::wrap(msg.content(), content_width) {
        lines.push(Line::from(Span::styled(
            format!("  {}", line),
            theme.base_style(),
        )));
    }

    lines.push(Line::from(""));
    lines
}

/// Total height of the conversation at `width`
pub fn content_height(messages: &[ChatMessage], width: usize) -> usize {
    let content_width = width.saturating_sub(2).max(1);
    messages
        .iter()
        .map(|msg| 2 + textwrap::wrap(msg.content(), content_width).len())
        .sum()
}

/// Widget for displaying a list of chat messages
pub struct MessageList<'a> {
    messages: &'a [ChatMessage],
    theme: &'a Theme,
    scroll: usize,
}

impl<'a> MessageList<'a> {
    /// Create a new message list
    pub fn new(messages: &'a [ChatMessage], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            scroll: 0,
        }
    }

    /// Set scroll offset (in lines from the top)
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for MessageList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let visible: Vec<Line> = self
            .messages
            .iter()
            .flat_map(|msg| message_lines(msg, self.theme, width))
            .skip(self.scroll)
            .take(area.height as usize)
            .collect();

        Paragraph::new(visible).render(area, buf);
    }
}

/// Scroll state of the conversation view.
///
/// Keeps an anchor at the end of the list: whenever the number of messages
/// changes the view jumps back to the bottom, so the newest message is
/// visible. Manual scrolling holds until the next change.
#[derive(Debug, Clone, Default)]
pub struct ConversationView {
    /// Offset from the top, or `None` when pinned to the bottom
    scroll: Option<usize>,
    /// Message count seen at the last sync
    seen: usize,
}

impl ConversationView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current message count; a change re-pins the bottom anchor
    pub fn sync(&mut self, message_count: usize) -> bool {
        if message_count == self.seen {
            return false;
        }
        self.seen = message_count;
        self.scroll_to_bottom();
        true
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = None;
    }

    /// Scroll towards older messages
    pub fn scroll_up(&mut self, lines: usize, content_height: usize, viewport: usize) {
        let current = self.offset(content_height, viewport);
        self.scroll = Some(current.saturating_sub(lines));
    }

    /// Scroll towards newer messages; reaching the end re-pins the anchor
    pub fn scroll_down(&mut self, lines: usize, content_height: usize, viewport: usize) {
        let bottom = content_height.saturating_sub(viewport);
        let next = self.offset(content_height, viewport).saturating_add(lines);
        self.scroll = if next >= bottom { None } else { Some(next) };
    }

    /// Effective top offset for the given content and viewport heights
    pub fn offset(&self, content_height: usize, viewport: usize) -> usize {
        let bottom = content_height.saturating_sub(viewport);
        match self.scroll {
            None => bottom,
            Some(scroll) => scroll.min(bottom),
        }
    }
}
