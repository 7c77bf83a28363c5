//! Single-line composer input

use crate::input::Action;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Single-line text input widget
#[derive(Debug, Default)]
pub struct InputBox {
    /// Current input text
    content: String,
    /// Cursor position (character index, not byte index)
    cursor: usize,
    /// Horizontal scroll offset (in display width)
    scroll: usize,
    /// Placeholder text
    placeholder: String,
    /// Whether the input is focused
    focused: bool,
    /// Edits are ignored while locked (a reply is pending)
    locked: bool,
}

impl InputBox {
    /// Create a new input box
    pub fn new() -> Self {
        Self::default()
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focus state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Lock or unlock editing
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Get the current content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set the content
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    /// Scroll so the cursor fits in a box `width` columns wide
    pub fn keep_cursor_visible(&mut self, width: u16) {
        self.update_scroll(width as usize);
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Byte offset of the given character index
    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Remove the character under the cursor
    fn remove_at_cursor(&mut self) {
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.content.drain(start..end);
    }

    /// Get the display width of text before the cursor
    fn cursor_display_width(&self) -> usize {
        self.content
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    /// Handle an input action, returning true if the text or cursor changed
    pub fn handle_action(&mut self, action: &Action, width: u16) -> bool {
        if self.locked {
            return false;
        }
        let char_count = self.content.chars().count();

        match action {
            Action::Char(c) => {
                self.insert_char(*c);
                self.update_scroll(width as usize);
                true
            }
            Action::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                self.remove_at_cursor();
                self.update_scroll(width as usize);
                true
            }
            Action::Delete => {
                if self.cursor >= char_count {
                    return false;
                }
                self.remove_at_cursor();
                true
            }
            Action::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.update_scroll(width as usize);
                    true
                } else {
                    false
                }
            }
            Action::Right => {
                if self.cursor < char_count {
                    self.cursor += 1;
                    self.update_scroll(width as usize);
                    true
                } else {
                    false
                }
            }
            Action::Home => {
                self.cursor = 0;
                self.update_scroll(width as usize);
                true
            }
            Action::End => {
                self.cursor = char_count;
                self.update_scroll(width as usize);
                true
            }
            Action::ClearLine => {
                let changed = !self.content.is_empty();
                self.clear();
                changed
            }
            Action::DeleteWord => {
                let mut new_cursor = self.cursor;
                let chars: Vec<char> = self.content.chars().collect();

                // Skip trailing spaces
                while new_cursor > 0 && chars.get(new_cursor - 1) == Some(&' ') {
                    new_cursor -= 1;
                }
                // Skip word characters
                while new_cursor > 0 && chars.get(new_cursor - 1) != Some(&' ') {
                    new_cursor -= 1;
                }

                let start = self.byte_offset(new_cursor);
                let end = self.byte_offset(self.cursor);
                self.content.drain(start..end);
                self.cursor = new_cursor;
                self.update_scroll(width as usize);
                true
            }
            Action::Paste(text) => {
                for c in text.chars() {
                    if c == '\n' || c == '\r' {
                        if !self.content.ends_with(' ') && self.cursor > 0 {
                            self.insert_char(' ');
                        }
                    } else {
                        self.insert_char(c);
                    }
                }
                self.update_scroll(width as usize);
                true
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    fn update_scroll(&mut self, width: usize) {
        let visible_width = width.saturating_sub(4); // Account for borders/padding
        let cursor_pos = self.cursor_display_width();

        if cursor_pos < self.scroll {
            self.scroll = cursor_pos;
        } else if cursor_pos >= self.scroll + visible_width {
            self.scroll = cursor_pos - visible_width + 1;
        }
    }

    /// The part of the content that fits in `width` columns after scrolling
    fn visible_text(&self, width: usize) -> String {
        let mut skipped = 0;
        let mut used = 0;
        let mut visible = String::new();

        for c in self.content.chars() {
            let w = c.width().unwrap_or(0);
            if skipped < self.scroll {
                skipped += w;
                continue;
            }
            if used + w > width {
                break;
            }
            visible.push(c);
            used += w;
        }
        visible
    }

    /// Render the input box
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .border_style(if self.focused && !self.locked {
                theme.accent_style()
            } else {
                theme.border_style()
            });

        let inner = block.inner(area);
        block.render(area, buf);

        let display_text = if self.content.is_empty() {
            self.placeholder.clone()
        } else {
            self.visible_text(inner.width as usize)
        };

        let style = if self.content.is_empty() || self.locked {
            theme.dim_style()
        } else {
            theme.base_style()
        };

        let paragraph = Paragraph::new(display_text).style(style);
        paragraph.render(inner, buf);

        // Render cursor if focused
        if self.focused && !self.locked && inner.width > 0 {
            let cursor_x = self.cursor_display_width().saturating_sub(self.scroll);
            if cursor_x < inner.width as usize {
                let x = inner.x + cursor_x as u16;
                let y = inner.y;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(Style::default().bg(theme.accent));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            input.handle_action(&Action::Char(c), 40);
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = InputBox::new();
        type_text(&mut input, "héllo");
        assert_eq!(input.content(), "héllo");

        assert!(input.handle_action(&Action::Backspace, 40));
        assert_eq!(input.content(), "héll");

        input.handle_action(&Action::Home, 40);
        assert!(!input.handle_action(&Action::Backspace, 40));
    }

    #[test]
    fn test_insert_mid_line() {
        let mut input = InputBox::new();
        type_text(&mut input, "hllo");
        input.handle_action(&Action::Home, 40);
        input.handle_action(&Action::Right, 40);
        input.handle_action(&Action::Char('e'), 40);
        assert_eq!(input.content(), "hello");
    }

    #[test]
    fn test_delete_word() {
        let mut input = InputBox::new();
        type_text(&mut input, "hello big world");
        input.handle_action(&Action::DeleteWord, 40);
        assert_eq!(input.content(), "hello big ");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_action(&Action::Paste("one\r\ntwo".to_string()), 40);
        assert_eq!(input.content(), "one two");
    }

    #[test]
    fn test_visible_text_follows_cursor() {
        let mut input = InputBox::new();
        // width 10 leaves 6 visible columns for scrolling purposes
        type_text_width(&mut input, "abcdefghij", 10);
        assert_eq!(input.visible_text(6), "fghij");

        input.handle_action(&Action::Home, 10);
        assert_eq!(input.visible_text(6), "abcdef");
    }

    #[test]
    fn test_set_content_scrolls_at_render_width() {
        let mut input = InputBox::new();
        input.set_content("abcdefghij");
        assert_eq!(input.visible_text(6), "abcdef");

        input.keep_cursor_visible(10);
        assert_eq!(input.visible_text(6), "fghij");
    }

    fn type_text_width(input: &mut InputBox, text: &str, width: u16) {
        for c in text.chars() {
            input.handle_action(&Action::Char(c), width);
        }
    }

    #[test]
    fn test_locked_ignores_edits() {
        let mut input = InputBox::new();
        type_text(&mut input, "hi");
        input.set_locked(true);

        assert!(!input.handle_action(&Action::Char('!'), 40));
        assert!(!input.handle_action(&Action::ClearLine, 40));
        assert_eq!(input.content(), "hi");

        input.set_locked(false);
        input.handle_action(&Action::Char('!'), 40);
        assert_eq!(input.content(), "hi!");
    }
}
