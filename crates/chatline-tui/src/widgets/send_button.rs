//! Send button next to the composer

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::Modifier,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Width the button needs, borders included
pub const SEND_BUTTON_WIDTH: u16 = 10;

/// Clickable "Send" button, greyed out when there is nothing to send
pub struct SendButton<'a> {
    enabled: bool,
    theme: &'a Theme,
}

impl<'a> SendButton<'a> {
    pub fn new(enabled: bool, theme: &'a Theme) -> Self {
        Self { enabled, theme }
    }

    /// Whether a click at (column, row) lands on a button drawn in `area`
    pub fn hit(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}

impl Widget for SendButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, label) = if self.enabled {
            (
                self.theme.accent_style(),
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            )
        } else {
            (self.theme.border_style(), self.theme.dim_style())
        };

        let block = Block::default().borders(Borders::ALL).border_style(border);
        Paragraph::new("Send")
            .alignment(Alignment::Center)
            .style(label)
            .block(block)
            .render(area, buf);
    }
}
