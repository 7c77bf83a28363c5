//! chatline-tui: Terminal UI components
//!
//! Widgets for a chat screen built on ratatui and crossterm: a message list
//! that follows the newest message, a single-line composer with a Send
//! button, and a spinner for the awaiting-reply state.

pub mod input;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use terminal::TerminalGuard;
pub use theme::Theme;
