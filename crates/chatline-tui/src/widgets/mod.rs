//! Custom widgets for the TUI

pub mod input_box;
pub mod message_list;
pub mod send_button;
pub mod spinner;

pub use input_box::InputBox;
pub use message_list::{ConversationView, MessageList};
pub use send_button::SendButton;
pub use spinner::Spinner;
