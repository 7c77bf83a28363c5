//! chatline-client: conversation model and endpoint transport
//!
//! This crate holds everything a chat front end needs that is not drawing:
//! the message types, the append-only conversation, the composer state and
//! the JSON-over-HTTP transport used to reach the chat endpoint.

pub mod composer;
pub mod conversation;
pub mod error;
pub mod session;
pub mod transport;
pub mod types;

pub use composer::Composer;
pub use conversation::Conversation;
pub use error::{Error, Result};
pub use session::{ChatSession, PendingSend, SendOutcome};
pub use transport::{DEFAULT_ENDPOINT, HttpTransport, Transport};
pub use types::*;
