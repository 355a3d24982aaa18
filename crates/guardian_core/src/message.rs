//! Canonical and structured message types.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One conversation turn in canonical form: a role and its text.
///
/// # Examples
///
/// ```
/// use guardian_core::{Role, Turn};
///
/// let turn = Turn::new(Role::User, "hello");
/// assert_eq!(turn.role, Role::User);
/// assert_eq!(turn.text, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// The role of the author
    pub role: Role,
    /// The text of the turn
    pub text: String,
}

impl Turn {
    /// Create a turn.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// A message in the structured shape consumed by backends with native
/// multi-turn support.
///
/// # Examples
///
/// ```
/// use guardian_core::{ChatMessage, Role, Turn};
///
/// let msg = ChatMessage::from(Turn::new(Role::User, "hi"));
/// assert_eq!(msg, ChatMessage::Human("hi".to_string()));
/// assert_eq!(msg.text(), "hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ChatMessage {
    /// System instruction
    System(String),
    /// Message from the human
    Human(String),
    /// Message from the model
    Model(String),
}

impl ChatMessage {
    /// The text carried by the message.
    pub fn text(&self) -> &str {
        match self {
            ChatMessage::System(text) | ChatMessage::Human(text) | ChatMessage::Model(text) => {
                text
            }
        }
    }

    /// The canonical role of the message.
    pub fn role(&self) -> Role {
        match self {
            ChatMessage::System(_) => Role::System,
            ChatMessage::Human(_) => Role::User,
            ChatMessage::Model(_) => Role::Model,
        }
    }
}

impl From<Turn> for ChatMessage {
    fn from(turn: Turn) -> Self {
        match turn.role {
            Role::System => ChatMessage::System(turn.text),
            Role::User => ChatMessage::Human(turn.text),
            Role::Model => ChatMessage::Model(turn.text),
        }
    }
}

impl From<ChatMessage> for Turn {
    fn from(message: ChatMessage) -> Self {
        let role = message.role();
        match message {
            ChatMessage::System(text) | ChatMessage::Human(text) | ChatMessage::Model(text) => {
                Turn { role, text }
            }
        }
    }
}
