//! History items as supplied by callers.

use crate::{ChatMessage, Role, Turn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A history item, either already typed or a generic key-value record.
///
/// Generic records follow the `{"role": ..., "parts": [{"text": ...}]}` layout
/// used by Gemini-style conversation logs. Deserialization tries the typed
/// `{"role", "text"}` form first and falls back to a generic record.
///
/// # Examples
///
/// ```
/// use guardian_core::{ConversationMessage, Role};
/// use serde_json::json;
///
/// let history: Vec<ConversationMessage> = serde_json::from_value(json!([
///     {"role": "user", "text": "hi"},
///     {"role": "model", "parts": [{"text": "yo"}]},
/// ])).unwrap();
///
/// assert!(matches!(history[0], ConversationMessage::Typed(_)));
/// assert!(matches!(history[1], ConversationMessage::Generic(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum ConversationMessage {
    /// Canonical role + text
    Typed(Turn),
    /// Generic `{role, parts: [{text}]}` record
    Generic(Map<String, Value>),
}

impl ConversationMessage {
    /// Build a typed history item.
    pub fn typed(role: Role, text: impl Into<String>) -> Self {
        ConversationMessage::Typed(Turn::new(role, text))
    }

    /// Build a generic record with a single text part.
    ///
    /// # Examples
    ///
    /// ```
    /// use guardian_core::ConversationMessage;
    ///
    /// let msg = ConversationMessage::record("user", "hi");
    /// let ConversationMessage::Generic(map) = msg else { panic!("expected record") };
    /// assert_eq!(map["parts"][0]["text"], "hi");
    /// ```
    pub fn record(role: &str, text: &str) -> Self {
        let mut part = Map::new();
        part.insert("text".to_string(), Value::String(text.to_string()));

        let mut map = Map::new();
        map.insert("role".to_string(), Value::String(role.to_string()));
        map.insert("parts".to_string(), Value::Array(vec![Value::Object(part)]));
        ConversationMessage::Generic(map)
    }
}

impl From<ChatMessage> for ConversationMessage {
    fn from(message: ChatMessage) -> Self {
        ConversationMessage::Typed(message.into())
    }
}
