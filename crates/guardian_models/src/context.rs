//! Conversation history normalization.
//!
//! History items arrive either typed or as generic `{role, parts: [{text}]}`
//! records. Every item is normalized once into a canonical [`Turn`], and the
//! backend-specific shape is derived from the turns:
//!
//! - [`to_transcript`]: `"<ROLE>: <text>"` lines for the primary backend
//! - [`to_structured`]: system/human/model messages for the secondary backend
//!
//! Items that cannot be classified are skipped, never rejected.

use guardian_core::{ChatMessage, ConversationMessage, Role, Turn};
use serde_json::{Map, Value};
use tracing::trace;

/// Normalize one history item.
///
/// Returns `None` for generic records whose role is not a string or not one
/// of `user`, `model`, `system`. A missing role means `user`; a missing or
/// malformed first part means empty text.
///
/// # Examples
///
/// ```
/// use guardian_core::{ConversationMessage, Role, Turn};
/// use guardian_models::context::normalize;
///
/// let record = ConversationMessage::record("model", "yo");
/// assert_eq!(normalize(&record), Some(Turn::new(Role::Model, "yo")));
///
/// let odd = ConversationMessage::record("tool", "output");
/// assert_eq!(normalize(&odd), None);
/// ```
pub fn normalize(message: &ConversationMessage) -> Option<Turn> {
    match message {
        ConversationMessage::Typed(turn) => Some(turn.clone()),
        ConversationMessage::Generic(record) => normalize_record(record),
    }
}

fn normalize_record(record: &Map<String, Value>) -> Option<Turn> {
    let role = match record.get("role") {
        None | Some(Value::Null) => Role::User,
        Some(Value::String(name)) => match Role::from_name(name) {
            Some(role) => role,
            None => {
                trace!(role = %name, "Skipping history record with unknown role");
                return None;
            }
        },
        Some(other) => {
            trace!(role = %other, "Skipping history record with non-string role");
            return None;
        }
    };

    let text = record
        .get("parts")
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
        .or_else(|| record.get("text").and_then(Value::as_str))
        .unwrap_or_default();

    Some(Turn::new(role, text))
}

/// Normalize a history list, dropping unclassifiable items. Order is kept.
pub fn normalize_all(history: &[ConversationMessage]) -> Vec<Turn> {
    history.iter().filter_map(normalize).collect()
}

/// Render turns as a transcript, one `"<ROLE>: <text>"` line each.
///
/// Turns with empty text are skipped.
pub fn render_transcript(turns: &[Turn]) -> String {
    turns
        .iter()
        .filter(|turn| !turn.text.is_empty())
        .map(|turn| format!("{}: {}", turn.role.to_string().to_uppercase(), turn.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transcript shape of a history list.
///
/// # Examples
///
/// ```
/// use guardian_core::{ConversationMessage, Role};
/// use guardian_models::context::to_transcript;
///
/// let history = vec![
///     ConversationMessage::typed(Role::User, "hi"),
///     ConversationMessage::record("model", "yo"),
/// ];
/// assert_eq!(to_transcript(&history), "USER: hi\nMODEL: yo");
/// assert_eq!(to_transcript(&[]), "");
/// ```
pub fn to_transcript(history: &[ConversationMessage]) -> String {
    render_transcript(&normalize_all(history))
}

/// Structured shape of a history list.
pub fn to_structured(history: &[ConversationMessage]) -> Vec<ChatMessage> {
    normalize_all(history)
        .into_iter()
        .map(ChatMessage::from)
        .collect()
}
