//! Conversion from structured messages to Gemini contents.

use crate::wire::Content;
use guardian_core::ChatMessage;

/// Convert messages to Gemini contents.
///
/// Pending system text is prepended to the next human message, separated by a
/// blank line. System text with no human message after it becomes a user turn
/// of its own.
pub(crate) fn to_contents(messages: &[ChatMessage]) -> Vec<Content> {
    let mut contents = Vec::with_capacity(messages.len());
    let mut pending_system: Vec<&str> = Vec::new();

    for message in messages {
        match message {
            ChatMessage::System(text) => pending_system.push(text),
            ChatMessage::Human(text) => {
                if pending_system.is_empty() {
                    contents.push(Content::user(text.as_str()));
                } else {
                    pending_system.push(text);
                    contents.push(Content::user(pending_system.join("\n\n")));
                    pending_system.clear();
                }
            }
            ChatMessage::Model(text) => contents.push(Content::model(text.as_str())),
        }
    }

    if !pending_system.is_empty() {
        contents.push(Content::user(pending_system.join("\n\n")));
    }

    contents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_folded_into_first_human_turn() {
        let contents = to_contents(&[
            ChatMessage::System("be brief".to_string()),
            ChatMessage::Human("hi".to_string()),
            ChatMessage::Model("yo".to_string()),
            ChatMessage::Human("next".to_string()),
        ]);
        assert_eq!(
            contents,
            vec![
                Content::user("be brief\n\nhi"),
                Content::model("yo"),
                Content::user("next"),
            ]
        );
    }

    #[test]
    fn test_trailing_system_becomes_user_turn() {
        let contents = to_contents(&[
            ChatMessage::Human("hi".to_string()),
            ChatMessage::System("late instruction".to_string()),
        ]);
        assert_eq!(
            contents,
            vec![Content::user("hi"), Content::user("late instruction")]
        );
    }
}
