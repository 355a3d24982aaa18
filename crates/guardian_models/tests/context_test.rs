//! History normalization tests over JSON input.

use guardian_core::{ChatMessage, ConversationMessage, Role, Turn};
use guardian_models::context::{normalize_all, to_structured, to_transcript};
use serde_json::json;

#[test]
fn test_transcript_of_mixed_json_history() -> anyhow::Result<()> {
    let history: Vec<ConversationMessage> = serde_json::from_value(json!([
        {"role": "user", "text": "hi"},
        {"role": "model", "parts": [{"text": "yo"}]},
    ]))?;

    assert_eq!(to_transcript(&history), "USER: hi\nMODEL: yo");
    Ok(())
}

#[test]
fn test_capitalized_typed_roles_keep_their_text() -> anyhow::Result<()> {
    let history: Vec<ConversationMessage> =
        serde_json::from_str(r#"[{"role":"User","text":"hi"},{"role":"model","text":"yo"}]"#)?;

    assert!(matches!(history[0], ConversationMessage::Typed(_)));
    assert_eq!(to_transcript(&history), "USER: hi\nMODEL: yo");
    Ok(())
}

#[test]
fn test_record_without_parts_uses_top_level_text() -> anyhow::Result<()> {
    let Some(both) = json!({"role": "model", "parts": [{"text": "from parts"}], "text": "ignored"})
        .as_object()
        .cloned()
    else {
        anyhow::bail!("expected a JSON object");
    };
    let mut history: Vec<ConversationMessage> =
        serde_json::from_value(json!([{"text": "no role given"}]))?;
    history.push(ConversationMessage::Generic(both));

    assert_eq!(
        normalize_all(&history),
        vec![
            Turn::new(Role::User, "no role given"),
            Turn::new(Role::Model, "from parts"),
        ]
    );
    Ok(())
}

#[test]
fn test_unrecognized_shapes_are_skipped() -> anyhow::Result<()> {
    let history: Vec<ConversationMessage> = serde_json::from_value(json!([
        {"role": "tool", "parts": [{"text": "ignored"}]},
        {"role": ["user"], "parts": [{"text": "ignored"}]},
        {"role": "USER", "parts": [{"text": "kept"}]},
        {"parts": [{"text": "defaulted"}]},
    ]))?;

    assert_eq!(
        normalize_all(&history),
        vec![Turn::new(Role::User, "kept"), Turn::new(Role::User, "defaulted")]
    );
    Ok(())
}

#[test]
fn test_typed_and_generic_normalize_identically() {
    let typed = vec![
        ConversationMessage::typed(Role::System, "rules"),
        ConversationMessage::typed(Role::User, "hi"),
        ConversationMessage::typed(Role::Model, "yo"),
    ];
    let generic = vec![
        ConversationMessage::record("system", "rules"),
        ConversationMessage::record("user", "hi"),
        ConversationMessage::record("model", "yo"),
    ];

    assert_eq!(normalize_all(&typed), normalize_all(&generic));
    assert_eq!(to_transcript(&typed), to_transcript(&generic));
    assert_eq!(to_structured(&typed), to_structured(&generic));
    assert_eq!(
        to_structured(&typed),
        vec![
            ChatMessage::System("rules".to_string()),
            ChatMessage::Human("hi".to_string()),
            ChatMessage::Model("yo".to_string()),
        ]
    );
}

#[test]
fn test_empty_history() {
    assert_eq!(to_transcript(&[]), "");
    assert!(to_structured(&[]).is_empty());
}
