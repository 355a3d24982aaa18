//! Generation request type.

use crate::ConversationMessage;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single generation call: prompt, optional system instruction and history.
///
/// History is ordered oldest first.
///
/// # Examples
///
/// ```
/// use guardian_core::{ConversationMessage, GenerationRequest, Role};
///
/// let request = GenerationRequest::builder()
///     .prompt("Summarize the findings")
///     .system_prompt("You are a compliance reviewer")
///     .history(vec![ConversationMessage::typed(Role::User, "hi")])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Summarize the findings");
/// assert_eq!(request.system_prompt().as_deref(), Some("You are a compliance reviewer"));
/// assert_eq!(request.history().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// The current prompt
    prompt: String,
    /// Optional system instruction
    #[builder(setter(strip_option), default)]
    #[serde(default)]
    system_prompt: Option<String>,
    /// Prior conversation, oldest first
    #[builder(default)]
    #[serde(default)]
    history: Vec<ConversationMessage>,
}

impl GenerationRequest {
    /// Create a request with only a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            history: Vec::new(),
        }
    }

    /// Create a builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Copy of this request with a different prompt.
    pub fn with_prompt(&self, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..self.clone()
        }
    }
}
