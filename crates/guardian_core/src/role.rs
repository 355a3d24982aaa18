//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a conversation turn.
///
/// Serializes lowercase. Deserialization accepts any casing.
///
/// # Examples
///
/// ```
/// use guardian_core::Role;
///
/// assert_eq!(Role::Model.to_string(), "model");
/// assert_eq!(Role::from_name("USER"), Some(Role::User));
/// assert_eq!(Role::from_name("assistant"), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    /// The human side of the conversation
    #[display("user")]
    User,
    /// The AI model
    #[display("model")]
    Model,
    /// Instructions that frame the conversation
    #[display("system")]
    System,
}

impl Role {
    /// Parse a role name case-insensitively. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "user" => Some(Role::User),
            "model" => Some(Role::Model),
            "system" => Some(Role::System),
            _ => None,
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::from_name(value.trim())
            .ok_or_else(|| format!("unknown role '{}' (expected user, model or system)", value))
    }
}
