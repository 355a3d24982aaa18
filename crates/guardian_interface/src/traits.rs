//! Backend transport traits.

use async_trait::async_trait;
use guardian_core::ChatMessage;
use guardian_error::GuardianResult;
use serde::{Deserialize, Serialize};

/// Which of the two backends a client is bound to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Account-based transport taking a flattened transcript
    #[display("primary")]
    Primary,
    /// Credential-based transport taking structured messages
    #[display("secondary")]
    Secondary,
}

/// Transport that accepts a single prompt and an optional system instruction.
///
/// History is flattened into the prompt by the caller before dispatch.
#[async_trait]
pub trait PrimaryTransport: Send + Sync {
    /// Transport name used in logs and errors (e.g. "antigravity").
    fn name(&self) -> &'static str;

    /// Usable accounts discoverable by this transport.
    ///
    /// An empty list means the transport cannot be bound.
    fn accounts(&self) -> GuardianResult<Vec<String>>;

    /// Generate text, blocking the current thread.
    fn generate_sync(&self, prompt: &str, system_prompt: Option<&str>) -> GuardianResult<String>;

    /// Generate text.
    async fn generate(&self, prompt: &str, system_prompt: Option<&str>) -> GuardianResult<String>;
}

/// Transport with native multi-turn support.
#[async_trait]
pub trait SecondaryTransport: Send + Sync {
    /// Transport name used in logs and errors (e.g. "gemini-api").
    fn name(&self) -> &'static str;

    /// Invoke the model on a message sequence, blocking the current thread.
    fn invoke(&self, messages: &[ChatMessage]) -> GuardianResult<String>;

    /// Invoke the model on a message sequence.
    async fn ainvoke(&self, messages: &[ChatMessage]) -> GuardianResult<String>;
}
