//! Structured reasoning output.

use serde::{Deserialize, Serialize};

/// A model answer split into its rationale and its final response.
///
/// # Examples
///
/// ```
/// use guardian_core::ReasoningResult;
///
/// let result = ReasoningResult::new("because X", "answer Y");
/// assert_eq!(result.reasoning, "because X");
/// assert_eq!(result.response, "answer Y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReasoningResult {
    /// The model's explanation, or a sentinel when none could be extracted
    pub reasoning: String,
    /// The final answer
    pub response: String,
}

impl ReasoningResult {
    /// Create a reasoning result.
    pub fn new(reasoning: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            reasoning: reasoning.into(),
            response: response.into(),
        }
    }
}
