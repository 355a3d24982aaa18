//! Reasoning extraction from model output.
//!
//! Models asked to structure their answer write a `REASONING:` section followed
//! by a `RESPONSE:` section. [`extract_reasoning`] splits such text and never
//! fails: output that does not follow the structure comes back whole, with a
//! sentinel in place of the reasoning.

use guardian_core::ReasoningResult;
use tracing::debug;

/// Marker opening the reasoning section.
pub const REASONING_MARKER: &str = "REASONING:";

/// Marker opening the final answer.
pub const RESPONSE_MARKER: &str = "RESPONSE:";

/// Reasoning text used when the output has no structure.
pub const NO_REASONING_SENTINEL: &str = "No explicit reasoning provided";

/// Reasoning text used when the structure could not be sliced.
pub const PARSE_ERROR_SENTINEL: &str = "Error parsing response structure";

/// Append the structure instruction to a prompt.
///
/// # Examples
///
/// ```
/// use guardian_models::extraction::reasoning_prompt;
///
/// let prompt = reasoning_prompt("Is the bucket public?");
/// assert!(prompt.starts_with("Is the bucket public?\n\n"));
/// assert!(prompt.contains("1. REASONING:"));
/// assert!(prompt.contains("2. RESPONSE:"));
/// ```
pub fn reasoning_prompt(prompt: &str) -> String {
    format!(
        "{prompt}\n\nPlease structure your response as:\n\
         1. {REASONING_MARKER} Explain your thought process and decision-making\n\
         2. {RESPONSE_MARKER} Provide your final answer or recommendation\n"
    )
}

/// Split model output into reasoning and response.
///
/// With both markers present, the reasoning is the trimmed text between the
/// first `REASONING:` and the first `RESPONSE:`, and the response is the
/// trimmed text after `RESPONSE:`. If `RESPONSE:` comes first, the reasoning
/// is empty.
///
/// # Examples
///
/// ```
/// use guardian_models::extract_reasoning;
///
/// let result = extract_reasoning("REASONING: because X\nRESPONSE: answer Y");
/// assert_eq!(result.reasoning, "because X");
/// assert_eq!(result.response, "answer Y");
///
/// let plain = extract_reasoning("just an answer");
/// assert_eq!(plain.reasoning, "No explicit reasoning provided");
/// assert_eq!(plain.response, "just an answer");
/// ```
pub fn extract_reasoning(raw: &str) -> ReasoningResult {
    let (Some(reasoning_at), Some(response_at)) =
        (raw.find(REASONING_MARKER), raw.find(RESPONSE_MARKER))
    else {
        debug!("Model output has no reasoning structure");
        return ReasoningResult::new(NO_REASONING_SENTINEL, raw);
    };

    match slice_sections(raw, reasoning_at, response_at) {
        Some((reasoning, response)) => ReasoningResult::new(reasoning, response),
        None => {
            debug!("Model output structure could not be sliced");
            ReasoningResult::new(PARSE_ERROR_SENTINEL, raw)
        }
    }
}

fn slice_sections(raw: &str, reasoning_at: usize, response_at: usize) -> Option<(&str, &str)> {
    let reasoning_start = reasoning_at + REASONING_MARKER.len();
    let response = raw.get(response_at + RESPONSE_MARKER.len()..)?.trim();

    // Response before reasoning: the slice between them is empty.
    let reasoning = if reasoning_start <= response_at {
        raw.get(reasoning_start..response_at)?.trim()
    } else {
        ""
    };

    Some((reasoning, response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_sections() {
        let raw = "Preamble\n1. REASONING:\n  The policy allows it.\n  No exceptions apply.\n\n2. RESPONSE:\n  Approve.\n";
        let result = extract_reasoning(raw);
        assert_eq!(result.reasoning, "The policy allows it.\n  No exceptions apply.\n\n2.");
        assert_eq!(result.response, "Approve.");
    }

    #[test]
    fn test_single_marker() {
        let raw = "RESPONSE: only an answer";
        let result = extract_reasoning(raw);
        assert_eq!(result.reasoning, NO_REASONING_SENTINEL);
        assert_eq!(result.response, raw);
    }

    #[test]
    fn test_reversed_markers() {
        let result = extract_reasoning("RESPONSE: yes\nREASONING: because");
        assert_eq!(result.reasoning, "");
        assert_eq!(result.response, "yes\nREASONING: because");
    }

    #[test]
    fn test_empty_sections() {
        let result = extract_reasoning("REASONING:RESPONSE:");
        assert_eq!(result.reasoning, "");
        assert_eq!(result.response, "");
    }

    #[test]
    fn test_prompt_trailer() {
        assert_eq!(
            reasoning_prompt("Q"),
            "Q\n\nPlease structure your response as:\n\
             1. REASONING: Explain your thought process and decision-making\n\
             2. RESPONSE: Provide your final answer or recommendation\n"
        );
    }
}
