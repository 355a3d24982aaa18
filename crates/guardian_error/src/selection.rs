//! Backend selection errors.

use std::fmt;

/// No backend could be bound for the requested authentication mode.
///
/// Carries the requested mode and, for every backend that was probed, the
/// reason it was rejected. This error is fatal for client construction.
///
/// # Examples
///
/// ```
/// use guardian_error::SelectionError;
///
/// let err = SelectionError::new(
///     "auto",
///     vec![
///         ("primary".to_string(), "no accounts found".to_string()),
///         ("secondary".to_string(), "no credential".to_string()),
///     ],
/// );
/// let text = err.to_string();
/// assert!(text.contains("auto"));
/// assert!(text.contains("no accounts found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionError {
    mode: String,
    reasons: Vec<(String, String)>,
    line: u32,
    file: &'static str,
}

impl SelectionError {
    /// Create a selection error for `mode` with the per-backend rejection reasons.
    #[track_caller]
    pub fn new(mode: impl Into<String>, reasons: Vec<(String, String)>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            mode: mode.into(),
            reasons,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The authentication mode that was requested.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// `(backend, reason)` pairs in probe order.
    pub fn reasons(&self) -> &[(String, String)] {
        &self.reasons
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Backend Selection Error: no backend available for auth mode '{}'",
            self.mode
        )?;
        if self.reasons.is_empty() {
            write!(f, " (no backends probed)")?;
        } else {
            let details = self
                .reasons
                .iter()
                .map(|(backend, reason)| format!("{}: {}", backend, reason))
                .collect::<Vec<_>>()
                .join("; ");
            write!(f, " ({})", details)?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

impl std::error::Error for SelectionError {}
