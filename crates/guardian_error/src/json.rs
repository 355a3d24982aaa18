//! JSON error types.

/// A JSON document supplied to the client could not be parsed.
///
/// `document` names what was being read, such as an account or history file,
/// so the message points at the input rather than at the parser.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error in {}: {} at line {} in {}", document, message, line, file)]
pub struct JsonError {
    /// The document being parsed
    pub document: String,
    /// The underlying parser message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError for `document` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use guardian_error::JsonError;
    ///
    /// let err = JsonError::new("accounts.json", "expected value at line 1 column 1");
    /// assert_eq!(err.document, "accounts.json");
    /// assert!(err.to_string().starts_with("JSON Error in accounts.json"));
    /// ```
    #[track_caller]
    pub fn new(document: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            document: document.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
