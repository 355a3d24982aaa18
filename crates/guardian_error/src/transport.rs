//! Transport (network call) errors.

/// Transport-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TransportErrorKind {
    /// The request could not be sent or the connection failed
    #[display("request failed: {}", _0)]
    Request(String),
    /// The server answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// The response body could not be decoded
    #[display("failed to decode response: {}", _0)]
    Decode(String),
    /// The response decoded but carried no text
    #[display("response contained no text")]
    EmptyResponse,
    /// No usable account or credential at call time
    #[display("no usable credential: {}", _0)]
    Credential(String),
}

impl TransportErrorKind {
    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// The client never retries on its own; this is a hint for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportErrorKind::Http { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            TransportErrorKind::Request(_) => true,
            _ => false,
        }
    }
}

/// Error raised by a backend transport call, tagged with the backend and operation.
///
/// # Examples
///
/// ```
/// use guardian_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(
///     "gemini-api",
///     "invoke",
///     TransportErrorKind::Http { status_code: 503, message: "overloaded".to_string() },
/// );
/// assert!(err.to_string().contains("gemini-api"));
/// assert!(err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Transport Error [{} {}]: {} at line {} in {}",
    backend,
    operation,
    kind,
    line,
    file
)]
pub struct TransportError {
    /// Backend identity (e.g. "antigravity", "gemini-api")
    pub backend: String,
    /// Operation that failed (e.g. "generate", "invoke")
    pub operation: String,
    /// The kind of failure
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(
        backend: impl Into<String>,
        operation: impl Into<String>,
        kind: TransportErrorKind,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            backend: backend.into(),
            operation: operation.into(),
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
