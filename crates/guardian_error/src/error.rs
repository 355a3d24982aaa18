//! Top-level error wrapper types.

use crate::{BackendError, ConfigError, JsonError, SelectionError, TransportError};

/// The foundation error enum for every Guardian crate.
///
/// # Examples
///
/// ```
/// use guardian_error::{GuardianError, ConfigError};
///
/// let err: GuardianError = ConfigError::new("bad auth mode").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GuardianErrorKind {
    /// Configuration could not be loaded or is invalid
    #[from(ConfigError)]
    Config(ConfigError),
    /// No backend could be bound at construction
    #[from(SelectionError)]
    Selection(SelectionError),
    /// A backend network call failed
    #[from(TransportError)]
    Transport(TransportError),
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Guardian error with kind discrimination.
///
/// # Examples
///
/// ```
/// use guardian_error::{GuardianResult, TransportError, TransportErrorKind};
///
/// fn call() -> GuardianResult<String> {
///     Err(TransportError::new("mock", "invoke", TransportErrorKind::EmptyResponse))?
/// }
///
/// let err = call().unwrap_err();
/// assert!(err.is_transport());
/// assert!(!err.is_configuration());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Guardian Error: {}", _0)]
pub struct GuardianError(Box<GuardianErrorKind>);

impl GuardianError {
    /// Create a new error from a kind.
    pub fn new(kind: GuardianErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GuardianErrorKind {
        &self.0
    }

    /// Construction-time errors: bad configuration or no bindable backend.
    pub fn is_configuration(&self) -> bool {
        matches!(
            *self.0,
            GuardianErrorKind::Config(_) | GuardianErrorKind::Selection(_)
        )
    }

    /// Call-time errors raised by the active backend.
    pub fn is_transport(&self) -> bool {
        matches!(*self.0, GuardianErrorKind::Transport(_))
    }
}

// Generic From implementation for any type that converts to GuardianErrorKind
impl<T> From<T> for GuardianError
where
    T: Into<GuardianErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Guardian operations.
pub type GuardianResult<T> = std::result::Result<T, GuardianError>;
