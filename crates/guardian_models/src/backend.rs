//! The bound backend.

use guardian_interface::{BackendKind, PrimaryTransport, SecondaryTransport};
use std::fmt;
use std::sync::Arc;

/// The transport a client is bound to for its whole lifetime.
#[derive(Clone)]
pub enum Backend {
    /// Transport taking a flattened prompt and a system instruction
    Primary(Arc<dyn PrimaryTransport>),
    /// Transport taking structured messages
    Secondary(Arc<dyn SecondaryTransport>),
}

impl Backend {
    /// Which of the two backends this is.
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::Primary(_) => BackendKind::Primary,
            Backend::Secondary(_) => BackendKind::Secondary,
        }
    }

    /// Name of the underlying transport.
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Primary(transport) => transport.name(),
            Backend::Secondary(transport) => transport.name(),
        }
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}
