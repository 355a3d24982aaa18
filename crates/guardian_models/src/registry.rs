//! Backend registry and selection.
//!
//! The registry holds at most one factory per backend kind. Selection walks
//! the kinds allowed by the auth mode in fixed priority order, probes each,
//! and binds the first one available. When none is, construction fails with
//! a [`SelectionError`] listing why each candidate was rejected.

use crate::Backend;
use guardian_error::{GuardianResult, SelectionError};
use guardian_interface::{BackendKind, PrimaryTransport, SecondarySettings, SecondaryTransport};
use guardian_rate_limit::{AuthMode, ClientConfig};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Builds a primary transport from the client configuration.
pub type PrimaryFactory =
    Arc<dyn Fn(&ClientConfig) -> GuardianResult<Arc<dyn PrimaryTransport>> + Send + Sync>;

/// Builds a secondary transport from its settings.
pub type SecondaryFactory =
    Arc<dyn Fn(SecondarySettings) -> GuardianResult<Arc<dyn SecondaryTransport>> + Send + Sync>;

/// Outcome of probing one backend.
#[derive(Debug)]
pub enum Probe {
    /// The backend can be bound
    Available(Backend),
    /// The backend cannot be bound, with the reason
    Unavailable(String),
}

/// Transport factories known to the client.
///
/// [`BackendRegistry::default`] registers the built-in transports enabled by
/// crate features. [`BackendRegistry::new`] starts empty, which is how tests
/// plug in mock transports.
#[derive(Clone)]
pub struct BackendRegistry {
    primary: Option<PrimaryFactory>,
    secondary: Option<SecondaryFactory>,
}

impl BackendRegistry {
    /// A registry with no transports.
    pub fn new() -> Self {
        Self {
            primary: None,
            secondary: None,
        }
    }

    /// Register the primary transport factory, replacing any previous one.
    pub fn with_primary<F>(mut self, factory: F) -> Self
    where
        F: Fn(&ClientConfig) -> GuardianResult<Arc<dyn PrimaryTransport>> + Send + Sync + 'static,
    {
        self.primary = Some(Arc::new(factory));
        self
    }

    /// Register the secondary transport factory, replacing any previous one.
    pub fn with_secondary<F>(mut self, factory: F) -> Self
    where
        F: Fn(SecondarySettings) -> GuardianResult<Arc<dyn SecondaryTransport>>
            + Send
            + Sync
            + 'static,
    {
        self.secondary = Some(Arc::new(factory));
        self
    }

    /// Whether a factory is registered for `kind`.
    pub fn is_registered(&self, kind: BackendKind) -> bool {
        match kind {
            BackendKind::Primary => self.primary.is_some(),
            BackendKind::Secondary => self.secondary.is_some(),
        }
    }

    /// Probe one backend.
    pub fn probe(&self, kind: BackendKind, config: &ClientConfig) -> Probe {
        match kind {
            BackendKind::Primary => self.probe_primary(config),
            BackendKind::Secondary => self.probe_secondary(config),
        }
    }

    /// Primary is available when registered, constructible, and at least one
    /// account is discoverable.
    fn probe_primary(&self, config: &ClientConfig) -> Probe {
        let Some(factory) = &self.primary else {
            return Probe::Unavailable("transport support not registered".to_string());
        };

        let transport = match factory(config) {
            Ok(transport) => transport,
            Err(e) => {
                warn!(error = %e, "Primary transport failed to initialize");
                return Probe::Unavailable(format!("initialization failed: {}", e));
            }
        };

        match transport.accounts() {
            Ok(accounts) if accounts.is_empty() => {
                Probe::Unavailable(format!("{}: no accounts found", transport.name()))
            }
            Ok(accounts) => {
                debug!(
                    transport = transport.name(),
                    accounts = accounts.len(),
                    "Primary accounts discovered"
                );
                Probe::Available(Backend::Primary(transport))
            }
            Err(e) => {
                warn!(transport = transport.name(), error = %e, "Account discovery failed");
                Probe::Unavailable(format!("{}: account discovery failed: {}", transport.name(), e))
            }
        }
    }

    /// Secondary is available when registered and a credential resolves.
    fn probe_secondary(&self, config: &ClientConfig) -> Probe {
        let Some(factory) = &self.secondary else {
            return Probe::Unavailable("transport support not registered".to_string());
        };

        let Some(credential) = config.resolved_credential() else {
            return Probe::Unavailable(format!(
                "no credential configured and {} is not set",
                config.credential_env
            ));
        };

        let settings = SecondarySettings::new(&config.model, credential, config.temperature);
        match factory(settings) {
            Ok(transport) => Probe::Available(Backend::Secondary(transport)),
            Err(e) => {
                warn!(error = %e, "Secondary transport failed to initialize");
                Probe::Unavailable(format!("initialization failed: {}", e))
            }
        }
    }
}

impl Default for BackendRegistry {
    #[allow(unused_mut)]
    fn default() -> Self {
        let mut registry = Self::new();

        #[cfg(feature = "antigravity")]
        {
            registry = registry.with_primary(|config| {
                let transport = crate::antigravity::AntigravityTransport::from_config(config)?;
                Ok(Arc::new(transport) as Arc<dyn PrimaryTransport>)
            });
        }

        #[cfg(feature = "gemini")]
        {
            registry = registry.with_secondary(|settings| {
                let transport = crate::gemini::GeminiApiTransport::new(settings)?;
                Ok(Arc::new(transport) as Arc<dyn SecondaryTransport>)
            });
        }

        registry
    }
}

impl fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("primary", &self.primary.is_some())
            .field("secondary", &self.secondary.is_some())
            .finish()
    }
}

/// Backend kinds allowed by `mode`, highest priority first.
fn candidates(mode: AuthMode) -> &'static [BackendKind] {
    match mode {
        AuthMode::Auto => &[BackendKind::Primary, BackendKind::Secondary],
        AuthMode::Primary => &[BackendKind::Primary],
        AuthMode::Secondary => &[BackendKind::Secondary],
    }
}

/// Bind a backend for `config`.
///
/// # Errors
///
/// Returns a [`SelectionError`] naming the requested mode and the reason each
/// candidate was unavailable.
#[instrument(skip_all, fields(auth_mode = %config.auth_mode))]
pub fn select(config: &ClientConfig, registry: &BackendRegistry) -> GuardianResult<Backend> {
    let mut reasons = Vec::new();

    for &kind in candidates(config.auth_mode) {
        match registry.probe(kind, config) {
            Probe::Available(backend) => {
                info!(backend = %kind, transport = backend.name(), "Backend selected");
                return Ok(backend);
            }
            Probe::Unavailable(reason) => {
                debug!(backend = %kind, reason = %reason, "Backend unavailable");
                reasons.push((kind.to_string(), reason));
            }
        }
    }

    Err(SelectionError::new(config.auth_mode.to_string(), reasons).into())
}
