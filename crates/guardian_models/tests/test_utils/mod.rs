//! Test utilities for Guardian client tests.
//!
//! Mock transports record every call and answer from a fixed behavior, so
//! selection and dispatch can be tested without network access.

#![allow(dead_code)]

pub mod mock_transports;

#[allow(unused_imports)]
pub use mock_transports::{MockBehavior, MockPrimary, MockSecondary, PrimaryCall, SecondaryCall};

use guardian_interface::{PrimaryTransport, SecondaryTransport};
use guardian_models::BackendRegistry;
use guardian_rate_limit::{AuthMode, ClientConfig};
use std::sync::Arc;

/// Environment variable that no test environment sets.
pub const UNSET_CREDENTIAL_ENV: &str = "GUARDIAN_TEST_CREDENTIAL_NEVER_SET";

/// Config for `mode` that never picks up a credential from the environment.
pub fn test_config(mode: AuthMode, credential: Option<&str>, rate_limit: u32) -> ClientConfig {
    ClientConfig {
        auth_mode: mode,
        credential: credential.map(String::from),
        rate_limit,
        credential_env: UNSET_CREDENTIAL_ENV.to_string(),
        ..ClientConfig::default()
    }
}

/// Registry holding the given mocks. `None` leaves that backend unregistered.
pub fn mock_registry(
    primary: Option<Arc<MockPrimary>>,
    secondary: Option<Arc<MockSecondary>>,
) -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    if let Some(primary) = primary {
        registry = registry.with_primary(move |_config| {
            primary.record_construction();
            Ok(primary.clone() as Arc<dyn PrimaryTransport>)
        });
    }
    if let Some(secondary) = secondary {
        registry = registry.with_secondary(move |settings| {
            secondary.record_settings(settings);
            Ok(secondary.clone() as Arc<dyn SecondaryTransport>)
        });
    }
    registry
}
