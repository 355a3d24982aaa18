//! Transport trait definitions for the Guardian AI client.
//!
//! The client binds exactly one of two backends:
//!
//! - a **primary** transport that takes a flattened prompt plus an optional
//!   system instruction ([`PrimaryTransport`])
//! - a **secondary** transport with native multi-turn support that takes a
//!   structured message sequence ([`SecondaryTransport`])
//!
//! Both offer a blocking and an async call. Implementations live in
//! `guardian_models`; tests plug in mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;
mod traits;

pub use settings::{SecondarySettings, SecondarySettingsBuilder, SecondarySettingsBuilderError};
pub use traits::{BackendKind, PrimaryTransport, SecondaryTransport};
