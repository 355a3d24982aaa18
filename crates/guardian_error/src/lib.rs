//! Error types for the Guardian AI client.
//!
//! This crate provides the error types shared by every Guardian crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums name the specific condition
//! - `*Error` structs wrap the kind with the source location that created it
//! - Constructors use `#[track_caller]` so the location is captured automatically
//!
//! Construction-time failures ([`ConfigError`], [`SelectionError`]) are fatal for the
//! client being built. Call-time failures ([`TransportError`]) are surfaced unchanged
//! so the caller can decide whether to retry.
//!
//! # Examples
//!
//! ```
//! use guardian_error::{GuardianResult, ConfigError};
//!
//! fn load() -> GuardianResult<String> {
//!     Err(ConfigError::new("missing [ai] section"))?
//! }
//!
//! let err = load().unwrap_err();
//! assert!(err.is_configuration());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod json;
mod selection;
mod transport;

pub use backend::BackendError;
pub use config::ConfigError;
pub use error::{GuardianError, GuardianErrorKind, GuardianResult};
pub use json::JsonError;
pub use selection::SelectionError;
pub use transport::{TransportError, TransportErrorKind};
