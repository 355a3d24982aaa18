//! Backend selection, generation facade and transports for the Guardian AI client.
//!
//! [`GuardianClient`] binds exactly one backend at construction, spaces calls
//! with a [`RateLimiter`](guardian_rate_limit::RateLimiter), normalizes history
//! into the shape the bound backend expects and dispatches.
//!
//! # Features
//!
//! - `antigravity` (default): primary transport using locally stored accounts
//! - `gemini` (default): secondary transport using an API key
//!
//! Without a feature, the corresponding backend is never available and
//! `auto` mode falls through to the other one.
//!
//! # Example
//!
//! ```no_run
//! use guardian_core::GenerationRequest;
//! use guardian_models::GuardianClient;
//! use guardian_rate_limit::ClientConfig;
//!
//! # async fn run() -> guardian_error::GuardianResult<()> {
//! let client = GuardianClient::new(ClientConfig::default())?;
//! let answer = client.generate(&GenerationRequest::new("Is MFA enforced?")).await?;
//! println!("{} answered: {}", client.backend_name(), answer);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod client;
pub mod context;
pub mod extraction;
mod registry;

#[cfg(any(feature = "antigravity", feature = "gemini"))]
mod wire;

#[cfg(feature = "antigravity")]
pub mod antigravity;

#[cfg(feature = "gemini")]
pub mod gemini;

pub use backend::Backend;
pub use client::GuardianClient;
pub use extraction::extract_reasoning;
pub use registry::{BackendRegistry, PrimaryFactory, Probe, SecondaryFactory, select};
