//! Guardian - Gemini client with backend selection and rate limiting
//!
//! Guardian wraps two mutually exclusive Gemini transports behind one client:
//!
//! - **Backend selection**: `auto` binds the account-based primary transport when
//!   accounts exist, else the API-key secondary transport
//! - **Rate limiting**: a minimum interval between calls, enforced client-side
//! - **Context normalization**: typed or generic history, rendered in the shape
//!   the bound transport expects
//! - **Reasoning extraction**: `REASONING:` / `RESPONSE:` sections split into a
//!   structured result
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use guardian::{GenerationRequest, GuardianClient, GuardianConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GuardianConfig::load()?;
//!     let client = GuardianClient::new(config.ai)?;
//!
//!     let request = GenerationRequest::builder()
//!         .prompt("Does this IAM policy grant public access?")
//!         .system_prompt("You are a cloud security reviewer.")
//!         .build()?;
//!
//!     let result = client.generate_with_reasoning(&request).await?;
//!     println!("{}\n---\n{}", result.reasoning, result.response);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `guardian_error` - Error types
//! - `guardian_core` - Conversation and request types
//! - `guardian_interface` - Transport traits
//! - `guardian_rate_limit` - Rate limiter and configuration
//! - `guardian_models` - Selection, facade and built-in transports
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use guardian_core::*;
pub use guardian_error::*;
pub use guardian_interface::*;
pub use guardian_models::{
    Backend, BackendRegistry, GuardianClient, PrimaryFactory, Probe, SecondaryFactory, context,
    extract_reasoning, extraction, select,
};
pub use guardian_rate_limit::*;

#[cfg(feature = "antigravity")]
pub use guardian_models::antigravity;

#[cfg(feature = "gemini")]
pub use guardian_models::gemini;

mod observability;

pub use observability::{ObservabilityConfig, init_logging, init_logging_with_config};
