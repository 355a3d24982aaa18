//! Rate limiting and configuration for the Guardian AI client.
//!
//! - [`RateLimiter`] enforces a minimum spacing between outbound calls
//! - [`GuardianConfig`] loads the `[ai]` section into a [`ClientConfig`]
//!
//! Configuration is layered: bundled defaults, then
//! `~/.config/guardian/guardian.toml`, then `./guardian.toml`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod limiter;

pub use config::{AuthMode, ClientConfig, DEFAULT_CREDENTIAL_ENV, DEFAULT_MODEL, GuardianConfig};
pub use limiter::RateLimiter;
