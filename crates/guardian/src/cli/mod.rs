//! Command-line interface.

mod ask;
mod commands;

pub use ask::run_ask;
pub use commands::{AskArgs, Cli, Commands};
