//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use guardian::AuthMode;
use std::path::PathBuf;

/// Guardian - Gemini client with backend selection and reasoning extraction
#[derive(Parser, Debug)]
#[command(name = "guardian")]
#[command(about = "Gemini client with backend selection and reasoning extraction", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a prompt and print the answer
    Ask(AskArgs),
}

/// Arguments for `guardian ask`
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The prompt to send
    pub prompt: String,

    /// System instruction
    #[arg(long)]
    pub system: Option<String>,

    /// JSON file holding prior conversation, oldest first
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Ask for reasoning and print it separately from the answer
    #[arg(long)]
    pub reasoning: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file (replaces the layered lookup)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend to use: auto, primary (antigravity) or secondary (api_key)
    #[arg(long)]
    pub auth_mode: Option<AuthMode>,

    /// Requests per minute, 0 disables limiting
    #[arg(long)]
    pub rate_limit: Option<u32>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::try_parse_from([
            "guardian",
            "ask",
            "Is MFA on?",
            "--system",
            "be brief",
            "--auth-mode",
            "api_key",
            "--rate-limit",
            "0",
            "--reasoning",
        ])
        .unwrap();

        let Commands::Ask(args) = cli.command;
        assert_eq!(args.prompt, "Is MFA on?");
        assert_eq!(args.system.as_deref(), Some("be brief"));
        assert_eq!(args.auth_mode, Some(AuthMode::Secondary));
        assert_eq!(args.rate_limit, Some(0));
        assert!(args.reasoning);
        assert!(!args.json);
    }

    #[test]
    fn test_rejects_unknown_auth_mode() {
        let result = Cli::try_parse_from(["guardian", "ask", "q", "--auth-mode", "oauth"]);
        assert!(result.is_err());
    }
}
