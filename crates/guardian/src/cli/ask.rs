//! `guardian ask` implementation.

use super::AskArgs;
use guardian::{
    ClientConfig, ConfigError, ConversationMessage, GenerationRequest, GuardianClient,
    GuardianConfig, GuardianResult, JsonError,
};
use std::path::Path;
use tracing::{debug, instrument};

/// Run `guardian ask`.
#[instrument(skip_all)]
pub async fn run_ask(args: AskArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = resolve_config(&args)?;
    let client = GuardianClient::new(config)?;
    debug!(backend = client.backend_name(), "Client ready");

    let history = match &args.history {
        Some(path) => load_history(path)?,
        None => Vec::new(),
    };

    let mut request = GenerationRequest::builder();
    request.prompt(args.prompt.as_str()).history(history);
    if let Some(system) = &args.system {
        request.system_prompt(system.as_str());
    }
    let request = request.build()?;

    if args.reasoning {
        let result = client.generate_with_reasoning(&request).await?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("Reasoning:\n{}\n\nResponse:\n{}", result.reasoning, result.response);
        }
    } else {
        let text = client.generate(&request).await?;
        if args.json {
            println!("{}", serde_json::json!({ "response": text }));
        } else {
            println!("{}", text);
        }
    }

    Ok(())
}

/// Load configuration and apply command-line overrides.
fn resolve_config(args: &AskArgs) -> GuardianResult<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => GuardianConfig::from_file(path)?.ai,
        None => GuardianConfig::load()?.ai,
    };

    if let Some(mode) = args.auth_mode {
        config.auth_mode = mode;
    }
    if let Some(rate_limit) = args.rate_limit {
        config.rate_limit = rate_limit;
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    Ok(config)
}

/// Read a JSON array of typed (`{role, text}`) or generic (`{role, parts}`) messages.
fn load_history(path: &Path) -> GuardianResult<Vec<ConversationMessage>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!("Failed to read history file {}: {}", path.display(), e))
    })?;
    let history: Vec<ConversationMessage> = serde_json::from_str(&raw)
        .map_err(|e| JsonError::new(path.display().to_string(), e.to_string()))?;
    debug!(messages = history.len(), "History loaded");
    Ok(history)
}
