//! Client configuration.
//!
//! This module provides TOML-based configuration for the `[ai]` section:
//! - Bundled defaults (include_str! from guardian.toml)
//! - User overrides (~/.config/guardian/guardian.toml, then ./guardian.toml)
//! - Automatic merging with user values taking precedence

use crate::RateLimiter;
use config::{Config, File, FileFormat, Source};
use guardian_error::{ConfigError, GuardianError, GuardianResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-3-pro";

/// Default environment variable holding the secondary credential.
pub const DEFAULT_CREDENTIAL_ENV: &str = "GOOGLE_API_KEY";

/// Which backend the client may bind.
///
/// Parsing is case-insensitive and accepts the transport names as aliases.
///
/// # Examples
///
/// ```
/// use guardian_rate_limit::AuthMode;
///
/// assert_eq!("AUTO".parse::<AuthMode>().unwrap(), AuthMode::Auto);
/// assert_eq!("antigravity".parse::<AuthMode>().unwrap(), AuthMode::Primary);
/// assert_eq!("api_key".parse::<AuthMode>().unwrap(), AuthMode::Secondary);
/// assert_eq!(AuthMode::Secondary.to_string(), "secondary");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum AuthMode {
    /// Try primary, then secondary
    #[default]
    #[strum(to_string = "auto")]
    Auto,
    /// Account-based transport only
    #[strum(to_string = "primary", serialize = "antigravity")]
    Primary,
    /// Credential-based transport only
    #[strum(to_string = "secondary", serialize = "api_key", serialize = "api-key")]
    Secondary,
}

impl TryFrom<String> for AuthMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse().map_err(|_| {
            format!(
                "unknown auth mode '{}' (expected auto, primary or secondary)",
                value
            )
        })
    }
}

/// Settings for one client instance. Immutable once the client is built.
///
/// # Examples
///
/// ```
/// use guardian_rate_limit::{AuthMode, ClientConfig};
///
/// let config = ClientConfig {
///     auth_mode: AuthMode::Secondary,
///     credential: Some("key-123".to_string()),
///     rate_limit: 30,
///     ..ClientConfig::default()
/// };
///
/// assert_eq!(config.model, "gemini-3-pro");
/// assert_eq!(config.resolved_credential().as_deref(), Some("key-123"));
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Model identifier
    pub model: String,

    /// Which backend may be bound
    #[serde(alias = "auth_method")]
    pub auth_mode: AuthMode,

    /// Secondary credential. Falls back to the `credential_env` variable.
    #[serde(alias = "api_key", skip_serializing)]
    pub credential: Option<String>,

    /// Requests per minute, 0 = unlimited
    pub rate_limit: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Environment variable consulted when `credential` is unset
    pub credential_env: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            auth_mode: AuthMode::Auto,
            credential: None,
            rate_limit: 60,
            temperature: 0.2,
            credential_env: DEFAULT_CREDENTIAL_ENV.to_string(),
        }
    }
}

// Keep the credential out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("model", &self.model)
            .field("auth_mode", &self.auth_mode)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("rate_limit", &self.rate_limit)
            .field("temperature", &self.temperature)
            .field("credential_env", &self.credential_env)
            .finish()
    }
}

impl ClientConfig {
    /// The secondary credential: explicit value first, then the environment.
    ///
    /// Empty values count as absent.
    pub fn resolved_credential(&self) -> Option<String> {
        self.credential
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .or_else(|| {
                std::env::var(&self.credential_env)
                    .ok()
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
            })
    }

    /// A rate limiter for this configuration.
    pub fn rate_limiter(&self) -> RateLimiter {
        RateLimiter::per_minute(self.rate_limit)
    }

    /// Check values that deserialization cannot.
    pub fn validate(&self) -> GuardianResult<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::new("model must not be empty").into());
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(ConfigError::new(format!(
                "temperature must be a non-negative number, got {}",
                self.temperature
            ))
            .into());
        }
        Ok(())
    }
}

/// Top-level Guardian configuration.
///
/// Loads the `[ai]` section from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from guardian.toml)
/// 2. User config in home directory (~/.config/guardian/guardian.toml)
/// 3. User config in current directory (./guardian.toml)
///
/// # Example
///
/// ```no_run
/// use guardian_rate_limit::GuardianConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GuardianConfig::load()?;
/// println!("model: {}", config.ai.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuardianConfig {
    /// AI client settings
    #[serde(default)]
    pub ai: ClientConfig,
}

/// One configuration file's `[ai]` table, before merging.
///
/// Legacy key names are resolved per file so a later file using `auth_method`
/// still overrides an earlier file's `auth_mode`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AiLayer {
    model: Option<String>,
    auth_mode: Option<AuthMode>,
    auth_method: Option<AuthMode>,
    credential: Option<String>,
    api_key: Option<String>,
    rate_limit: Option<u32>,
    temperature: Option<f32>,
    credential_env: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Layer {
    ai: AiLayer,
}

impl AiLayer {
    /// Overwrite every key this file sets. Canonical names win over legacy ones.
    fn apply(self, config: &mut ClientConfig) {
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(mode) = self.auth_mode.or(self.auth_method) {
            config.auth_mode = mode;
        }
        if let Some(credential) = self.credential.or(self.api_key) {
            config.credential = Some(credential);
        }
        if let Some(rate_limit) = self.rate_limit {
            config.rate_limit = rate_limit;
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(credential_env) = self.credential_env {
            config.credential_env = credential_env;
        }
    }
}

const DEFAULT_CONFIG: &str = include_str!("../../../guardian.toml");

impl GuardianConfig {
    /// Load configuration from a specific file path.
    ///
    /// Keys missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> GuardianResult<Self> {
        debug!("Loading configuration from file");

        let path = path.as_ref();
        let layer = read_layer(
            File::from(path).format(FileFormat::Toml),
            &path.display().to_string(),
        )?;
        Self::finish([layer])
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> GuardianResult<Self> {
        let mut overrides = Vec::new();
        if let Some(home) = dirs::home_dir() {
            overrides.push(home.join(".config/guardian/guardian.toml"));
        }
        overrides.push(PathBuf::from("guardian.toml"));
        Self::load_layered(&overrides)
    }

    /// Load the bundled defaults, then each optional file in order.
    ///
    /// Later files override earlier ones key by key. Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// values are invalid.
    #[instrument(skip(overrides), fields(files = overrides.len()))]
    pub fn load_layered(overrides: &[PathBuf]) -> GuardianResult<Self> {
        debug!("Loading configuration with precedence: later files > earlier files > bundled defaults");

        let mut layers = vec![read_layer(
            File::from_str(DEFAULT_CONFIG, FileFormat::Toml),
            "bundled defaults",
        )?];
        for path in overrides {
            layers.push(read_layer(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
                &path.display().to_string(),
            )?);
        }
        Self::finish(layers)
    }

    fn finish(layers: impl IntoIterator<Item = AiLayer>) -> GuardianResult<Self> {
        let mut ai = ClientConfig::default();
        for layer in layers {
            layer.apply(&mut ai);
        }
        ai.validate()?;
        debug!(
            model = %ai.model,
            auth_mode = %ai.auth_mode,
            rate_limit = ai.rate_limit,
            "Configuration loaded"
        );
        Ok(Self { ai })
    }
}

fn read_layer<S>(source: S, origin: &str) -> GuardianResult<AiLayer>
where
    S: Source + Send + Sync + 'static,
{
    let layer: Layer = Config::builder()
        .add_source(source)
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(|e| {
            GuardianError::from(ConfigError::new(format!(
                "Failed to parse configuration from {}: {}",
                origin, e
            )))
        })?;
    Ok(layer.ai)
}
