//! Construction settings for secondary transports.

use derive_getters::Getters;

/// What a secondary transport needs to be constructed.
///
/// # Examples
///
/// ```
/// use guardian_interface::SecondarySettings;
///
/// let settings = SecondarySettings::builder()
///     .model("gemini-3-pro")
///     .credential("key-123")
///     .temperature(0.2_f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.model(), "gemini-3-pro");
/// assert_eq!(*settings.temperature(), 0.2);
/// ```
#[derive(Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct SecondarySettings {
    /// Model identifier
    model: String,
    /// API credential
    credential: String,
    /// Sampling temperature
    temperature: f32,
}

impl SecondarySettings {
    /// Create settings from their parts.
    pub fn new(model: impl Into<String>, credential: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            credential: credential.into(),
            temperature,
        }
    }

    /// Create a builder.
    pub fn builder() -> SecondarySettingsBuilder {
        SecondarySettingsBuilder::default()
    }
}

// Keep the credential out of logs.
impl std::fmt::Debug for SecondarySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecondarySettings")
            .field("model", &self.model)
            .field("credential", &"<redacted>")
            .field("temperature", &self.temperature)
            .finish()
    }
}
