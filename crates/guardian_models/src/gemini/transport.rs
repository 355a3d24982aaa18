//! Gemini API HTTP transport.

use super::conversion::to_contents;
use crate::wire::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use async_trait::async_trait;
use guardian_core::ChatMessage;
use guardian_error::{ConfigError, GuardianError, GuardianResult, TransportError, TransportErrorKind};
use guardian_interface::{SecondarySettings, SecondaryTransport};
use reqwest::StatusCode;
use std::sync::OnceLock;
use tracing::{debug, instrument};

/// Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const NAME: &str = "gemini-api";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Secondary transport calling the Gemini API with an API key.
#[derive(Debug)]
pub struct GeminiApiTransport {
    settings: SecondarySettings,
    base_url: String,
    client: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
}

impl GeminiApiTransport {
    /// Create a transport.
    ///
    /// # Errors
    ///
    /// Fails if the credential or model is empty.
    pub fn new(settings: SecondarySettings) -> GuardianResult<Self> {
        if settings.credential().trim().is_empty() {
            return Err(ConfigError::new("Gemini API credential is empty").into());
        }
        if settings.model().trim().is_empty() {
            return Err(ConfigError::new("Gemini API model is empty").into());
        }
        Ok(Self {
            settings,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
            blocking: OnceLock::new(),
        })
    }

    /// Send requests to a different base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The settings this transport was built with.
    pub fn settings(&self) -> &SecondarySettings {
        &self.settings
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.settings.model()
        )
    }

    fn build_request(&self, messages: &[ChatMessage]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: to_contents(messages),
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: Some(*self.settings.temperature()),
            }),
        }
    }

    fn read_response(operation: &str, status: StatusCode, body: &str) -> GuardianResult<String> {
        let fail = |kind| GuardianError::from(TransportError::new(NAME, operation, kind));

        if !status.is_success() {
            return Err(fail(TransportErrorKind::Http {
                status_code: status.as_u16(),
                message: body.trim().to_string(),
            }));
        }

        let response: GenerateContentResponse = serde_json::from_str(body)
            .map_err(|e| fail(TransportErrorKind::Decode(e.to_string())))?;
        debug!(finish_reason = ?response.finish_reason(), "Gemini API response decoded");
        response
            .text()
            .ok_or_else(|| fail(TransportErrorKind::EmptyResponse))
    }
}

#[async_trait]
impl SecondaryTransport for GeminiApiTransport {
    fn name(&self) -> &'static str {
        NAME
    }

    #[instrument(skip_all, fields(model = %self.settings.model(), messages = messages.len()))]
    fn invoke(&self, messages: &[ChatMessage]) -> GuardianResult<String> {
        const OPERATION: &str = "invoke";
        let request = self.build_request(messages);
        let url = self.url();
        debug!(url = %url, "Sending Gemini API request");

        let client = self.blocking.get_or_init(reqwest::blocking::Client::new);
        let response = client
            .post(&url)
            .header(API_KEY_HEADER, self.settings.credential())
            .json(&request)
            .send()
            .map_err(|e| {
                TransportError::new(NAME, OPERATION, TransportErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        let text = response.text().map_err(|e| {
            TransportError::new(NAME, OPERATION, TransportErrorKind::Request(e.to_string()))
        })?;
        Self::read_response(OPERATION, status, &text)
    }

    #[instrument(skip_all, fields(model = %self.settings.model(), messages = messages.len()))]
    async fn ainvoke(&self, messages: &[ChatMessage]) -> GuardianResult<String> {
        const OPERATION: &str = "ainvoke";
        let request = self.build_request(messages);
        let url = self.url();
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.settings.credential())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TransportError::new(NAME, OPERATION, TransportErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            TransportError::new(NAME, OPERATION, TransportErrorKind::Request(e.to_string()))
        })?;
        Self::read_response(OPERATION, status, &text)
    }
}
