//! Antigravity HTTP transport.

use super::{Account, AccountStore};
use crate::wire::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use async_trait::async_trait;
use guardian_error::{
    BackendError, GuardianError, GuardianResult, TransportError, TransportErrorKind,
};
use guardian_interface::PrimaryTransport;
use guardian_rate_limit::ClientConfig;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{debug, instrument};

/// Cloud Code generation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://cloudcode-pa.googleapis.com/v1internal:generateContent";

const NAME: &str = "antigravity";
const CLIENT_USER_AGENT: &str = "google-api-nodejs-client/9.15.1";
const API_CLIENT: &str = "google-cloud-sdk vscode_cloudshelleditor/0.1";
// Sent as a pre-serialized JSON string.
const CLIENT_METADATA: &str =
    r#"{"ideType":"IDE_UNSPECIFIED","platform":"PLATFORM_UNSPECIFIED","pluginType":"GEMINI"}"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    model: &'a str,
    user_agent: &'static str,
    request_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
    request_id: String,
    request: GenerateContentRequest,
}

/// Primary transport backed by locally stored Antigravity accounts.
#[derive(Debug)]
pub struct AntigravityTransport {
    store: AccountStore,
    model: String,
    temperature: f32,
    endpoint: String,
    client: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
}

impl AntigravityTransport {
    /// Transport using `store` for accounts.
    pub fn new(store: AccountStore, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            store,
            model: model.into(),
            temperature,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client: reqwest::Client::new(),
            blocking: OnceLock::new(),
        }
    }

    /// Transport using the default account file location.
    ///
    /// # Errors
    ///
    /// Fails when no account file location can be determined.
    pub fn from_config(config: &ClientConfig) -> GuardianResult<Self> {
        let store = AccountStore::discover().ok_or_else(|| {
            BackendError::new("could not determine the Antigravity account file location")
        })?;
        Ok(Self::new(store, &config.model, config.temperature))
    }

    /// Send requests to a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The account store.
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    fn first_account(&self, operation: &str) -> GuardianResult<Account> {
        self.store.load()?.into_iter().next().ok_or_else(|| {
            GuardianError::from(TransportError::new(
                NAME,
                operation,
                TransportErrorKind::Credential(format!(
                    "no usable account in {}",
                    self.store.path().display()
                )),
            ))
        })
    }

    fn envelope<'a>(
        &'a self,
        account: &'a Account,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Envelope<'a> {
        Envelope {
            model: &self.model,
            user_agent: "antigravity",
            request_type: "agent",
            project: account.project_id().as_deref(),
            request_id: format!("agent-{}", uuid::Uuid::new_v4()),
            request: GenerateContentRequest {
                contents: vec![Content::user(prompt)],
                system_instruction: system_prompt.map(Content::instruction),
                generation_config: Some(GenerationConfig {
                    temperature: Some(self.temperature),
                }),
            },
        }
    }

    /// Turn a status and body into generated text.
    fn read_response(operation: &str, status: StatusCode, body: &str) -> GuardianResult<String> {
        let fail = |kind| GuardianError::from(TransportError::new(NAME, operation, kind));

        if !status.is_success() {
            return Err(fail(TransportErrorKind::Http {
                status_code: status.as_u16(),
                message: body.trim().to_string(),
            }));
        }

        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| fail(TransportErrorKind::Decode(e.to_string())))?;
        // The payload is either wrapped in "response" or bare.
        let inner = match value {
            serde_json::Value::Object(mut map) if map.contains_key("response") => {
                map.remove("response").unwrap_or_default()
            }
            other => other,
        };
        let response: GenerateContentResponse = serde_json::from_value(inner)
            .map_err(|e| fail(TransportErrorKind::Decode(e.to_string())))?;

        debug!(finish_reason = ?response.finish_reason(), "Antigravity response decoded");
        response
            .text()
            .ok_or_else(|| fail(TransportErrorKind::EmptyResponse))
    }
}

#[async_trait]
impl PrimaryTransport for AntigravityTransport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn accounts(&self) -> GuardianResult<Vec<String>> {
        Ok(self
            .store
            .load()?
            .iter()
            .map(|account| account.label().to_string())
            .collect())
    }

    #[instrument(skip_all, fields(model = %self.model))]
    fn generate_sync(&self, prompt: &str, system_prompt: Option<&str>) -> GuardianResult<String> {
        const OPERATION: &str = "generate_sync";
        let account = self.first_account(OPERATION)?;
        let body = self.envelope(&account, prompt, system_prompt);
        debug!(account = account.label(), request_id = %body.request_id, "Sending Antigravity request");

        let client = self.blocking.get_or_init(reqwest::blocking::Client::new);
        let response = client
            .post(&self.endpoint)
            .bearer_auth(account.access_token())
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header("X-Goog-Api-Client", API_CLIENT)
            .header("Client-Metadata", CLIENT_METADATA)
            .json(&body)
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

    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate(&self, prompt: &str, system_prompt: Option<&str>) -> GuardianResult<String> {
        const OPERATION: &str = "generate";
        let account = self.first_account(OPERATION)?;
        let body = self.envelope(&account, prompt, system_prompt);
        debug!(account = account.label(), request_id = %body.request_id, "Sending Antigravity request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(account.access_token())
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header("X-Goog-Api-Client", API_CLIENT)
            .header("Client-Metadata", CLIENT_METADATA)
            .json(&body)
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
