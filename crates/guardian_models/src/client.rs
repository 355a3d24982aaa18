//! The generation facade.

use crate::context::to_structured;
use crate::extraction::{extract_reasoning, reasoning_prompt};
use crate::{Backend, BackendRegistry, select};
use guardian_core::{ChatMessage, GenerationRequest, ReasoningResult};
use guardian_error::{GuardianError, GuardianResult};
use guardian_interface::{BackendKind, PrimaryTransport, SecondaryTransport};
use guardian_rate_limit::{ClientConfig, GuardianConfig, RateLimiter};
use tracing::{debug, error, info, instrument};

/// AI client bound to exactly one backend.
///
/// Every call waits on the client's rate limiter, normalizes the request
/// history into the bound backend's shape and dispatches. Backend failures
/// are logged and returned unchanged; there is no retry.
///
/// A client is meant for one logical caller at a time. Concurrent callers on
/// one instance may under-enforce the rate limit.
#[derive(Debug)]
pub struct GuardianClient {
    config: ClientConfig,
    backend: Backend,
    limiter: RateLimiter,
}

/// A request prepared for the bound backend.
enum Dispatch<'a> {
    Primary {
        transport: &'a dyn PrimaryTransport,
        prompt: String,
        system_prompt: Option<&'a str>,
    },
    Secondary {
        transport: &'a dyn SecondaryTransport,
        messages: Vec<ChatMessage>,
    },
}

impl GuardianClient {
    /// Build a client with the built-in transports.
    ///
    /// # Errors
    ///
    /// Fails when the configuration is invalid or no backend allowed by the
    /// auth mode is available.
    pub fn new(config: ClientConfig) -> GuardianResult<Self> {
        Self::with_registry(config, &BackendRegistry::default())
    }

    /// Build a client from the layered configuration files.
    pub fn from_config_files() -> GuardianResult<Self> {
        Self::new(GuardianConfig::load()?.ai)
    }

    /// Build a client choosing among the transports in `registry`.
    #[instrument(skip_all, fields(model = %config.model, auth_mode = %config.auth_mode))]
    pub fn with_registry(config: ClientConfig, registry: &BackendRegistry) -> GuardianResult<Self> {
        config.validate()?;
        let backend = select(&config, registry)?;
        let limiter = config.rate_limiter();

        info!(
            backend = %backend.kind(),
            transport = backend.name(),
            rate_limit = config.rate_limit,
            "Guardian client ready"
        );

        Ok(Self {
            config,
            backend,
            limiter,
        })
    }

    /// Generate text without blocking the executor.
    #[instrument(skip_all, fields(backend = self.backend.name(), history = request.history().len()))]
    pub async fn generate(&self, request: &GenerationRequest) -> GuardianResult<String> {
        self.limiter.wait().await;

        let result = match self.prepare(request) {
            Dispatch::Primary {
                transport,
                prompt,
                system_prompt,
            } => transport.generate(&prompt, system_prompt).await,
            Dispatch::Secondary {
                transport,
                messages,
            } => transport.ainvoke(&messages).await,
        };

        self.finish(result, self.async_operation())
    }

    /// Generate text, blocking the current thread.
    ///
    /// Built-in transports use blocking HTTP clients here, so this must not be
    /// called from inside an async runtime.
    #[instrument(skip_all, fields(backend = self.backend.name(), history = request.history().len()))]
    pub fn generate_sync(&self, request: &GenerationRequest) -> GuardianResult<String> {
        self.limiter.wait_blocking();

        let result = match self.prepare(request) {
            Dispatch::Primary {
                transport,
                prompt,
                system_prompt,
            } => transport.generate_sync(&prompt, system_prompt),
            Dispatch::Secondary {
                transport,
                messages,
            } => transport.invoke(&messages),
        };

        self.finish(result, self.sync_operation())
    }

    /// Ask for a structured answer and split it into reasoning and response.
    pub async fn generate_with_reasoning(
        &self,
        request: &GenerationRequest,
    ) -> GuardianResult<ReasoningResult> {
        let request = request.with_prompt(reasoning_prompt(request.prompt()));
        let text = self.generate(&request).await?;
        Ok(extract_reasoning(&text))
    }

    /// Blocking variant of [`generate_with_reasoning`](Self::generate_with_reasoning).
    pub fn generate_with_reasoning_sync(
        &self,
        request: &GenerationRequest,
    ) -> GuardianResult<ReasoningResult> {
        let request = request.with_prompt(reasoning_prompt(request.prompt()));
        let text = self.generate_sync(&request)?;
        Ok(extract_reasoning(&text))
    }

    /// Which backend is bound.
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Name of the bound transport.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// The bound backend.
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Configured model identifier.
    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The client's rate limiter.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Build the payload for the bound backend.
    ///
    /// Primary gets the history flattened into a transcript header above the
    /// prompt. Secondary gets `[system] + history + [prompt]` as messages.
    fn prepare<'a>(&'a self, request: &'a GenerationRequest) -> Dispatch<'a> {
        let system_prompt = request.system_prompt().as_deref();

        match &self.backend {
            Backend::Primary(transport) => {
                let transcript = crate::context::to_transcript(request.history());
                let prompt = if transcript.is_empty() {
                    request.prompt().clone()
                } else {
                    format!(
                        "Previous conversation history:\n{}\n\nCurrent interaction:\n{}",
                        transcript,
                        request.prompt()
                    )
                };
                debug!(prompt_len = prompt.len(), "Prepared primary payload");
                Dispatch::Primary {
                    transport: transport.as_ref(),
                    prompt,
                    system_prompt,
                }
            }
            Backend::Secondary(transport) => {
                let mut messages = Vec::with_capacity(request.history().len() + 2);
                if let Some(system) = system_prompt {
                    messages.push(ChatMessage::System(system.to_string()));
                }
                messages.extend(to_structured(request.history()));
                messages.push(ChatMessage::Human(request.prompt().clone()));
                debug!(messages = messages.len(), "Prepared secondary payload");
                Dispatch::Secondary {
                    transport: transport.as_ref(),
                    messages,
                }
            }
        }
    }

    fn finish(&self, result: GuardianResult<String>, operation: &str) -> GuardianResult<String> {
        result.map_err(|e: GuardianError| {
            error!(
                backend = %self.backend.kind(),
                transport = self.backend.name(),
                operation,
                error = %e,
                "Generation failed"
            );
            e
        })
    }

    fn async_operation(&self) -> &'static str {
        match self.backend {
            Backend::Primary(_) => "generate",
            Backend::Secondary(_) => "ainvoke",
        }
    }

    fn sync_operation(&self) -> &'static str {
        match self.backend {
            Backend::Primary(_) => "generate_sync",
            Backend::Secondary(_) => "invoke",
        }
    }
}
