//! Mock primary and secondary transports.

use async_trait::async_trait;
use guardian_core::ChatMessage;
use guardian_error::{BackendError, GuardianResult, TransportError, TransportErrorKind};
use guardian_interface::{PrimaryTransport, SecondarySettings, SecondaryTransport};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What a mock does when called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text
    Reply(String),
    /// Fail with a transport error of this kind
    Fail(TransportErrorKind),
}

impl MockBehavior {
    fn run(&self, name: &str, operation: &str) -> GuardianResult<String> {
        match self {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail(kind) => {
                Err(TransportError::new(name, operation, kind.clone()).into())
            }
        }
    }
}

/// A recorded primary call.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryCall {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub blocking: bool,
}

/// Mock primary transport.
#[derive(Debug)]
pub struct MockPrimary {
    accounts: Result<Vec<String>, String>,
    behavior: MockBehavior,
    calls: Mutex<Vec<PrimaryCall>>,
    constructed: AtomicUsize,
}

impl MockPrimary {
    /// Mock with one account that replies with `text`.
    pub fn new(text: &str) -> Self {
        Self {
            accounts: Ok(vec!["mock@example.com".to_string()]),
            behavior: MockBehavior::Reply(text.to_string()),
            calls: Mutex::new(Vec::new()),
            constructed: AtomicUsize::new(0),
        }
    }

    /// Mock with one account that fails every call.
    pub fn failing(kind: TransportErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Fail(kind),
            ..Self::new("")
        }
    }

    /// Replace the discoverable accounts.
    pub fn with_accounts(mut self, accounts: Vec<String>) -> Self {
        self.accounts = Ok(accounts);
        self
    }

    /// Make account discovery fail.
    pub fn with_broken_accounts(mut self, reason: &str) -> Self {
        self.accounts = Err(reason.to_string());
        self
    }

    pub fn calls(&self) -> Vec<PrimaryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn record_construction(&self) {
        self.constructed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn construction_count(&self) -> usize {
        self.constructed.load(Ordering::SeqCst)
    }

    fn record(&self, prompt: &str, system_prompt: Option<&str>, blocking: bool) {
        self.calls.lock().unwrap().push(PrimaryCall {
            prompt: prompt.to_string(),
            system_prompt: system_prompt.map(String::from),
            blocking,
        });
    }
}

#[async_trait]
impl PrimaryTransport for MockPrimary {
    fn name(&self) -> &'static str {
        "mock-primary"
    }

    fn accounts(&self) -> GuardianResult<Vec<String>> {
        self.accounts
            .clone()
            .map_err(|reason| BackendError::new(reason).into())
    }

    fn generate_sync(&self, prompt: &str, system_prompt: Option<&str>) -> GuardianResult<String> {
        self.record(prompt, system_prompt, true);
        self.behavior.run(self.name(), "generate_sync")
    }

    async fn generate(&self, prompt: &str, system_prompt: Option<&str>) -> GuardianResult<String> {
        self.record(prompt, system_prompt, false);
        self.behavior.run(self.name(), "generate")
    }
}

/// A recorded secondary call.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryCall {
    pub messages: Vec<ChatMessage>,
    pub blocking: bool,
}

/// Mock secondary transport.
#[derive(Debug)]
pub struct MockSecondary {
    behavior: MockBehavior,
    calls: Mutex<Vec<SecondaryCall>>,
    settings: Mutex<Option<SecondarySettings>>,
}

impl MockSecondary {
    /// Mock that replies with `text`.
    pub fn new(text: &str) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.to_string()),
            calls: Mutex::new(Vec::new()),
            settings: Mutex::new(None),
        }
    }

    /// Mock that fails every call.
    pub fn failing(kind: TransportErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Fail(kind),
            ..Self::new("")
        }
    }

    pub fn calls(&self) -> Vec<SecondaryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn record_settings(&self, settings: SecondarySettings) {
        *self.settings.lock().unwrap() = Some(settings);
    }

    /// Settings passed to the factory, if it ran.
    pub fn settings(&self) -> Option<SecondarySettings> {
        self.settings.lock().unwrap().clone()
    }

    fn record(&self, messages: &[ChatMessage], blocking: bool) {
        self.calls.lock().unwrap().push(SecondaryCall {
            messages: messages.to_vec(),
            blocking,
        });
    }
}

#[async_trait]
impl SecondaryTransport for MockSecondary {
    fn name(&self) -> &'static str {
        "mock-secondary"
    }

    fn invoke(&self, messages: &[ChatMessage]) -> GuardianResult<String> {
        self.record(messages, true);
        self.behavior.run(self.name(), "invoke")
    }

    async fn ainvoke(&self, messages: &[ChatMessage]) -> GuardianResult<String> {
        self.record(messages, false);
        self.behavior.run(self.name(), "ainvoke")
    }
}
