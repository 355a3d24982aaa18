//! Account discovery.

use derive_getters::Getters;
use guardian_error::{BackendError, GuardianResult, JsonError};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Environment variable overriding the account file location.
pub const ACCOUNTS_PATH_ENV: &str = "ANTIGRAVITY_ACCOUNTS_PATH";

/// A stored account.
#[derive(Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct Account {
    /// Account email, used as its label
    #[serde(default)]
    email: Option<String>,
    /// OAuth access token
    #[serde(alias = "accessToken", default)]
    access_token: String,
    /// Cloud project bound to the account
    #[serde(alias = "projectId", default)]
    project_id: Option<String>,
    /// Accounts can be switched off without deleting them
    #[serde(default)]
    disabled: bool,
}

impl Account {
    /// Create an enabled account.
    pub fn new(
        email: Option<String>,
        access_token: impl Into<String>,
        project_id: Option<String>,
    ) -> Self {
        Self {
            email,
            access_token: access_token.into(),
            project_id,
            disabled: false,
        }
    }

    /// Whether the account can be used for calls.
    pub fn is_usable(&self) -> bool {
        !self.disabled && !self.access_token.trim().is_empty()
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        self.email.as_deref().unwrap_or("unnamed account")
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("disabled", &self.disabled)
            .finish()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AccountFile {
    Wrapped { accounts: Vec<Account> },
    List(Vec<Account>),
}

/// Location of the account file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// Store reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location, if one can be determined.
    pub fn discover() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    /// `$ANTIGRAVITY_ACCOUNTS_PATH`, else `<config dir>/antigravity/accounts.json`.
    pub fn default_path() -> Option<PathBuf> {
        match std::env::var_os(ACCOUNTS_PATH_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("antigravity").join("accounts.json")),
        }
    }

    /// Path of the account file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Usable accounts, in file order.
    ///
    /// A missing file yields no accounts.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> GuardianResult<Vec<Account>> {
        if !self.path.exists() {
            debug!("Account file not found");
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            BackendError::new(format!(
                "Failed to read account file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let file: AccountFile = serde_json::from_str(&raw).map_err(|e| {
            JsonError::new(self.path.display().to_string(), e.to_string())
        })?;

        let accounts = match file {
            AccountFile::Wrapped { accounts } | AccountFile::List(accounts) => accounts,
        };
        let total = accounts.len();
        let usable: Vec<Account> = accounts.into_iter().filter(Account::is_usable).collect();
        debug!(total, usable = usable.len(), "Accounts loaded");
        Ok(usable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store_with(contents: &str) -> (tempfile::NamedTempFile, AccountStore) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let store = AccountStore::new(file.path());
        (file, store)
    }

    #[test]
    fn test_missing_file_has_no_accounts() {
        let store = AccountStore::new("/nonexistent/antigravity/accounts.json");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_wrapped_file() {
        let (_file, store) = store_with(
            r#"{"accounts": [
                {"email": "a@example.com", "access_token": "tok-a", "project_id": "p-a"},
                {"email": "b@example.com", "accessToken": "tok-b", "disabled": true},
                {"email": "c@example.com", "access_token": ""}
            ]}"#,
        );
        let accounts = store.load().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].label(), "a@example.com");
        assert_eq!(accounts[0].project_id().as_deref(), Some("p-a"));
    }

    #[test]
    fn test_list_file() {
        let (_file, store) = store_with(r#"[{"accessToken": "tok", "projectId": "p"}]"#);
        let accounts = store.load().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].label(), "unnamed account");
        assert_eq!(accounts[0].access_token(), "tok");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let (file, store) = store_with("not json");
        let err = store.load().unwrap_err();
        match err.kind() {
            guardian_error::GuardianErrorKind::Json(json) => {
                assert_eq!(json.document, file.path().display().to_string());
            }
            other => panic!("expected a JSON error, got {other}"),
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let account = Account::new(None, "secret-token", None);
        assert!(!format!("{:?}", account).contains("secret-token"));
    }
}
