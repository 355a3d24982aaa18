//! Antigravity primary transport.
//!
//! Calls the Cloud Code `v1internal:generateContent` endpoint with the bearer
//! token of a locally stored account. Accounts are read from a JSON file:
//! `$ANTIGRAVITY_ACCOUNTS_PATH` if set, else `<config dir>/antigravity/accounts.json`.
//!
//! The file holds either a list of accounts or `{"accounts": [...]}`:
//!
//! ```json
//! {"accounts": [{"email": "me@example.com", "access_token": "ya29...", "project_id": "my-proj"}]}
//! ```
//!
//! Tokens are used as found. Obtaining and refreshing them is left to the
//! tool that writes the file.

mod accounts;
mod transport;

pub use accounts::{ACCOUNTS_PATH_ENV, Account, AccountStore};
pub use transport::{AntigravityTransport, DEFAULT_ENDPOINT};
