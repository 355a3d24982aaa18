//! Gemini API secondary transport.
//!
//! Calls `v1beta/models/<model>:generateContent` authenticated with an API key.
//! System messages are folded into the next human turn.

mod conversion;
mod transport;

pub use transport::{DEFAULT_BASE_URL, GeminiApiTransport};
