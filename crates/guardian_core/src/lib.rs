//! Core data types for the Guardian AI client.
//!
//! This crate provides the conversation and request types shared by the
//! normalizer, the transports and the generation facade.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod conversation;
mod message;
mod reasoning;
mod request;
mod role;

pub use conversation::ConversationMessage;
pub use message::{ChatMessage, Turn};
pub use reasoning::ReasoningResult;
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use role::Role;
