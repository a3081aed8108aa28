//! All reply-generation functionality

pub mod client;
pub mod generator;
pub mod local;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::{GeminiClient, GenerationParams, RemoteModel};
pub use generator::{EMPTY_REPLY, ResponseGenerator};
pub use local::{ReplyCategory, classify, respond};
