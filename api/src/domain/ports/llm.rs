//! Completion client port trait
//!
//! Defines the interface for the text-generation collaborator used by the
//! license resolver. The resolver treats every error from this port as a
//! soft failure and degrades to its deterministic fallback.

use async_trait::async_trait;

use crate::error::LlmError;

/// A chat completion request: one system instruction, one user message,
/// and the sampling parameters the caller wants
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: 0.3,
            max_tokens: 1000,
        }
    }
}

/// Port trait for chat-completion APIs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run one completion and return the assistant text
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError>;
}
