use anyhow::{bail, Result};
use async_trait::async_trait;

/// A chat-completion collaborator: one system message, one user message,
/// one generated reply.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;

    /// Model identifier reported alongside generated prompts.
    fn model(&self) -> &str;
}

/// Offline stand-in for `--dry-run` and tests.
pub struct MockLlmClient {
    response: Result<String, String>,
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            response: Ok(String::new()),
        }
    }

    /// Always reply with `response`.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
        }
    }

    /// Always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _system: &str, user: &str) -> Result<String> {
        match &self.response {
            // Default mock echoes the user message so dry runs show what would be sent
            Ok(text) if text.is_empty() => Ok(format!("[mock completion]\n\n{}", user)),
            Ok(text) => Ok(text.clone()),
            Err(message) => bail!("{}", message),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
