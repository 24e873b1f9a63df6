use anyhow::Result;
use tracing::debug;

use super::client::{LlmClient, MockLlmClient};
use super::client_impl::{AnthropicClient, OpenAIClient};
use crate::config::LlmConfig;
use crate::error::PromptError;

/// Create a completion client from configuration.
///
/// The credential is resolved here, once, so a missing key surfaces as
/// `PromptError::MissingCredential` before any request is processed.
pub fn create_client(llm_config: &LlmConfig, dry_run: bool) -> Result<Box<dyn LlmClient>> {
    if dry_run {
        return Ok(Box::new(MockLlmClient::new()));
    }

    let api_key = llm_config.get_api_key()?;
    let max_tokens = llm_config.get_max_tokens();

    debug!(
        "Creating {} client for model {}",
        llm_config.provider, llm_config.model
    );

    match llm_config.provider.as_str() {
        "openai" | "openai-compatible" | "openrouter" => Ok(Box::new(
            OpenAIClient::with_base_url(
                api_key,
                llm_config.model.clone(),
                llm_config.get_base_url(),
                max_tokens,
                llm_config.timeout_secs,
            )?
            .with_temperature(llm_config.temperature),
        )),

        "anthropic" => {
            let client = match llm_config.base_url {
                Some(ref base_url) => AnthropicClient::with_base_url(
                    api_key,
                    llm_config.model.clone(),
                    base_url.clone(),
                    max_tokens,
                    llm_config.timeout_secs,
                )?,
                None => AnthropicClient::new(
                    api_key,
                    llm_config.model.clone(),
                    max_tokens,
                    llm_config.timeout_secs,
                )?,
            };
            Ok(Box::new(client.with_temperature(llm_config.temperature)))
        }

        unknown => Err(PromptError::UnknownProvider(unknown.to_string()).into()),
    }
}
