use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::PromptError;
use crate::task::DEFAULT_MAX_TASK_CHARS;
use crate::util::SecretString;

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "openai", "openai-compatible" or "anthropic"
    pub provider: String,
    pub model: String,
    /// Environment variable holding the API key. "none" disables the key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,

    /// Optional: Override max_tokens for completion requests
    /// If not specified, uses provider-specific defaults:
    /// - anthropic: 4096
    /// - openai / openai-compatible: 2000
    #[serde(default)]
    pub max_tokens: Option<u32>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout for the completion call, in seconds. 0 disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_key_env() -> Option<String> {
    Some("OPENROUTER_API_KEY".to_string())
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_task_chars() -> usize {
    DEFAULT_MAX_TASK_CHARS
}

fn default_true() -> bool {
    true
}

impl LlmConfig {
    /// Get max_tokens value, using provider-specific default if not specified
    pub fn get_max_tokens(&self) -> u32 {
        if let Some(tokens) = self.max_tokens {
            return tokens;
        }

        match self.provider.as_str() {
            "anthropic" => 4096,
            _ => 2000,
        }
    }

    /// Base URL for OpenAI-style providers
    pub fn get_base_url(&self) -> String {
        if let Some(ref url) = self.base_url {
            return url.trim_end_matches('/').to_string();
        }

        match self.provider.as_str() {
            "openai" => OPENAI_BASE_URL.to_string(),
            _ => OPENROUTER_BASE_URL.to_string(),
        }
    }

    /// Read the API key from the configured environment variable.
    ///
    /// Returns `PromptError::MissingCredential` when the variable is unset or
    /// blank, or when no variable is configured. Only an explicit
    /// `api_key_env = "none"` yields an empty key for endpoints that need none.
    pub fn get_api_key(&self) -> Result<SecretString, PromptError> {
        match &self.api_key_env {
            Some(env_var) if env_var.eq_ignore_ascii_case("none") => {
                Ok(SecretString::new(String::new()))
            }
            Some(env_var) => match env::var(env_var) {
                Ok(value) if !value.trim().is_empty() => Ok(SecretString::new(value)),
                _ => Err(PromptError::MissingCredential(env_var.clone())),
            },
            None => Err(PromptError::MissingCredential("api_key_env".to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum task length in characters
    #[serde(default = "default_max_task_chars")]
    pub max_task_chars: usize,

    /// Call the completion API; when false only the local template is used
    #[serde(default = "default_true")]
    pub use_llm: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_task_chars: DEFAULT_MAX_TASK_CHARS,
            use_llm: true,
        }
    }
}

impl Config {
    /// Load config from the working directory or user config directory
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path));
        }

        if let Ok(config) = Self::load_from_path("taskprompt.toml") {
            debug!("Loaded config from ./taskprompt.toml");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("taskprompt").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                provider: "openai-compatible".to_string(),
                model: "openai/gpt-4o".to_string(),
                api_key_env: default_api_key_env(),
                base_url: Some(OPENROUTER_BASE_URL.to_string()),
                max_tokens: None,
                temperature: default_temperature(),
                timeout_secs: default_timeout_secs(),
            },
            generation: GenerationConfig::default(),
        }
    }
}
