//! Configuration defaults and file loading

use anyhow::Result;
use std::fs;
use taskprompt::config::Config;
use tempfile::TempDir;

#[test]
fn test_config_defaults_target_openrouter() -> Result<()> {
    let config = Config::default();
    assert_eq!(config.llm.provider, "openai-compatible");
    assert_eq!(config.llm.get_base_url(), "https://openrouter.ai/api/v1");
    assert_eq!(config.llm.get_max_tokens(), 2000);
    assert_eq!(config.generation.max_task_chars, 1000);
    Ok(())
}

#[test]
fn test_config_load_returns_valid_config() -> Result<()> {
    let config = Config::load()?;
    assert!(!config.llm.provider.is_empty());
    assert!(config.generation.max_task_chars > 0);
    Ok(())
}

#[test]
fn test_config_full_file() -> Result<()> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("taskprompt.toml");
    fs::write(
        &path,
        r#"
[llm]
provider = "openai"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
max_tokens = 1500
temperature = 0.3
timeout_secs = 20

[generation]
max_task_chars = 500
use_llm = false
"#,
    )?;

    let config = Config::load_with_path(Some(path.to_string_lossy().to_string()))?;
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert_eq!(config.llm.get_max_tokens(), 1500);
    assert_eq!(config.llm.get_base_url(), "https://api.openai.com/v1");
    assert_eq!(config.llm.timeout_secs, 20);
    assert_eq!(config.generation.max_task_chars, 500);
    assert!(!config.generation.use_llm);
    Ok(())
}

#[test]
fn test_config_invalid_toml_with_explicit_path_fails() -> Result<()> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("broken.toml");
    fs::write(&path, "[llm\nprovider = ")?;
    assert!(Config::load_with_path(Some(path.to_string_lossy().to_string())).is_err());
    Ok(())
}
