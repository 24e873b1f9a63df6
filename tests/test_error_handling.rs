// Boundary validation and configuration failures
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;
use taskprompt::config::Config;
use taskprompt::llm::factory;
use taskprompt::{classify, synthesize, PromptError, TaskText};

#[test]
fn test_empty_task_rejected() {
    assert_eq!(TaskText::parse("", 1000), Err(PromptError::EmptyTask));
    assert_eq!(TaskText::parse("  \n\t", 1000), Err(PromptError::EmptyTask));
}

#[test]
fn test_task_over_cap_rejected() {
    let raw = "x".repeat(1001);
    let err = TaskText::parse(&raw, 1000).unwrap_err();
    assert_eq!(err, PromptError::TaskTooLong { len: 1001, max: 1000 });
    assert!(!err.is_config_error());
}

#[test]
#[serial]
fn test_missing_credential_is_distinct_config_error() {
    env::remove_var("TASKPROMPT_IT_MISSING_KEY");
    let mut config = Config::default();
    config.llm.api_key_env = Some("TASKPROMPT_IT_MISSING_KEY".to_string());

    let err = factory::create_client(&config.llm, false).err().unwrap();
    let prompt_err = err.downcast_ref::<PromptError>().unwrap();
    assert!(prompt_err.is_config_error());
    assert_eq!(
        prompt_err,
        &PromptError::MissingCredential("TASKPROMPT_IT_MISSING_KEY".to_string())
    );
}

#[test]
#[serial]
fn test_core_works_without_credential() {
    env::remove_var("TASKPROMPT_IT_MISSING_KEY");
    let prompt = synthesize(&classify("a REST API"));
    assert!(prompt.starts_with("a REST API"));
}

#[test]
fn test_unknown_provider() {
    let mut config = Config::default();
    config.llm.provider = "carrier-pigeon".to_string();
    config.llm.api_key_env = Some("none".to_string());
    let err = factory::create_client(&config.llm, false).err().unwrap();
    assert!(err.to_string().contains("Unknown LLM provider"));
}

#[test]
#[serial]
fn test_config_without_api_key_env_requires_openrouter_key() {
    env::remove_var("OPENROUTER_API_KEY");
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[llm]\nprovider = \"openai-compatible\"\nmodel = \"openai/gpt-4o\""
    )
    .unwrap();

    let config = Config::load_with_path(Some(file.path().to_string_lossy().to_string())).unwrap();
    let err = factory::create_client(&config.llm, false).err().unwrap();
    assert_eq!(
        err.downcast_ref::<PromptError>(),
        Some(&PromptError::MissingCredential("OPENROUTER_API_KEY".to_string()))
    );
}
