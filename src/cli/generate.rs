use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::llm::factory;
use crate::pipeline::generator::{GenerationResult, PromptGenerator, PromptSource};
use crate::task::TaskText;

#[derive(Debug, Default, Clone)]
pub struct GenerateOptions {
    pub config_path: Option<String>,
    pub provider_override: Option<String>,
    pub model_override: Option<String>,
    pub base_url_override: Option<String>,
    pub offline: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// Load config and apply CLI overrides.
pub fn resolve_config(opts: &GenerateOptions) -> Result<Config> {
    let mut config = Config::load_with_path(opts.config_path.clone())?;

    if let Some(ref provider) = opts.provider_override {
        info!("CLI override: provider = {}", provider);
        config.llm.provider = provider.clone();
    }
    if let Some(ref model) = opts.model_override {
        info!("CLI override: model = {}", model);
        config.llm.model = model.clone();
    }
    if let Some(ref base_url) = opts.base_url_override {
        info!("CLI override: base_url = {}", base_url);
        config.llm.base_url = Some(base_url.clone());
    }
    if opts.offline {
        info!("CLI override: completion API disabled");
        config.generation.use_llm = false;
    }

    Ok(config)
}

/// Build the generator. The credential is checked here, before any task is
/// processed.
pub fn build_generator(config: &Config, dry_run: bool) -> Result<PromptGenerator> {
    if !config.generation.use_llm {
        return Ok(PromptGenerator::offline());
    }
    let client = factory::create_client(&config.llm, dry_run)?;
    Ok(PromptGenerator::new(client))
}

pub fn format_result(result: &GenerationResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }
    Ok(result.prompt.clone())
}

pub async fn run(task: String, opts: GenerateOptions) -> Result<()> {
    let config = resolve_config(&opts)?;
    let generator = build_generator(&config, opts.dry_run)?;
    let task = TaskText::parse(&task, config.generation.max_task_chars)?;

    let result = generator.generate(&task).await;

    match (result.source, result.fallback) {
        (PromptSource::Model, _) => info!(
            "Prompt generated by {}",
            result.model.as_deref().unwrap_or("unknown model")
        ),
        (PromptSource::Template, true) => {
            warn!("Completion API unavailable; returned template prompt")
        }
        (PromptSource::Template, false) => info!("Prompt assembled from templates"),
    }

    println!("{}", format_result(&result, opts.json)?);
    Ok(())
}
