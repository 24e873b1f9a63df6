use anyhow::Result;

use crate::config::Config;

use crate::synthesizer::SynthesizedPrompt;
use crate::task::TaskText;

/// Render the classification and template prompt for a task, without any
/// network access.
pub fn render(task: &str, max_chars: usize, json: bool) -> Result<String> {
    let task = TaskText::parse(task, max_chars)?;
    let synthesized = SynthesizedPrompt::from_task(task.as_str());

    if json {
        return Ok(serde_json::to_string_pretty(&synthesized)?);
    }

    let c = &synthesized.classification;
    let technologies = if c.technologies.is_empty() {
        "-".to_string()
    } else {
        c.technologies
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    Ok(format!(
        "category:     {}\ntechnologies: {}\ncomplexity:   {}\n\n{}",
        c.category, technologies, c.complexity, synthesized.prompt
    ))
}

/// Classify using the same task length limit as `generate`.
pub fn run(task: String, config_path: Option<String>, json: bool) -> Result<()> {
    let config = Config::load_with_path(config_path)?;
    println!(
        "{}",
        render(&task, config.generation.max_task_chars, json)?
    );
    Ok(())
}
