use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::classifier::{classify, Classification};
use crate::llm::client::LlmClient;
use crate::llm::prompts;
use crate::synthesizer::synthesize;
use crate::task::TaskText;

/// Which path produced the returned prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptSource {
    /// Generated by the completion API.
    Model,
    /// Assembled locally from templates.
    Template,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub prompt: String,
    pub classification: Classification,
    pub source: PromptSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// True when the completion call failed and the template was returned instead.
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Strip a markdown code fence wrapping the whole model output, if any.
/// Output containing several fenced blocks is left as is.
fn strip_markdown_fences(content: &str) -> String {
    let trimmed = content.trim();

    if trimmed.starts_with("```") && trimmed.ends_with("```") && trimmed.len() >= 6 {
        let inner = &trimmed[3..trimmed.len() - 3];
        // Drop an info string such as ```markdown
        let inner = match inner.split_once('\n') {
            Some((first, rest)) if !first.trim().contains(' ') => rest,
            _ => inner,
        };
        if !inner.contains("\n```") && !inner.trim_start().starts_with("```") {
            return inner.trim().to_string();
        }
    }

    trimmed.to_string()
}

/// Turns a task into a final prompt: classify, synthesize, then ask the
/// completion API to refine it. Without a client only the template is used.
pub struct PromptGenerator {
    client: Option<Box<dyn LlmClient>>,
}

impl PromptGenerator {
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Template-only generator; never touches the network.
    pub fn offline() -> Self {
        Self { client: None }
    }

    pub fn is_offline(&self) -> bool {
        self.client.is_none()
    }

    pub async fn generate(&self, task: &TaskText) -> GenerationResult {
        let classification = classify(task.as_str());
        let synthesized = synthesize(&classification);

        info!(
            "Task classified as {} ({} technologies, {})",
            classification.category,
            classification.technologies.len(),
            classification.complexity
        );

        let Some(client) = self.client.as_ref() else {
            return GenerationResult {
                prompt: synthesized,
                classification,
                source: PromptSource::Template,
                model: None,
                fallback: false,
                error: None,
            };
        };

        let system = prompts::system_prompt(classification.category);
        let user = prompts::user_message(task.as_str(), &synthesized);

        info!("Requesting completion from {}", client.model());
        let outcome = match client.complete(&system, &user).await {
            Ok(text) => {
                let text = strip_markdown_fences(&text);
                if text.is_empty() {
                    Err("Completion API returned an empty prompt".to_string())
                } else {
                    Ok(text)
                }
            }
            Err(e) => Err(format!("{:#}", e)),
        };

        match outcome {
            Ok(prompt) => GenerationResult {
                prompt,
                classification,
                source: PromptSource::Model,
                model: Some(client.model().to_string()),
                fallback: false,
                error: None,
            },
            Err(error) => {
                warn!("Completion failed, using template prompt: {}", error);
                GenerationResult {
                    prompt: synthesized,
                    classification,
                    source: PromptSource::Template,
                    model: None,
                    fallback: true,
                    error: Some(error),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::MockLlmClient;
    use crate::task::DEFAULT_MAX_TASK_CHARS;

    fn task(s: &str) -> TaskText {
        TaskText::parse(s, DEFAULT_MAX_TASK_CHARS).unwrap()
    }

    #[test]
    fn test_strip_markdown_fences() {
        assert_eq!(strip_markdown_fences("```markdown\nHello\n```"), "Hello");
        assert_eq!(strip_markdown_fences("```\nHello\n```"), "Hello");
        assert_eq!(strip_markdown_fences("  Hello  "), "Hello");
        assert_eq!(strip_markdown_fences("```"), "```");
    }

    #[test]
    fn test_strip_markdown_fences_keeps_multiple_blocks() {
        let reply = "```js\nconst a = 1;\n```\nBuild the app described above.\n```css\nbody {}\n```";
        assert_eq!(strip_markdown_fences(reply), reply);
    }

    #[tokio::test]
    async fn test_completion_with_several_code_blocks_is_returned_intact() {
        let reply = "```js\nconst a = 1;\n```\nBuild the app.\n```css\nbody {}\n```";
        let generator = PromptGenerator::new(Box::new(MockLlmClient::with_response(reply)));
        let result = generator.generate(&task("a react page")).await;
        assert_eq!(result.source, PromptSource::Model);
        assert_eq!(result.prompt, reply);
    }

    #[tokio::test]
    async fn test_offline_uses_template_without_fallback() {
        let generator = PromptGenerator::offline();
        assert!(generator.is_offline());

        let t = task("build a rest api with express");
        let result = generator.generate(&t).await;
        assert_eq!(result.source, PromptSource::Template);
        assert!(!result.fallback);
        assert!(result.error.is_none());
        assert_eq!(result.prompt, synthesize(&classify(t.as_str())));
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let generator =
            PromptGenerator::new(Box::new(MockLlmClient::with_response("```\nRefined\n```")));
        let result = generator.generate(&task("a snake game")).await;
        assert_eq!(result.prompt, "Refined");
        assert_eq!(result.source, PromptSource::Model);
        assert_eq!(result.model.as_deref(), Some("mock"));
        assert!(!result.fallback);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_template() {
        let generator = PromptGenerator::new(Box::new(MockLlmClient::failing("timeout")));
        let t = task("a login page with jwt");
        let result = generator.generate(&t).await;
        assert!(result.fallback);
        assert_eq!(result.source, PromptSource::Template);
        assert_eq!(result.error.as_deref(), Some("timeout"));
        assert_eq!(result.prompt, synthesize(&classify(t.as_str())));
    }

    #[tokio::test]
    async fn test_blank_completion_falls_back() {
        let generator = PromptGenerator::new(Box::new(MockLlmClient::with_response("   \n ")));
        let result = generator.generate(&task("a blog")).await;
        assert!(result.fallback);
        assert!(result.error.unwrap().contains("empty prompt"));
    }

    #[tokio::test]
    async fn test_result_serializes_camel_case() {
        let generator = PromptGenerator::offline();
        let result = generator.generate(&task("a react dashboard")).await;
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["source"], "template");
        assert_eq!(json["fallback"], false);
        assert_eq!(json["classification"]["category"], "frontend");
        assert_eq!(json["classification"]["originalTask"], "a react dashboard");
        assert!(json.get("error").is_none());
    }
}
