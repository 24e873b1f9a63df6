//! taskprompt - Turn short coding-task descriptions into detailed prompts
//!
//! Classifies a task by keyword matching (category, technologies, complexity),
//! assembles a deterministic template prompt from the classification, and
//! optionally asks a chat-completion API to refine it, falling back to the
//! template when the API is unavailable.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod synthesizer;
pub mod task;
pub mod taxonomy;
pub mod util;

pub use classifier::{classify, Classification};
pub use error::PromptError;
pub use pipeline::generator::{GenerationResult, PromptGenerator, PromptSource};
pub use synthesizer::{synthesize, SynthesizedPrompt};
pub use task::TaskText;
pub use taxonomy::{Category, Complexity, Technology};
