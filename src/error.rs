use thiserror::Error;

/// Boundary and configuration failures.
///
/// Completion API failures are not represented here: they never reach the
/// caller as errors, the generator falls back to the synthesized prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Task description is required")]
    EmptyTask,

    #[error("Task description is too long: {len} characters (max {max})")]
    TaskTooLong { len: usize, max: usize },

    #[error("API key not found in environment variable: {0}")]
    MissingCredential(String),

    #[error("Unknown LLM provider: {0}")]
    UnknownProvider(String),
}

impl PromptError {
    /// True for errors caused by configuration rather than user input.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PromptError::MissingCredential(_) | PromptError::UnknownProvider(_)
        )
    }
}
