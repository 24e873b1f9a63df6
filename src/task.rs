use std::fmt;

use crate::error::PromptError;

pub const DEFAULT_MAX_TASK_CHARS: usize = 1000;

/// A validated task description: trimmed, non-empty and within the length cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskText(String);

impl TaskText {
    /// Validate raw input. Surrounding whitespace is removed; the cap counts
    /// characters, not bytes.
    pub fn parse(raw: &str, max_chars: usize) -> Result<Self, PromptError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PromptError::EmptyTask);
        }

        let len = trimmed.chars().count();
        if len > max_chars {
            return Err(PromptError::TaskTooLong {
                len,
                max: max_chars,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
