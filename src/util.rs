//! Shared utilities

use std::fmt;

/// A string wrapper that masks its contents in Debug/Display output.
/// Keeps the completion API key out of logs.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Access the raw secret value (for request headers)
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Empty or the literal "none" means no credential is sent.
    pub fn is_unset(&self) -> bool {
        self.0.is_empty() || self.0.eq_ignore_ascii_case("none")
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self(s)
    }
}
