//! Validation error accumulation
//!
//! Predicates report configuration problems into a [`Notification`]
//! instead of failing fast, so a pipeline can validate every predicate it
//! was configured with and present all problems at once.

use serde::{Deserialize, Serialize};

/// Accumulator of human-readable validation errors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<String>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error message
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the exact message has been recorded
    pub fn includes_error(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e == message)
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
