//! Prompt Optimizer Error Types
//!
//! Unified error handling across assembly, catalog loading, configuration
//! and snapshot persistence.

use std::fmt;
use thiserror::Error;

/// Error kind categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptErrorKind {
    /// Required text is missing: neither a system prompt nor user
    /// instructions, or no brief for the standalone frontend prompt
    EmptyInput,
    /// Catalog resource could not be read
    CatalogLoad,
    /// Catalog resource is not valid JSON or has the wrong shape
    CatalogFormat,
    /// Snapshot store could not be read or written
    Persistence,
    /// Assembler configuration could not be decoded
    InvalidConfig,
}

impl fmt::Display for PromptErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptErrorKind::EmptyInput => write!(f, "EmptyInput"),
            PromptErrorKind::CatalogLoad => write!(f, "CatalogLoad"),
            PromptErrorKind::CatalogFormat => write!(f, "CatalogFormat"),
            PromptErrorKind::Persistence => write!(f, "Persistence"),
            PromptErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Prompt optimizer error with context
#[derive(Debug, Clone, Error)]
#[error("[{kind}] {message}")]
pub struct PromptError {
    /// Error category
    pub kind: PromptErrorKind,
    /// Human-readable message
    pub message: String,
}

impl PromptError {
    /// Create a new error
    pub fn new(kind: PromptErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    /// Both system prompt and user instructions are empty
    pub fn empty_input() -> Self {
        Self::new(
            PromptErrorKind::EmptyInput,
            "Add either a System Prompt or User Instructions to continue.",
        )
    }

    /// Frontend brief missing for the standalone frontend prompt
    pub fn empty_brief() -> Self {
        Self::new(PromptErrorKind::EmptyInput, "Add a brief first.")
    }

    /// Catalog source could not be read
    pub fn catalog_load(source: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            PromptErrorKind::CatalogLoad,
            format!("Could not read option catalog '{}': {}", source, reason),
        )
    }

    /// Catalog source is malformed
    pub fn catalog_format(reason: impl fmt::Display) -> Self {
        Self::new(
            PromptErrorKind::CatalogFormat,
            format!("Malformed option catalog: {}", reason),
        )
    }

    /// Snapshot store failure
    pub fn persistence(action: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            PromptErrorKind::Persistence,
            format!("Could not {} form snapshot: {}", action, reason),
        )
    }

    /// Invalid assembler configuration
    pub fn invalid_config(reason: impl fmt::Display) -> Self {
        Self::new(
            PromptErrorKind::InvalidConfig,
            format!("Invalid assembler configuration: {}", reason),
        )
    }

    /// Whether this is the validation failure a UI should show to the user
    pub fn is_validation(&self) -> bool {
        self.kind == PromptErrorKind::EmptyInput
    }
}

/// Result type alias for prompt optimizer operations
pub type PromptResult<T> = Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PromptError::empty_input();
        assert!(err.to_string().contains("EmptyInput"));
        assert!(err.to_string().contains("User Instructions"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_catalog_errors_are_not_validation() {
        let err = PromptError::catalog_load("prompt_options.json", "not found");
        assert_eq!(err.kind, PromptErrorKind::CatalogLoad);
        assert!(err.to_string().contains("prompt_options.json"));
        assert!(!err.is_validation());
    }
}
