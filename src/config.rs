//! Assembler Configuration
//!
//! Knobs that select between behaviors the historical form variants
//! disagreed on.

use crate::errors::{PromptError, PromptResult};
use serde::{Deserialize, Serialize};

/// How the examples field is cut into individual examples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExampleSplitStrategy {
    /// Blocks separated by one or more blank lines; internal newlines kept
    #[default]
    ByBlankLine,
    /// Every non-empty line is its own example
    ByLine,
}

/// Assembler configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssemblerConfig {
    /// Example splitting strategy
    pub example_split: ExampleSplitStrategy,
    /// Emit the medium reasoning-effort bullets instead of omitting them
    pub explicit_medium_effort: bool,
}

impl AssemblerConfig {
    /// Default configuration (blank-line examples, medium effort omitted)
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode from JSON; missing fields take their defaults
    pub fn from_json_str(input: &str) -> PromptResult<Self> {
        serde_json::from_str(input).map_err(PromptError::invalid_config)
    }

    /// Builder: set the example split strategy
    pub fn with_example_split(mut self, strategy: ExampleSplitStrategy) -> Self {
        self.example_split = strategy;
        self
    }

    /// Builder: render medium effort explicitly
    pub fn with_explicit_medium_effort(mut self, explicit: bool) -> Self {
        self.explicit_medium_effort = explicit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssemblerConfig::default();
        assert_eq!(config.example_split, ExampleSplitStrategy::ByBlankLine);
        assert!(!config.explicit_medium_effort);
    }

    #[test]
    fn test_from_json() {
        let config = AssemblerConfig::from_json_str(r#"{"exampleSplit": "byLine"}"#).unwrap();
        assert_eq!(config.example_split, ExampleSplitStrategy::ByLine);
        assert!(!config.explicit_medium_effort);

        let err = AssemblerConfig::from_json_str(r#"{"exampleSplit": "byWord"}"#).unwrap_err();
        assert!(err.to_string().contains("InvalidConfig"));
    }
}
