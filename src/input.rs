//! Input Model
//!
//! The form state consumed by one assembly run: free-text fields, tone and
//! reasoning effort selections, option flags and the frontend builder
//! configuration.
//!
//! Field names serialize in camelCase so a [`FormSnapshot`](crate::snapshot::FormSnapshot)
//! stays a flat key-value map. Historical key names are mapped onto these
//! by [`LEGACY_KEYS`](crate::snapshot::LEGACY_KEYS) when a snapshot is restored.

use crate::errors::{PromptError, PromptResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tone values that mean "no tone instruction"
pub const DEFAULT_TONES: &[&str] = &["", "default", "neutral"];

/// Reasoning effort selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ReasoningEffort {
    /// Quick, concise answers
    Low,
    /// Balanced (default; omitted from the prompt)
    #[default]
    Medium,
    /// Deep, multi-angle analysis
    High,
}

impl ReasoningEffort {
    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningEffort::Low => "low",
            ReasoningEffort::Medium => "medium",
            ReasoningEffort::High => "high",
        }
    }

    /// Instruction bullets for this level
    pub fn instructions(&self) -> &'static [&'static str] {
        match self {
            ReasoningEffort::Low => &[
                "Provide a direct, concise response",
                "Focus on the most essential points",
                "Avoid lengthy explanations",
            ],
            ReasoningEffort::Medium => &[
                "Think through the problem step by step",
                "Provide clear reasoning for your conclusions",
                "Balance thoroughness with efficiency",
            ],
            ReasoningEffort::High => &[
                "Analyze the problem from multiple angles",
                "Consider alternative approaches and solutions",
                "Provide detailed reasoning and validation",
                "Double-check your work before responding",
            ],
        }
    }

    /// Whether this is the default level
    pub fn is_default(&self) -> bool {
        *self == ReasoningEffort::Medium
    }
}

impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasoningEffort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ReasoningEffort::Low),
            "medium" => Ok(ReasoningEffort::Medium),
            "high" => Ok(ReasoningEffort::High),
            other => Err(format!("Unknown reasoning effort '{}'", other)),
        }
    }
}

/// Unknown levels degrade to the default instead of failing a restore
impl From<String> for ReasoningEffort {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// Option toggles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptFlags {
    // Reasoning / process
    pub chain_of_thought: bool,
    pub self_review: bool,
    pub agentic_proactivity: bool,
    pub ask_clarify: bool,
    pub enforce_structure: bool,
    pub add_validation: bool,
    pub add_budget: bool,

    // Grounding
    pub allow_unknown: bool,
    pub restrict_docs: bool,
    pub cite_sources: bool,
    pub quote_first: bool,
    pub long_context_mode: bool,

    // Formatting
    pub use_xml: bool,
    pub use_xml_examples: bool,
    pub prefer_json: bool,
    pub no_markdown: bool,
    pub assistant_prefill: bool,

    // Code
    pub code_quality: bool,

    // Tooling
    pub parallel_tools: bool,
    pub cleanup_files: bool,

    // Frontend
    pub enable_frontend_builder: bool,
}

/// Preferred frontend technology, grouped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendStack {
    #[serde(rename = "stackFramework")]
    pub framework: Vec<String>,
    #[serde(rename = "stackStyling")]
    pub styling: Vec<String>,
    #[serde(rename = "stackIcons")]
    pub icons: Vec<String>,
    #[serde(rename = "stackMotion")]
    pub motion: Vec<String>,
    #[serde(rename = "stackFonts")]
    pub fonts: Vec<String>,
}

impl FrontendStack {
    /// Rendered `Label: a, b` lines for each non-empty group
    pub fn lines(&self) -> Vec<String> {
        [
            ("Frameworks", &self.framework),
            ("Styling/UI", &self.styling),
            ("Icons", &self.icons),
            ("Animation", &self.motion),
            ("Fonts", &self.fonts),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(label, items)| format!("{}: {}", label, items.join(", ")))
        .collect()
    }

    /// `Category: a, b` lines keyed by group name, as used by the
    /// requirements section
    pub fn category_lines(&self) -> Vec<String> {
        [
            ("Framework", &self.framework),
            ("Styling", &self.styling),
            ("Icons", &self.icons),
            ("Motion", &self.motion),
            ("Fonts", &self.fonts),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, items)| format!("{}: {}", category, items.join(", ")))
        .collect()
    }

    /// Whether no technology is selected
    pub fn is_empty(&self) -> bool {
        self.framework.is_empty()
            && self.styling.is_empty()
            && self.icons.is_empty()
            && self.motion.is_empty()
            && self.fonts.is_empty()
    }
}

/// Frontend builder configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    #[serde(rename = "feBrief")]
    pub brief: String,
    #[serde(rename = "feStyle")]
    pub style: String,
    #[serde(rename = "fePages")]
    pub pages: String,
    #[serde(rename = "feImage")]
    pub image: String,
    #[serde(rename = "feInteractions")]
    pub interactions: String,
    /// The reference image will be sent alongside the prompt
    #[serde(rename = "feEnableImageInput")]
    pub enable_image_input: bool,
    /// Adds the quality rubric bullet to the requirements section
    #[serde(rename = "feHiddenRubric")]
    pub hidden_rubric: bool,
    #[serde(rename = "feReasoningEffort")]
    pub reasoning_effort: ReasoningEffort,
    #[serde(flatten)]
    pub stack: FrontendStack,
}

/// Full set of user-supplied values for one assembly run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputRecord {
    pub system_prompt: String,
    pub user_instructions: String,
    pub context: String,
    pub examples: String,
    pub documents: String,
    pub variables: String,
    pub success_criteria: String,
    pub tone_style: String,
    pub reasoning_effort: ReasoningEffort,
    #[serde(flatten)]
    pub flags: PromptFlags,
    #[serde(flatten)]
    pub frontend: FrontendConfig,
}

impl InputRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the system prompt
    pub fn with_system_prompt(mut self, text: impl Into<String>) -> Self {
        self.system_prompt = text.into();
        self
    }

    /// Set the user instructions
    pub fn with_user_instructions(mut self, text: impl Into<String>) -> Self {
        self.user_instructions = text.into();
        self
    }

    /// Set the option flags
    pub fn with_flags(mut self, flags: PromptFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether there is anything to assemble
    pub fn has_content(&self) -> bool {
        !self.system_prompt.trim().is_empty() || !self.user_instructions.trim().is_empty()
    }

    /// Reject records with neither a system prompt nor user instructions
    pub fn validate(&self) -> PromptResult<()> {
        if self.has_content() {
            Ok(())
        } else {
            Err(PromptError::empty_input())
        }
    }

    /// Tone bullet, unless the tone is one of [`DEFAULT_TONES`]
    pub fn tone_instruction(&self) -> Option<String> {
        let tone = self.tone_style.trim();
        if DEFAULT_TONES.contains(&tone) {
            None
        } else {
            Some(format!("Use a {} tone in your response.", tone))
        }
    }
}
