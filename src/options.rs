//! Fragment Table
//!
//! Every instructional fragment the assembler can emit, together with the
//! catalog option name(s) that may override its wording and the built-in
//! fallback text used when the catalog has nothing for it.
//!
//! Catalog names are the human-readable labels used as keys in
//! `prompt_options.json`. Two fragments may share one catalog name when the
//! same option is rendered in two places with different fallback wording
//! (see [`Fragment::RestrictDocsGrounding`] and
//! [`Fragment::RestrictDocsConstraint`]).

/// Catalog option names known to the assembler
pub static OPTION_NAMES: &[&str] = &[
    // Reasoning / process
    "Include Chain of Thought / Thinking",
    "Use Hidden Self-Review Rubric",
    "Encourage Agentic Proactivity",
    "Ask clarifying questions if needed",
    "Add validation and acceptance criteria",
    "Add tool/step budget hints",
    // Grounding
    "Allow \"I don't know\" answers",
    "Restrict to provided documents",
    "Ask to cite sources when relevant",
    "Require citations / claim verification",
    "Extract supporting quotes first",
    "Optimize for Long Context",
    // Code and tooling
    "Include general code editing rules",
    "Encourage parallel tool calling",
    "Ask to clean up temp files",
    // Formatting
    "Prefer JSON output",
    "Forbid Markdown in output",
    "Show Assistant Prefill skeleton",
];

/// A conditionally emitted block of instructional text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// System section: reasoning instructions
    ChainOfThought,
    /// System section: grounding sentence allowing "I don't know"
    AllowUnknown,
    /// System section: grounding sentence restricting to documents
    RestrictDocsGrounding,
    /// System section: code generation rules
    CodeRules,
    /// System section: tool parallelism note
    ParallelTools,
    /// System section: file cleanup note
    CleanupFiles,
    /// Documents: quote extraction instruction
    QuoteFirst,
    /// Documents: restriction constraint
    RestrictDocsConstraint,
    /// Documents: long-context ordering instruction
    LongContext,
    /// Bullet: ask clarifying questions
    AskClarify,
    /// Bullet: follow the output structure
    EnforceStructure,
    /// Bullet: hidden self-review rubric
    SelfReview,
    /// Bullet: validation and acceptance criteria
    AddValidation,
    /// Bullet: tool/step budget hints
    AddBudget,
    /// Bullet: cite sources
    CiteSources,
    /// Bullet: agentic proactivity
    AgenticProactivity,
    /// Bullet: prefer JSON output
    PreferJson,
    /// Bullet: forbid Markdown
    NoMarkdown,
    /// Assistant response preview text
    AssistantPrefill,
}

impl Fragment {
    /// All fragments, in the order the assembler may request them
    pub const ALL: &'static [Fragment] = &[
        Fragment::ChainOfThought,
        Fragment::AllowUnknown,
        Fragment::RestrictDocsGrounding,
        Fragment::CodeRules,
        Fragment::ParallelTools,
        Fragment::CleanupFiles,
        Fragment::QuoteFirst,
        Fragment::RestrictDocsConstraint,
        Fragment::LongContext,
        Fragment::AskClarify,
        Fragment::EnforceStructure,
        Fragment::SelfReview,
        Fragment::AddValidation,
        Fragment::AddBudget,
        Fragment::CiteSources,
        Fragment::AgenticProactivity,
        Fragment::PreferJson,
        Fragment::NoMarkdown,
        Fragment::AssistantPrefill,
    ];

    /// Catalog names consulted for this fragment, in priority order.
    ///
    /// An empty slice means the fragment has no centralized wording and
    /// always renders its fallback.
    pub fn catalog_names(&self) -> &'static [&'static str] {
        match self {
            Fragment::ChainOfThought => &["Include Chain of Thought / Thinking"],
            Fragment::AllowUnknown => &["Allow \"I don't know\" answers"],
            Fragment::RestrictDocsGrounding | Fragment::RestrictDocsConstraint => {
                &["Restrict to provided documents"]
            }
            Fragment::CodeRules => &["Include general code editing rules"],
            Fragment::ParallelTools => &["Encourage parallel tool calling"],
            Fragment::CleanupFiles => &["Ask to clean up temp files"],
            Fragment::QuoteFirst => &["Extract supporting quotes first"],
            Fragment::LongContext => &["Optimize for Long Context"],
            Fragment::AskClarify => &["Ask clarifying questions if needed"],
            Fragment::EnforceStructure => &[],
            Fragment::SelfReview => &["Use Hidden Self-Review Rubric"],
            Fragment::AddValidation => &["Add validation and acceptance criteria"],
            Fragment::AddBudget => &["Add tool/step budget hints"],
            Fragment::CiteSources => &[
                "Ask to cite sources when relevant",
                "Require citations / claim verification",
            ],
            Fragment::AgenticProactivity => &["Encourage Agentic Proactivity"],
            Fragment::PreferJson => &["Prefer JSON output"],
            Fragment::NoMarkdown => &["Forbid Markdown in output"],
            Fragment::AssistantPrefill => &["Show Assistant Prefill skeleton"],
        }
    }

    /// Built-in wording used when the catalog has no entry
    pub fn fallback(&self) -> &'static str {
        match self {
            Fragment::ChainOfThought => {
                "Think step by step. Break down complex problems into smaller components and explain your reasoning process clearly."
            }
            Fragment::AllowUnknown => "You can say \"I don't know\" when uncertain.",
            Fragment::RestrictDocsGrounding => "Base your response only on the provided documents.",
            Fragment::CodeRules => {
                "Code generation rules:\n\u{2022} Use clear, readable code with appropriate comments\n\u{2022} Follow best practices for the programming language\n\u{2022} Include error handling where appropriate\n\u{2022} Write modular, reusable code"
            }
            Fragment::ParallelTools => {
                "Tool usage: When multiple tools can be used simultaneously, call them in parallel to improve efficiency."
            }
            Fragment::CleanupFiles => {
                "File management: Clean up temporary files and maintain organized project structure."
            }
            Fragment::QuoteFirst => {
                "When using information from the reference documents, extract and include direct quotes first, then provide your analysis."
            }
            Fragment::RestrictDocsConstraint => {
                "Base your response only on the information provided in the reference documents above."
            }
            Fragment::LongContext => {
                "Optimize ordering of large documents (place most relevant or larger documents first) and use long-context strategies to preserve important references."
            }
            Fragment::AskClarify => {
                "Ask clarifying questions if the request is ambiguous or lacks important details."
            }
            Fragment::EnforceStructure => "Follow the specified output structure precisely.",
            Fragment::SelfReview => "Review your response against quality criteria before finalizing.",
            Fragment::AddValidation => {
                "Include validation steps and acceptance criteria to verify the solution."
            }
            Fragment::AddBudget => {
                "Consider tool/step budgets and keep solutions within provided resource limits."
            }
            Fragment::CiteSources => "Cite sources and provide references for factual claims.",
            Fragment::AgenticProactivity => {
                "Be proactive and thorough. Continue working until the task is fully resolved."
            }
            Fragment::PreferJson => "Structure your response as valid JSON when appropriate.",
            Fragment::NoMarkdown => {
                "Do not use Markdown formatting. Use plain text with clear structure."
            }
            Fragment::AssistantPrefill => {
                "I'll help you with this task. Let me break it down and provide a comprehensive response..."
            }
        }
    }

    /// First fragment that consults the given catalog name
    pub fn for_option_name(name: &str) -> Option<Fragment> {
        Fragment::ALL
            .iter()
            .copied()
            .find(|f| f.catalog_names().contains(&name))
    }
}

/// Fallback wording registered for a catalog option name, if any
pub fn fallback_for(name: &str) -> Option<&'static str> {
    Fragment::for_option_name(name).map(|f| f.fallback())
}
