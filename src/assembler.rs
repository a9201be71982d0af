//! Prompt Assembler
//!
//! Builds the final prompt from an [`InputRecord`]. The output has a
//! `# System Prompt` section (only when a system prompt was given) followed
//! by a `# User Instructions` section, and optionally an assistant response
//! preview.
//!
//! ## Section order
//!
//! System: prompt text, reasoning, grounding rules, code rules, tool
//! parallelism, file cleanup.
//!
//! User: instructions, context, examples, documents (with quote, restriction
//! and long-context notes), variables, success criteria, frontend
//! configuration, additional instruction bullets.
//!
//! Assembly is a pure function of the record, the configuration and the
//! catalog contents at call time.

use crate::catalog::{OptionCatalog, OptionLookup};
use crate::config::AssemblerConfig;
use crate::errors::PromptResult;
use crate::format::{bullets, format_examples, wrap_tag};
use crate::frontend::{has_configuration, render_configuration_block};
use crate::input::InputRecord;
use crate::options::Fragment;
use tracing::debug;

/// Header of the system section
pub const SYSTEM_HEADER: &str = "# System Prompt";

/// Header of the user section
pub const USER_HEADER: &str = "# User Instructions";

/// Header of the assistant response preview
pub const PREFILL_HEADER: &str = "**Assistant Response Preview:**";

/// Assembler bound to a catalog and a configuration
#[derive(Debug, Clone)]
pub struct PromptAssembler<C: OptionLookup = OptionCatalog> {
    catalog: C,
    config: AssemblerConfig,
}

impl PromptAssembler<OptionCatalog> {
    /// Assembler with an empty catalog (built-in wording only)
    pub fn builtin() -> Self {
        Self::new(OptionCatalog::empty())
    }
}

impl<C: OptionLookup> PromptAssembler<C> {
    /// Create an assembler with default configuration
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, AssemblerConfig::default())
    }

    /// Create an assembler with explicit configuration
    pub fn with_config(catalog: C, config: AssemblerConfig) -> Self {
        Self { catalog, config }
    }

    /// Catalog used for fragment wording
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Active configuration
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Assemble the prompt for `input`
    pub fn assemble(&self, input: &InputRecord) -> PromptResult<String> {
        assemble(input, &self.config, &self.catalog)
    }

    /// Resolve a single option name (for previews)
    pub fn resolve(&self, name: &str) -> String {
        self.catalog.resolve(name)
    }
}

/// Assemble the prompt for `input`.
///
/// Fails only when both the system prompt and user instructions are empty.
pub fn assemble<C: OptionLookup + ?Sized>(
    input: &InputRecord,
    config: &AssemblerConfig,
    catalog: &C,
) -> PromptResult<String> {
    input.validate()?;

    let mut prompt = String::new();

    if let Some(system) = build_system_section(input, catalog) {
        prompt.push_str(&format!("{}\n\n{}\n\n", SYSTEM_HEADER, system));
    }

    let bullet_items = collect_bullets(input, config, catalog);
    let user = build_user_section(input, config, catalog, &bullet_items);
    prompt.push_str(&format!("{}\n\n{}", USER_HEADER, user));

    if input.flags.assistant_prefill {
        let preview = catalog.resolve_fragment(Fragment::AssistantPrefill);
        prompt.push_str(&format!("\n\n---\n\n{}\n{}", PREFILL_HEADER, preview));
    }

    debug!(
        length = prompt.len(),
        bullets = bullet_items.len(),
        "Assembled prompt"
    );

    Ok(prompt)
}

// --- Sections ---

/// System section body, or `None` when no system prompt was given
fn build_system_section<C: OptionLookup + ?Sized>(
    input: &InputRecord,
    catalog: &C,
) -> Option<String> {
    let system_prompt = input.system_prompt.trim();
    if system_prompt.is_empty() {
        return None;
    }

    let flags = &input.flags;
    let mut section = system_prompt.to_string();

    if flags.chain_of_thought {
        let text = catalog.resolve_fragment(Fragment::ChainOfThought);
        section.push_str(&format!("\n\nInstructions for reasoning: {}", text));
    }

    if flags.allow_unknown || flags.restrict_docs {
        section.push_str("\n\nGrounding rules:");
        if flags.allow_unknown {
            section.push(' ');
            section.push_str(&catalog.resolve_fragment(Fragment::AllowUnknown));
        }
        if flags.restrict_docs {
            section.push(' ');
            section.push_str(&catalog.resolve_fragment(Fragment::RestrictDocsGrounding));
        }
    }

    let trailing = [
        (flags.code_quality, Fragment::CodeRules),
        (flags.parallel_tools, Fragment::ParallelTools),
        (flags.cleanup_files, Fragment::CleanupFiles),
    ];
    for (enabled, fragment) in trailing {
        if enabled {
            section.push_str("\n\n");
            section.push_str(&catalog.resolve_fragment(fragment));
        }
    }

    Some(section)
}

/// User section body (without its header)
fn build_user_section<C: OptionLookup + ?Sized>(
    input: &InputRecord,
    config: &AssemblerConfig,
    catalog: &C,
    bullet_items: &[String],
) -> String {
    let flags = &input.flags;
    let mut section = input.user_instructions.trim().to_string();

    let context = input.context.trim();
    if !context.is_empty() {
        let body = format!("Context:\n{}", context);
        section.push_str("\n\n");
        section.push_str(&wrap_tag("context", &body, flags.use_xml));
    }

    let examples = input.examples.trim();
    if !examples.is_empty() {
        let formatted = format_examples(examples, config.example_split, flags.use_xml_examples);
        let body = format!("Examples:\n{}", formatted);
        section.push_str("\n\n");
        section.push_str(&wrap_tag("examples", &body, flags.use_xml_examples));
    }

    let documents = input.documents.trim();
    if !documents.is_empty() {
        section.push_str(&render_documents(input, documents, catalog));
    }

    let variables = input.variables.trim();
    if !variables.is_empty() {
        section.push_str(&format!("\n\nVariables to use:\n{}", variables));
    }

    let success = input.success_criteria.trim();
    if !success.is_empty() {
        section.push_str(&format!("\n\nSuccess criteria:\n{}", success));
    }

    if flags.enable_frontend_builder && has_configuration(&input.frontend) {
        section.push_str("\n\n");
        section.push_str(&render_configuration_block(&input.frontend));
    }

    if !bullet_items.is_empty() {
        section.push_str(&format!("\n\nAdditional instructions:\n{}", bullets(bullet_items)));
    }

    section
}

/// Document references plus their per-flag notes
fn render_documents<C: OptionLookup + ?Sized>(
    input: &InputRecord,
    documents: &str,
    catalog: &C,
) -> String {
    let flags = &input.flags;
    let body = format!("Document References:\n{}", documents);
    let mut out = format!("\n\n{}", wrap_tag("documents", &body, flags.use_xml_examples));

    if flags.quote_first {
        let text = catalog.resolve_fragment(Fragment::QuoteFirst);
        out.push_str(&format!("\n\nINSTRUCTION: {}", text));
    }

    if flags.restrict_docs {
        let text = catalog.resolve_fragment(Fragment::RestrictDocsConstraint);
        out.push_str(&format!("\n\nCONSTRAINT: {} Do not use external knowledge.", text));
    }

    if flags.long_context_mode {
        let text = catalog.resolve_fragment(Fragment::LongContext);
        out.push_str(&format!("\n\nINSTRUCTION: {}", text));
    }

    out
}

/// Additional instruction bullets, in their fixed order
fn collect_bullets<C: OptionLookup + ?Sized>(
    input: &InputRecord,
    config: &AssemblerConfig,
    catalog: &C,
) -> Vec<String> {
    let flags = &input.flags;
    let mut items = Vec::new();

    if let Some(tone) = input.tone_instruction() {
        items.push(tone);
    }

    let effort = input.reasoning_effort;
    if !effort.is_default() || config.explicit_medium_effort {
        items.extend(effort.instructions().iter().map(|s| s.to_string()));
    }

    let toggles = [
        (flags.ask_clarify, Fragment::AskClarify),
        (flags.enforce_structure, Fragment::EnforceStructure),
        (flags.self_review, Fragment::SelfReview),
        (flags.add_validation, Fragment::AddValidation),
        (flags.add_budget, Fragment::AddBudget),
        (flags.cite_sources, Fragment::CiteSources),
        (flags.agentic_proactivity, Fragment::AgenticProactivity),
        (flags.prefer_json, Fragment::PreferJson),
        (flags.no_markdown, Fragment::NoMarkdown),
    ];
    for (enabled, fragment) in toggles {
        if enabled {
            items.push(catalog.resolve_fragment(fragment));
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{PromptFlags, ReasoningEffort};
    use pretty_assertions::assert_eq;

    fn builtin(input: &InputRecord) -> String {
        PromptAssembler::builtin().assemble(input).unwrap()
    }

    #[test]
    fn test_user_only() {
        let input = InputRecord::new().with_user_instructions("Do X");
        assert_eq!(builtin(&input), "# User Instructions\n\nDo X");
    }

    #[test]
    fn test_system_and_user() {
        let input = InputRecord::new()
            .with_system_prompt("You are a helper.")
            .with_user_instructions("Do X");
        assert_eq!(
            builtin(&input),
            "# System Prompt\n\nYou are a helper.\n\n# User Instructions\n\nDo X"
        );
    }

    #[test]
    fn test_system_only_keeps_empty_user_section() {
        let input = InputRecord::new().with_system_prompt("You are a helper.");
        assert_eq!(
            builtin(&input),
            "# System Prompt\n\nYou are a helper.\n\n# User Instructions\n\n"
        );
    }

    #[test]
    fn test_system_flags_ignored_without_system_prompt() {
        let input = InputRecord::new()
            .with_user_instructions("Do X")
            .with_flags(PromptFlags {
                chain_of_thought: true,
                parallel_tools: true,
                ..Default::default()
            });
        assert!(!builtin(&input).contains(SYSTEM_HEADER));
    }

    #[test]
    fn test_system_block_order() {
        let input = InputRecord::new()
            .with_system_prompt("Base")
            .with_user_instructions("Go")
            .with_flags(PromptFlags {
                chain_of_thought: true,
                allow_unknown: true,
                code_quality: true,
                parallel_tools: true,
                cleanup_files: true,
                ..Default::default()
            });
        let out = builtin(&input);
        let positions: Vec<usize> = [
            "Instructions for reasoning:",
            "Grounding rules:",
            "Code generation rules:",
            "Tool usage:",
            "File management:",
        ]
        .iter()
        .map(|needle| out.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_documents_notes() {
        let mut input = InputRecord::new().with_user_instructions("Summarize");
        input.documents = "doc.pdf".into();
        input.flags = PromptFlags {
            quote_first: true,
            restrict_docs: true,
            long_context_mode: true,
            ..Default::default()
        };
        let out = builtin(&input);
        let expected = format!(
            "Summarize\n\nDocument References:\ndoc.pdf\n\nINSTRUCTION: {}\n\nCONSTRAINT: {} Do not use external knowledge.\n\nINSTRUCTION: {}",
            Fragment::QuoteFirst.fallback(),
            Fragment::RestrictDocsConstraint.fallback(),
            Fragment::LongContext.fallback(),
        );
        assert!(out.ends_with(&expected), "{}", out);
    }

    #[test]
    fn test_document_notes_need_documents() {
        let input = InputRecord::new()
            .with_user_instructions("Summarize")
            .with_flags(PromptFlags {
                quote_first: true,
                long_context_mode: true,
                ..Default::default()
            });
        assert_eq!(builtin(&input), "# User Instructions\n\nSummarize");
    }

    #[test]
    fn test_bullet_order() {
        let mut input = InputRecord::new().with_user_instructions("Go");
        input.tone_style = "formal".into();
        input.reasoning_effort = ReasoningEffort::Low;
        input.flags = PromptFlags {
            ask_clarify: true,
            no_markdown: true,
            ..Default::default()
        };
        let out = builtin(&input);
        assert_eq!(
            out,
            "# User Instructions\n\nGo\n\nAdditional instructions:\n\
             \u{2022} Use a formal tone in your response.\n\
             \u{2022} Provide a direct, concise response\n\
             \u{2022} Focus on the most essential points\n\
             \u{2022} Avoid lengthy explanations\n\
             \u{2022} Ask clarifying questions if the request is ambiguous or lacks important details.\n\
             \u{2022} Do not use Markdown formatting. Use plain text with clear structure."
        );
    }

    #[test]
    fn test_explicit_medium_effort() {
        let input = InputRecord::new().with_user_instructions("Go");
        let config = AssemblerConfig::new().with_explicit_medium_effort(true);
        let out = PromptAssembler::with_config(OptionCatalog::empty(), config)
            .assemble(&input)
            .unwrap();
        assert!(out.contains("\u{2022} Think through the problem step by step"));
        assert_eq!(out.matches('\u{2022}').count(), 3);
    }

    #[test]
    fn test_frontend_block_requires_toggle() {
        let mut input = InputRecord::new().with_user_instructions("Build it");
        input.frontend.brief = "Portfolio".into();
        assert!(!builtin(&input).contains("FRONTEND CONFIGURATION"));

        input.flags.enable_frontend_builder = true;
        assert_eq!(
            builtin(&input),
            "# User Instructions\n\nBuild it\n\n---\nFRONTEND CONFIGURATION\nObjective: Portfolio\n"
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut input = InputRecord::new().with_user_instructions("  Do X \n");
        input.variables = "\n name=value \n".into();
        assert_eq!(
            builtin(&input),
            "# User Instructions\n\nDo X\n\nVariables to use:\nname=value"
        );
    }
}
