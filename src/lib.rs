//! # Prompt Optimizer
//!
//! Deterministic assembly of large instructional prompts from form fields
//! and option toggles.
//!
//! A caller fills an [`InputRecord`] (free text, tone, reasoning effort and
//! about two dozen flags), and the [`PromptAssembler`] turns it into a single
//! string with a `# System Prompt` and a `# User Instructions` section. The
//! wording of each conditional fragment comes from an [`OptionCatalog`]
//! loaded from JSON, with built-in fallback text for anything the catalog
//! lacks.
//!
//! ## Core APIs
//!
//! ### Assemble a prompt
//!
//! ```rust
//! use prompt_optimizer::{InputRecord, PromptAssembler, PromptFlags};
//!
//! let input = InputRecord::new()
//!     .with_system_prompt("You are a careful reviewer.")
//!     .with_user_instructions("Review the attached diff.")
//!     .with_flags(PromptFlags {
//!         chain_of_thought: true,
//!         no_markdown: true,
//!         ..Default::default()
//!     });
//!
//! let prompt = PromptAssembler::builtin().assemble(&input).unwrap();
//! assert!(prompt.starts_with("# System Prompt\n\nYou are a careful reviewer."));
//! assert!(prompt.contains("Instructions for reasoning: "));
//! assert!(prompt.contains("\n\nAdditional instructions:\n\u{2022} Do not use Markdown"));
//! ```
//!
//! ### Empty input is refused
//!
//! ```rust
//! use prompt_optimizer::{assemble, AssemblerConfig, InputRecord, OptionCatalog};
//!
//! let err = assemble(&InputRecord::new(), &AssemblerConfig::default(), &OptionCatalog::empty())
//!     .unwrap_err();
//! assert!(err.is_validation());
//! ```
//!
//! ## Option Catalog
//!
//! The catalog accepts a flat list or nested sessions and normalizes both.
//! Lookups that miss fall back to the built-in [`Fragment`] wording:
//!
//! ```rust
//! use prompt_optimizer::{Fragment, OptionCatalog, OptionLookup};
//!
//! let catalog = OptionCatalog::from_json_str(
//!     r#"[{"option": "Prefer JSON output", "prompt": "Answer with a JSON object."}]"#,
//! ).unwrap();
//!
//! assert_eq!(catalog.resolve("Prefer JSON output"), "Answer with a JSON object.");
//! assert_eq!(
//!     catalog.resolve_fragment(Fragment::NoMarkdown),
//!     Fragment::NoMarkdown.fallback(),
//! );
//! ```
//!
//! A [`SharedCatalog`] can be loaded in the background while assemblers are
//! already in use; until it is filled every lookup falls back.
//!
//! ```rust
//! use prompt_optimizer::{InputRecord, PromptAssembler, SharedCatalog};
//!
//! let shared = SharedCatalog::new();
//! let assembler = PromptAssembler::new(shared.clone());
//! let prompt = assembler
//!     .assemble(&InputRecord::new().with_user_instructions("Do X"))
//!     .unwrap();
//! assert_eq!(prompt, "# User Instructions\n\nDo X");
//! ```
//!
//! ## Example Split Strategies
//!
//! - [`ExampleSplitStrategy::ByBlankLine`] - blocks separated by blank lines
//! - [`ExampleSplitStrategy::ByLine`] - one example per non-empty line
//!
//! ## Snapshots
//!
//! [`FormSnapshot`] captures a record as a flat key-value map, and
//! [`persist_input`] / [`restore_input`] move it through any
//! [`SnapshotStore`] without ever failing the caller.

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod format;
pub mod frontend;
pub mod input;
pub mod options;
pub mod prefill;
pub mod snapshot;

// Re-exports for convenience
pub use assembler::{assemble, PromptAssembler, PREFILL_HEADER, SYSTEM_HEADER, USER_HEADER};
pub use catalog::{CatalogEntry, OptionCatalog, OptionLookup, SharedCatalog};
pub use config::{AssemblerConfig, ExampleSplitStrategy};
pub use errors::{PromptError, PromptErrorKind, PromptResult};
pub use format::{format_examples, split_examples};
pub use frontend::{
    append_requirements_section, build_frontend_prompt, build_requirements_section,
    render_configuration_block,
};
pub use input::{FrontendConfig, FrontendStack, InputRecord, PromptFlags, ReasoningEffort};
pub use options::{fallback_for, Fragment, OPTION_NAMES};
pub use prefill::generate_prefill;
pub use snapshot::{
    persist_input, restore_input, FormSnapshot, JsonFileStore, MemoryStore, SnapshotStore,
    LEGACY_KEYS,
};

/// Default file name of the option catalog
pub const CATALOG_FILE_NAME: &str = "prompt_options.json";
