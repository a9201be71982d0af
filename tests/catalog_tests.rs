//! Option Catalog Loading Tests

use prompt_optimizer::{
    Fragment, InputRecord, OptionCatalog, OptionLookup, PromptAssembler, PromptErrorKind,
    PromptFlags, SharedCatalog, OPTION_NAMES,
};
use std::fs;

const NESTED: &str = r#"[
  {
    "session": "Reasoning",
    "options": [
      {"option": "Include Chain of Thought / Thinking",
       "output": [{"param": "", "prompt": "Show your reasoning before answering."}]},
      {"option": "Use Hidden Self-Review Rubric",
       "output": [{"param": "", "prompt": "Grade yourself silently."}]}
    ]
  },
  {
    "session": "Formatting",
    "options": [
      {"option": "Forbid Markdown in output", "prompt": "Plain text only."}
    ]
  }
]"#;

#[test]
fn test_fallback_totality_with_empty_catalog() {
    let catalog = OptionCatalog::empty();
    for fragment in Fragment::ALL {
        assert!(!catalog.resolve_fragment(*fragment).is_empty());
    }
    for name in OPTION_NAMES {
        assert!(!catalog.resolve(name).is_empty(), "{}", name);
    }
}

#[test]
fn test_resolve_or_uses_caller_fallback() {
    let catalog = OptionCatalog::empty();
    assert_eq!(catalog.resolve_or("Unknown option", "fallback"), "fallback");
}

#[test]
fn test_nested_sessions_flattened() {
    let catalog = OptionCatalog::from_json_str(NESTED).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.names(),
        vec![
            "Forbid Markdown in output",
            "Include Chain of Thought / Thinking",
            "Use Hidden Self-Review Rubric",
        ]
    );
    assert_eq!(catalog.resolve_fragment(Fragment::SelfReview), "Grade yourself silently.");
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prompt_options.json");
    fs::write(&path, NESTED).unwrap();

    let catalog = OptionCatalog::load_from_path(&path).unwrap();
    assert!(catalog.contains("Forbid Markdown in output"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = OptionCatalog::load_from_path(&path).unwrap_err();
    assert_eq!(err.kind, PromptErrorKind::CatalogLoad);
    assert!(OptionCatalog::load_or_empty(&path).is_empty());
}

#[test]
fn test_malformed_file_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prompt_options.json");
    fs::write(&path, "{ not json").unwrap();

    assert_eq!(
        OptionCatalog::load_from_path(&path).unwrap_err().kind,
        PromptErrorKind::CatalogFormat
    );
    assert!(OptionCatalog::load_or_empty(&path).is_empty());
}

#[test]
fn test_spawn_load_fills_shared_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prompt_options.json");
    fs::write(&path, NESTED).unwrap();

    let shared = SharedCatalog::new();
    let assembler = PromptAssembler::new(shared.clone());
    let input = InputRecord::new()
        .with_system_prompt("Base")
        .with_user_instructions("Go")
        .with_flags(PromptFlags {
            chain_of_thought: true,
            ..Default::default()
        });

    let before = assembler.assemble(&input).unwrap();
    assert!(before.contains(Fragment::ChainOfThought.fallback()));

    shared.spawn_load(&path).join().unwrap();
    assert!(shared.is_loaded());

    let after = assembler.assemble(&input).unwrap();
    assert!(after.contains("Instructions for reasoning: Show your reasoning before answering."));
}

#[test]
fn test_spawn_load_missing_file_installs_empty() {
    let dir = tempfile::tempdir().unwrap();
    let shared = SharedCatalog::new();
    shared.spawn_load(dir.path().join("absent.json")).join().unwrap();

    assert!(shared.is_loaded());
    assert!(shared.get().unwrap().is_empty());
    assert_eq!(
        shared.resolve_fragment(Fragment::NoMarkdown),
        Fragment::NoMarkdown.fallback()
    );
}
