//! Example Split Strategy Tests

use pretty_assertions::assert_eq;
use prompt_optimizer::{
    format_examples, split_examples, AssemblerConfig, ExampleSplitStrategy, InputRecord,
    OptionCatalog, PromptAssembler,
};

const MULTILINE: &str = "Q: capital of France?\nA: Paris\n\nQ: capital of Spain?\nA: Madrid";

#[test]
fn test_blank_line_keeps_multiline_examples() {
    let examples = split_examples(MULTILINE, ExampleSplitStrategy::ByBlankLine);
    assert_eq!(
        examples,
        vec!["Q: capital of France?\nA: Paris", "Q: capital of Spain?\nA: Madrid"]
    );
}

#[test]
fn test_by_line_splits_every_line() {
    let examples = split_examples(MULTILINE, ExampleSplitStrategy::ByLine);
    assert_eq!(examples.len(), 4);
    assert_eq!(examples[1], "A: Paris");
}

#[test]
fn test_by_line_numbering() {
    assert_eq!(
        format_examples("one\ntwo", ExampleSplitStrategy::ByLine, false),
        "Example 1:\none\n\nExample 2:\ntwo"
    );
}

#[test]
fn test_by_line_keeps_indentation() {
    assert_eq!(
        format_examples("def f():\n    return 1\n", ExampleSplitStrategy::ByLine, false),
        "Example 1:\ndef f():\n\nExample 2:\n    return 1"
    );
}

#[test]
fn test_strategy_flows_through_assembler() {
    let mut input = InputRecord::new().with_user_instructions("Answer");
    input.examples = "one\ntwo".into();

    let by_block = PromptAssembler::builtin().assemble(&input).unwrap();
    assert!(by_block.ends_with("Examples:\nExample 1:\none\ntwo"));

    let config = AssemblerConfig::new().with_example_split(ExampleSplitStrategy::ByLine);
    let by_line = PromptAssembler::with_config(OptionCatalog::empty(), config)
        .assemble(&input)
        .unwrap();
    assert!(by_line.ends_with("Examples:\nExample 1:\none\n\nExample 2:\ntwo"));
}

#[test]
fn test_whitespace_only_separator_lines() {
    let examples = split_examples("A\n   \t\nB\n\n\n\nC", ExampleSplitStrategy::ByBlankLine);
    assert_eq!(examples, vec!["A", "B", "C"]);
}
