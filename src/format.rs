//! Formatting Helpers
//!
//! Example splitting, optional tag wrapping and bullet lists shared by the
//! assembler and the frontend builder.

use crate::config::ExampleSplitStrategy;

/// Bullet prefix used in every list
pub const BULLET: &str = "\u{2022}";

/// Cut the examples field into individual examples.
///
/// `ByLine` keeps every non-empty line as written, indentation included.
/// `ByBlankLine` blocks are trimmed.
pub fn split_examples(text: &str, strategy: ExampleSplitStrategy) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    match strategy {
        ExampleSplitStrategy::ByLine => text
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        ExampleSplitStrategy::ByBlankLine => split_blocks(text),
    }
}

/// Blocks separated by lines that are empty or whitespace-only
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
        .into_iter()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect()
}

/// Render the examples field.
///
/// XML: `<examples>` holding one `<example>` per item. Plain: numbered
/// `Example N:` blocks separated by a blank line.
pub fn format_examples(text: &str, strategy: ExampleSplitStrategy, use_xml: bool) -> String {
    let examples = split_examples(text, strategy);
    if examples.is_empty() {
        return String::new();
    }

    if use_xml {
        let items: Vec<String> = examples
            .iter()
            .map(|e| format!("<example>\n{}\n</example>", e))
            .collect();
        return format!("<examples>\n{}\n</examples>", items.join("\n"));
    }

    examples
        .iter()
        .enumerate()
        .map(|(i, e)| format!("Example {}:\n{}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Wrap `body` in `<tag>`/`</tag>` when `enabled`
pub fn wrap_tag(tag: &str, body: &str, enabled: bool) -> String {
    if enabled {
        format!("<{tag}>{body}</{tag}>")
    } else {
        body.to_string()
    }
}

/// One `• item` line per entry
pub fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| format!("{} {}", BULLET, s.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_by_blank_line() {
        let blocks = split_examples(
            "Q: one\nA: 1\n\n  \n\nQ: two\nA: 2\n",
            ExampleSplitStrategy::ByBlankLine,
        );
        assert_eq!(blocks, vec!["Q: one\nA: 1", "Q: two\nA: 2"]);
    }

    #[test]
    fn test_split_by_line() {
        let lines = split_examples("first\n\n  second\nthird", ExampleSplitStrategy::ByLine);
        assert_eq!(lines, vec!["first", "  second", "third"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_examples("  \n\n ", ExampleSplitStrategy::ByBlankLine).is_empty());
        assert_eq!(format_examples("", ExampleSplitStrategy::ByLine, true), "");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(
            format_examples("A\n\nB", ExampleSplitStrategy::ByBlankLine, false),
            "Example 1:\nA\n\nExample 2:\nB"
        );
    }

    #[test]
    fn test_format_xml() {
        assert_eq!(
            format_examples("A\n\nB", ExampleSplitStrategy::ByBlankLine, true),
            "<examples>\n<example>\nA\n</example>\n<example>\nB\n</example>\n</examples>"
        );
    }

    #[test]
    fn test_wrap_tag_and_bullets() {
        assert_eq!(wrap_tag("context", "Hi", true), "<context>Hi</context>");
        assert_eq!(wrap_tag("context", "Hi", false), "Hi");
        assert_eq!(bullets(&["a", "b"]), "\u{2022} a\n\u{2022} b");
    }
}
