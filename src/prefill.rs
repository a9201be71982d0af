//! Assistant prefill skeleton: the opening of an assistant reply, shaped by
//! the formatting and reasoning flags.

use crate::input::PromptFlags;

const THINKING_SCAFFOLD: &str = "<thinking>\n[Analysis and reasoning will go here]\n</thinking>\n\n";

/// Build the prefill skeleton for the given flags
pub fn generate_prefill(flags: &PromptFlags) -> String {
    let mut prefill = String::new();

    if flags.use_xml {
        prefill.push_str(THINKING_SCAFFOLD);
    }

    if flags.prefer_json {
        prefill.push_str("{\n  \"response\": \"");
    } else {
        prefill.push_str("I understand the requirements. Let me ");
        if flags.chain_of_thought {
            prefill.push_str("think through this step by step:\n\n1. ");
        } else {
            prefill.push_str("provide a comprehensive response:\n\n");
        }
    }

    prefill
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prefill() {
        assert_eq!(
            generate_prefill(&PromptFlags::default()),
            "I understand the requirements. Let me provide a comprehensive response:\n\n"
        );
    }

    #[test]
    fn test_xml_json_prefill() {
        let flags = PromptFlags {
            use_xml: true,
            prefer_json: true,
            chain_of_thought: true,
            ..Default::default()
        };
        assert_eq!(
            generate_prefill(&flags),
            "<thinking>\n[Analysis and reasoning will go here]\n</thinking>\n\n{\n  \"response\": \""
        );
    }

    #[test]
    fn test_chain_of_thought_prefill() {
        let flags = PromptFlags {
            chain_of_thought: true,
            ..Default::default()
        };
        assert!(generate_prefill(&flags).ends_with("step by step:\n\n1. "));
    }
}
