//! Frontend Builder
//!
//! Renders the frontend configuration three ways: a block embedded in the
//! user section of the main prompt, a requirements section appended after
//! an assembled prompt, or a standalone frontend prompt.

use crate::errors::{PromptError, PromptResult};
use crate::format::bullets;
use crate::input::FrontendConfig;

/// Header line of the embedded configuration block
pub const FRONTEND_HEADER: &str = "FRONTEND CONFIGURATION";

/// Marker that identifies an appended requirements section
pub const REQUIREMENTS_MARKER: &str = "FRONTEND DEVELOPMENT REQUIREMENTS";

const METHODOLOGY: &[&str] = &[
    "Follow component-based architecture principles",
    "Ensure responsive design (mobile-first approach)",
    "Implement proper semantic HTML and accessibility (ARIA)",
    "Optimize for performance and Core Web Vitals",
    "Use modern ES6+ JavaScript and TypeScript when applicable",
    "Apply consistent design tokens and spacing",
    "Include hover states and smooth transitions",
];

const RUBRIC: &str = "Apply internal quality rubric for production-ready code";

const REQUIREMENTS: &[&str] = &[
    "Produce complete, functional frontend code",
    "Ensure cross-browser compatibility",
    "Follow modern web standards and best practices",
    "Include proper error handling and loading states",
    "Provide clear component structure and documentation",
];

const ROLE: &str = "You are a Senior Frontend Engineer. Produce production-quality, accessible, responsive UI with clean structure.";

const REQUIRED_OUTPUT: &str = "Provide complete HTML, CSS, and JavaScript code that can be saved as a single working .html file.";

const IMAGE_INPUT_NOTE: &str =
    "Note: Include the reference image in your API call for better design matching.";

/// Whether the embedded block should be emitted for this configuration
pub fn has_configuration(config: &FrontendConfig) -> bool {
    !config.brief.trim().is_empty() || !config.style.trim().is_empty()
}

/// Embedded block: `---` rule, header, then one line per non-empty field.
///
/// Every line ends in `\n`. Gating on the builder toggle is the caller's job.
pub fn render_configuration_block(config: &FrontendConfig) -> String {
    let mut block = format!("---\n{}\n", FRONTEND_HEADER);

    let fields = [
        ("Objective", config.brief.trim()),
        ("Theme & Style", config.style.trim()),
        ("Information Architecture", config.pages.trim()),
        ("Reference Image", config.image.trim()),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            block.push_str(&format!("{}: {}\n", label, value));
        }
    }

    let stack = config.stack.lines();
    if !stack.is_empty() {
        block.push_str(&format!("Preferred Stack:\n{}\n", stack.join("\n")));
    }

    block
}

/// Frontend development requirements to append after an assembled prompt.
///
/// Empty when none of brief, style, pages or interactions is filled in.
pub fn build_requirements_section(config: &FrontendConfig) -> String {
    let brief = config.brief.trim();
    let style = config.style.trim();
    let pages = config.pages.trim();
    let interactions = config.interactions.trim();
    if brief.is_empty() && style.is_empty() && pages.is_empty() && interactions.is_empty() {
        return String::new();
    }

    let mut sections = vec![format!("=== {} ===", REQUIREMENTS_MARKER)];

    let described = [
        ("Frontend Objective", brief),
        ("Visual Theme & Style", style),
        ("Page Structure & Components", pages),
        ("Interactive Features", interactions),
    ];
    for (title, value) in described {
        if !value.is_empty() {
            sections.push(format!("{}\n{}", title, value));
        }
    }

    let image = config.image.trim();
    if !image.is_empty() {
        sections.push(format!("Reference Design\nUse this image as style reference: {}", image));
        if config.enable_image_input {
            sections.push(IMAGE_INPUT_NOTE.to_string());
        }
    }

    let stack = config.stack.category_lines();
    if !stack.is_empty() {
        sections.push(format!("Technology Stack Requirements\n{}", stack.join("\n")));
    }

    let mut methodology = METHODOLOGY.to_vec();
    if config.hidden_rubric {
        methodology.push(RUBRIC);
    }
    sections.push(format!(
        "Frontend Development Method\n{}",
        bullets(methodology.as_slice())
    ));
    sections.push(format!("Frontend Requirements\n{}", bullets(REQUIREMENTS)));

    sections.join("\n\n")
}

/// Append the requirements section to `prompt`, at most once
pub fn append_requirements_section(prompt: &str, config: &FrontendConfig) -> String {
    let section = build_requirements_section(config);
    if section.is_empty() || prompt.contains(REQUIREMENTS_MARKER) {
        return prompt.to_string();
    }
    format!("{}\n\n{}", prompt, section)
}

/// Standalone frontend prompt. Requires a brief.
pub fn build_frontend_prompt(config: &FrontendConfig) -> PromptResult<String> {
    let brief = config.brief.trim();
    if brief.is_empty() {
        return Err(PromptError::empty_brief());
    }

    let mut sections = vec![
        format!("System / Role\n{}", ROLE),
        format!("Objective\n{}", brief),
    ];

    let style = config.style.trim();
    if !style.is_empty() {
        sections.push(format!("Theme & Style\n{}", style));
    }

    let pages = config.pages.trim();
    if !pages.is_empty() {
        sections.push(format!("Information Architecture\n{}", pages));
    }

    let interactions = config.interactions.trim();
    if !interactions.is_empty() {
        sections.push(format!("Interactive Features\n{}", interactions));
    }

    let image = config.image.trim();
    if !image.is_empty() {
        let mut section = format!("Reference Image\nUse this image as a primary style cue: {}", image);
        if config.enable_image_input {
            section.push('\n');
            section.push_str(IMAGE_INPUT_NOTE);
        }
        sections.push(section);
    }

    let stack = config.stack.lines();
    if !stack.is_empty() {
        sections.push(format!("Preferred Stack\n{}", stack.join("\n")));
    }

    sections.push(format!("Required Output\n{}", REQUIRED_OUTPUT));

    Ok(sections.join("\n\n"))
}
