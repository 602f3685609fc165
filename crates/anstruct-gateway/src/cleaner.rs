//! Cleanup of raw model output into blueprint text.
//!
//! Models tend to wrap the tree in markdown fences and chat around it even
//! when told not to. These helpers strip that and normalise the root.

const FENCES: [&str; 4] = ["```struct", "```plaintext", "```text", "```"];

const EXPLANATION_PREFIXES: [&str; 9] = [
    "Here is",
    "Here's",
    "This is",
    "The structure",
    "I've created",
    "I've generated",
    "Based on",
    "Note:",
    "Important:",
];

/// Strip markdown and chatter from model output and fix up the root line.
///
/// The first unindented line becomes the root and always ends in `/`. Any
/// later unindented line is pushed one tab under it.
#[must_use]
pub fn clean_output(raw: &str) -> String {
    let text = strip_fences(raw);
    let text = strip_explanations(&text);
    let text = text.replace("\r\n", "\n");
    fix_structure(text.trim())
}

/// Wrap the tree in `default_root/` unless it already has exactly one root.
///
/// Blank lines and `#` comments are ignored when counting, and dropped when
/// wrapping. Text with no entries at all is returned unchanged.
#[must_use]
pub fn wrap_single_root(text: &str, default_root: &str) -> String {
    let content = || {
        text.lines().filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
    };

    if content().next().is_none() || content().filter(|line| is_root_line(line)).count() == 1 {
        return text.to_string();
    }

    std::iter::once(format!("{default_root}/"))
        .chain(content().map(|line| format!("\t{line}")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_root_line(line: &str) -> bool {
    !line.starts_with('\t') && !line.starts_with("  ")
}

fn strip_fences(text: &str) -> String {
    FENCES
        .iter()
        .fold(text.to_string(), |acc, fence| acc.replace(fence, ""))
}

fn strip_explanations(text: &str) -> String {
    text.split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty()
                && !EXPLANATION_PREFIXES
                    .iter()
                    .any(|prefix| trimmed.starts_with(prefix))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn fix_structure(text: &str) -> String {
    let mut fixed = Vec::new();
    let mut root_found = false;

    for (i, line) in text.split('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let is_root = is_root_line(line);
        if !root_found && is_root {
            root_found = true;
            if trimmed.ends_with('/') {
                fixed.push(trimmed.to_string());
            } else {
                fixed.push(format!("{trimmed}/"));
            }
            continue;
        }

        if root_found && is_root && i > 0 {
            fixed.push(format!("\t{line}"));
        } else {
            fixed.push(line.to_string());
        }
    }

    fixed.join("\n")
}
