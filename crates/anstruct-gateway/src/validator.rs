//! Structural checks on cleaned blueprint text.
//!
//! A usable blueprint has exactly one root folder (an unindented line ending
//! in `/`) and indents with either tabs or spaces, never both. Blank lines
//! and `#` comments are ignored.

use thiserror::Error;

/// Why a blueprint was rejected. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlueprintError {
    #[error("invalid blueprint: no entries")]
    Empty,

    #[error("missing root folder")]
    NoRoot,

    #[error("multiple root folders detected at line {line}: '{name}' (only one root folder allowed)")]
    MultipleRoots { line: usize, name: String },

    #[error("root must be a folder ending with '/' at line {line}: '{name}'")]
    RootNotFolder { line: usize, name: String },

    #[error("inconsistent indentation: mixing tabs and spaces")]
    MixedIndentation,
}

/// Check that `text` is a single-rooted blueprint with consistent indentation.
///
/// Root errors are reported at the first offending line; the indentation
/// check runs over the whole text.
pub fn validate_blueprint(text: &str) -> Result<(), BlueprintError> {
    let mut has_content = false;
    let mut uses_tabs = false;
    let mut uses_spaces = false;
    let mut roots = 0;

    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        has_content = true;

        if line.starts_with('\t') {
            uses_tabs = true;
        } else if line.starts_with("  ") {
            uses_spaces = true;
        }

        if !line.starts_with('\t') && !line.starts_with(' ') {
            roots += 1;
            if roots > 1 {
                return Err(BlueprintError::MultipleRoots {
                    line: i + 1,
                    name: trimmed.to_string(),
                });
            }
            if !trimmed.ends_with('/') {
                return Err(BlueprintError::RootNotFolder {
                    line: i + 1,
                    name: trimmed.to_string(),
                });
            }
        }
    }

    if !has_content {
        return Err(BlueprintError::Empty);
    }
    if roots == 0 {
        return Err(BlueprintError::NoRoot);
    }
    if uses_tabs && uses_spaces {
        return Err(BlueprintError::MixedIndentation);
    }
    Ok(())
}
