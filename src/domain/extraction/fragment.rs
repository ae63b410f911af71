//! Code fragment entity

use serde::{Deserialize, Serialize};

/// Maximum fragments recovered per log, across both extraction forms
pub const MAX_FRAGMENTS: usize = 3;

/// Maximum lines kept per fragment before truncation
pub const MAX_FRAGMENT_LINES: usize = 20;

/// Marker line appended when a fragment is cut at the line cap
pub const TRUNCATION_MARKER: &str = "// ... truncated";

/// A code snippet recovered from the raw log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFragment {
    /// Language tag: explicit fence tag, heuristic result, or "plaintext"
    pub language: String,
    /// Snippet text; never empty
    pub code: String,
    /// True when the snippet exceeded the line cap and was cut
    pub truncated: bool,
}

impl CodeFragment {
    /// Create a fragment, applying the line cap
    ///
    /// Snippets over the cap keep their first `MAX_FRAGMENT_LINES` lines and
    /// gain a single synthetic marker line.
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        let code = code.into();
        let line_count = code.lines().count();

        if line_count > MAX_FRAGMENT_LINES {
            let mut kept: Vec<&str> = code.lines().take(MAX_FRAGMENT_LINES).collect();
            kept.push(TRUNCATION_MARKER);

            Self {
                language: language.into(),
                code: kept.join("\n"),
                truncated: true,
            }
        } else {
            Self {
                language: language.into(),
                code,
                truncated: false,
            }
        }
    }
}
