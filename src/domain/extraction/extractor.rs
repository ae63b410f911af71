//! Fragment extraction from raw log text

use once_cell::sync::Lazy;
use regex::Regex;

use super::fragment::{CodeFragment, MAX_FRAGMENTS};
use super::language::detect_language;

// Fenced form: triple backtick, optional tag, newline, body, triple backtick.
// Non-greedy body; an unterminated fence never matches.
static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("fenced block pattern is valid"));

/// Extract up to three code fragments from raw log text
///
/// Fenced blocks are collected first, in source order; indented blocks fill
/// any remaining slots. Never fails: a log without code yields an empty list.
pub fn extract_code_fragments(raw_log: &str) -> Vec<CodeFragment> {
    let mut fragments = Vec::new();

    for captures in FENCED_BLOCK.captures_iter(raw_log) {
        let code = captures
            .get(2)
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        if code.is_empty() {
            continue;
        }

        // An explicit tag always wins over the heuristic
        let language = match captures.get(1) {
            Some(tag) => tag.as_str().to_string(),
            None => detect_language(code).to_string(),
        };

        fragments.push(CodeFragment::new(language, code));
        if fragments.len() >= MAX_FRAGMENTS {
            return fragments;
        }
    }

    collect_indented_fragments(raw_log, &mut fragments);

    fragments
}

/// Scan for runs of indented lines (four spaces or one tab)
///
/// Blank lines are allowed inside a run but never start one; a run ends on a
/// non-indented, non-blank line or end of input, and is accepted with at
/// least two lines and non-empty trimmed text.
fn collect_indented_fragments(raw_log: &str, fragments: &mut Vec<CodeFragment>) {
    let mut run: Vec<&str> = Vec::new();

    for line in raw_log.lines() {
        if fragments.len() >= MAX_FRAGMENTS {
            return;
        }

        if let Some(stripped) = strip_one_indent(line) {
            run.push(stripped);
        } else if line.trim().is_empty() && !run.is_empty() {
            run.push("");
        } else {
            flush_run(&mut run, fragments);
        }
    }

    if fragments.len() < MAX_FRAGMENTS {
        flush_run(&mut run, fragments);
    }
}

fn flush_run(run: &mut Vec<&str>, fragments: &mut Vec<CodeFragment>) {
    if run.len() >= 2 {
        let code = run.join("\n");
        let code = code.trim();
        if !code.is_empty() {
            fragments.push(CodeFragment::new(detect_language(code), code));
        }
    }
    run.clear();
}

/// Remove exactly one indent level; None when the line is not indented
fn strip_one_indent(line: &str) -> Option<&str> {
    line.strip_prefix("    ").or_else(|| line.strip_prefix('\t'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction::TRUNCATION_MARKER;

    #[test]
    fn test_no_code_yields_empty_list() {
        let fragments = extract_code_fragments("shipped the retry queue, on to the next thing");
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_fenced_block_with_tag() {
        let log = "Fixed the handler:\n```rust\nfn main() {}\n```\ndone";
        let fragments = extract_code_fragments(log);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].language, "rust");
        assert_eq!(fragments[0].code, "fn main() {}");
        assert!(!fragments[0].truncated);
    }

    #[test]
    fn test_fenced_tag_wins_over_heuristic() {
        // Content looks like Rust, tag says python; the tag is reported verbatim
        let log = "```python\nfn main() {}\n```";
        let fragments = extract_code_fragments(log);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].language, "python");
    }

    #[test]
    fn test_fenced_block_without_tag_detects_language() {
        let log = "```\nconst x = require('fs')\n```";
        let fragments = extract_code_fragments(log);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].language, "javascript");
    }

    #[test]
    fn test_empty_fenced_block_skipped() {
        let log = "```\n\n```\nafter";
        assert!(extract_code_fragments(log).is_empty());
    }

    #[test]
    fn test_unterminated_fence_not_matched() {
        let log = "```rust\nfn main() {}\n";
        assert!(extract_code_fragments(log).is_empty());
    }

    #[test]
    fn test_cap_of_three_fenced_in_source_order() {
        let log = "```\nfirst()\n```\n```\nsecond()\n```\n```\nthird()\n```\n```\nfourth()\n```";
        let fragments = extract_code_fragments(log);

        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].code, "first()");
        assert_eq!(fragments[1].code, "second()");
        assert_eq!(fragments[2].code, "third()");
        assert!(fragments.iter().all(|f| !f.code.is_empty()));
    }

    #[test]
    fn test_indented_block() {
        let log = "Before the fix:\n    def handler(event):\n    \treturn event\nafter";
        let fragments = extract_code_fragments(log);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].language, "python");
        assert_eq!(fragments[0].code, "def handler(event):\n\treturn event");
    }

    #[test]
    fn test_single_indented_line_rejected() {
        let log = "note:\n    lonely line\nend";
        assert!(extract_code_fragments(log).is_empty());
    }

    #[test]
    fn test_blank_lines_allowed_inside_indented_run() {
        let log = "    let mut a = 1;\n\n    let mut b = 2;\nend";
        let fragments = extract_code_fragments(log);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].code, "let mut a = 1;\n\nlet mut b = 2;");
    }

    #[test]
    fn test_trailing_indented_block_at_end_of_input() {
        let log = "wrapping up\n    SELECT id FROM events\n    ORDER BY id";
        let fragments = extract_code_fragments(log);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].language, "sql");
    }

    #[test]
    fn test_fenced_take_priority_over_indented() {
        let log = "```\nfenced()\n```\n    indented line one\n    indented line two\n";
        let fragments = extract_code_fragments(log);

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].code, "fenced()");
        assert_eq!(fragments[1].code, "indented line one\nindented line two");
    }

    #[test]
    fn test_combined_cap_across_forms() {
        let log = "\
```\none()\n```\n```\ntwo()\n```\n```\nthree()\n```\n    four line a\n    four line b\n";
        let fragments = extract_code_fragments(log);

        assert_eq!(fragments.len(), 3);
        assert!(fragments.iter().all(|f| f.code.ends_with("()")));
    }

    #[test]
    fn test_truncation_at_twenty_one_lines() {
        let body: String = (1..=21)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let log = format!("```\n{body}\n```");
        let fragments = extract_code_fragments(&log);

        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].truncated);

        let lines: Vec<&str> = fragments[0].code.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(*lines.last().unwrap(), TRUNCATION_MARKER);
    }

    #[test]
    fn test_exactly_twenty_lines_untouched() {
        let body: String = (1..=20)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let log = format!("```\n{body}\n```");
        let fragments = extract_code_fragments(&log);

        assert_eq!(fragments.len(), 1);
        assert!(!fragments[0].truncated);
        assert_eq!(fragments[0].code, body);
    }
}
