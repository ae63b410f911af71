//! Heuristic language detection
//!
//! An ordered table of (language, pattern) rules evaluated top to bottom;
//! the first matching rule wins. Order is load-bearing: TypeScript patterns
//! deliberately shadow the broader JavaScript ones, so ties resolve by
//! position in the table, never by match length.

use once_cell::sync::Lazy;
use regex::Regex;

static LANGUAGE_RULES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        (
            "typescript",
            r#"interface\s+\w+|type\s+\w+\s*=|:\s*(?:string|number|boolean)\b|import\s+.*\s+from\s+['"]"#,
        ),
        (
            "javascript",
            r"const\s+\w+\s*=|let\s+\w+\s*=|function\s+\w+|=>|require\s*\(",
        ),
        (
            "python",
            r"def\s+\w+\s*\(|import\s+\w+|from\s+\w+\s+import|class\s+\w+.*:|print\s*\(",
        ),
        (
            "java",
            r"public\s+(?:class|static|void)|private\s+|System\.out\.|import\s+java\.",
        ),
        ("go", r"func\s+\w+|package\s+\w+|import\s+\(|fmt\.|:="),
        ("rust", r"fn\s+\w+|let\s+mut\s+|impl\s+|pub\s+fn|println!\("),
        (
            "sql",
            r"(?i)SELECT\s+.*FROM|INSERT\s+INTO|CREATE\s+TABLE|ALTER\s+TABLE|UPDATE\s+\w+\s+SET",
        ),
        ("bash", r"#!/.+|echo\s+|if\s+\[\s|fi\b|done\b|\$\{?\w+\}?"),
        (
            "html",
            r"(?i)</?(?:div|span|html|head|body|p|a|img)\b|<!DOCTYPE",
        ),
        (
            "css",
            r"\{[^}]*(?:display|margin|padding|color|font-size)\s*:|@media\s",
        ),
        ("json", r"(?s)^\s*[\{\[].*[\}\]]\s*$"),
        ("yaml", r"(?m)^[\w-]+:\s+.+$"),
    ]
    .into_iter()
    .map(|(language, pattern)| {
        (
            language,
            Regex::new(pattern).expect("language rule patterns are valid"),
        )
    })
    .collect()
});

/// Detect the language of a snippet; returns "plaintext" when no rule matches
pub fn detect_language(code: &str) -> &'static str {
    LANGUAGE_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(code))
        .map(|(language, _)| *language)
        .unwrap_or("plaintext")
}
