//! Code fragment extraction domain
//!
//! Deterministic recovery of code snippets from raw log text. Extraction is
//! a pure function of its input, never fails, and runs on what the user
//! wrote, not on anything a model produced.

mod extractor;
mod fragment;
mod language;

pub use extractor::extract_code_fragments;
pub use fragment::{CodeFragment, MAX_FRAGMENTS, MAX_FRAGMENT_LINES, TRUNCATION_MARKER};
pub use language::detect_language;
