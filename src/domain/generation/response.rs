//! Post generation response types

use serde::{Deserialize, Serialize};

use super::request::{Language, Platform};
use crate::domain::extraction::CodeFragment;
use crate::domain::validation::ValidationWarning;

/// Token usage statistics for one or more completed calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }

    /// Accumulate another call's usage into this one
    pub fn add(&mut self, other: TokenUsage) {
        self.prompt_tokens += other.prompt_tokens;
        self.completion_tokens += other.completion_tokens;
        self.total_tokens += other.total_tokens;
    }
}

/// One generated text, per language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostVariant {
    pub language: Language,
    pub text: String,
}

/// The full pipeline result for one request
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub platform: Platform,
    /// Generated texts in generation order
    pub variants: Vec<PostVariant>,
    /// Fragments recovered from the raw log (never from generated output)
    pub code_fragments: Vec<CodeFragment>,
    /// True when neither before- nor after-evidence was supplied
    pub evidence_missing: bool,
    /// Soft findings; absent (not an empty list) when none apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<ValidationWarning>>,
    /// Totals across every completed call for this request
    pub token_usage: TokenUsage,
}
