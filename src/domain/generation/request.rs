//! Post generation request types

use serde::{Deserialize, Serialize};

use crate::domain::validation::Evidence;

/// Target platform for the generated post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    X,
}

impl Platform {
    /// Completion-token ceiling for this platform
    pub fn max_completion_tokens(self) -> u32 {
        match self {
            Self::Linkedin => 1000,
            Self::X => 500,
        }
    }

    /// Human-readable name used in prompts
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn",
            Self::X => "X (Twitter)",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linkedin => write!(f, "linkedin"),
            Self::X => write!(f, "x"),
        }
    }
}

/// A single output language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ko => write!(f, "ko"),
            Self::En => write!(f, "en"),
        }
    }
}

/// Requested output language(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLanguage {
    Ko,
    En,
    Both,
}

impl OutputLanguage {
    /// Concrete languages to generate, in generation order
    pub fn languages(self) -> Vec<Language> {
        match self {
            Self::Ko => vec![Language::Ko],
            Self::En => vec![Language::En],
            Self::Both => vec![Language::Ko, Language::En],
        }
    }
}

/// A request to turn a work log into a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    /// Free-form technical work log
    pub raw_log: String,
    /// Declared outcome, used verbatim in the post
    pub outcome: String,
    /// Measurement before the change
    #[serde(default)]
    pub evidence_before: Option<String>,
    /// Measurement after the change
    #[serde(default)]
    pub evidence_after: Option<String>,
    /// Optional personal takeaway
    #[serde(default)]
    pub human_insight: Option<String>,
    /// Target platform
    pub platform: Platform,
    /// Output language(s)
    pub output_language: OutputLanguage,
}

impl PostRequest {
    /// Normalized evidence for the validator
    pub fn evidence(&self) -> Evidence {
        Evidence::from_fields(self.evidence_before.as_deref(), self.evidence_after.as_deref())
    }
}
