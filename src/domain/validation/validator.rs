//! Claim validator

use super::banned::banned_terms;
use super::claims::{has_numeric_claims, has_performance_claims};
use super::warning::{EvidenceField, ValidationWarning};

/// User-supplied before/after measurement text
///
/// Empty or whitespace-only strings count as not supplied.
#[derive(Debug, Clone, Default)]
pub struct Evidence {
    pub before: Option<String>,
    pub after: Option<String>,
}

impl Evidence {
    /// Normalize raw request fields into evidence
    pub fn from_fields(before: Option<&str>, after: Option<&str>) -> Self {
        let normalize = |value: Option<&str>| {
            value
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.to_string())
        };

        Self {
            before: normalize(before),
            after: normalize(after),
        }
    }

    /// Missing iff neither field was supplied
    pub fn is_missing(&self) -> bool {
        self.before.is_none() && self.after.is_none()
    }
}

/// Validates generated text against supplied evidence
///
/// Pure with respect to its inputs; holds no state and needs no
/// synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimValidator;

impl ClaimValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run every check over the generated variants
    ///
    /// Returns `None` when no warnings apply; callers must keep the warnings
    /// field absent (not an empty list) in that case.
    pub fn validate(&self, evidence: &Evidence, variants: &[&str]) -> Option<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        for text in variants {
            warnings.extend(self.tone_violations(text));
        }

        if evidence.is_missing() {
            // One warning per family, however many individual matches occur
            if variants.iter().any(|text| has_numeric_claims(text)) {
                warnings.push(ValidationWarning::NumericClaimsWithoutEvidence);
            }
            if variants.iter().any(|text| has_performance_claims(text)) {
                warnings.push(ValidationWarning::PerformanceClaimsWithoutEvidence);
            }
        } else {
            warnings.extend(self.verbatim_failures(evidence, variants));
        }

        if warnings.is_empty() { None } else { Some(warnings) }
    }

    /// Banned-term scan; every match of every term yields its own warning
    pub fn tone_violations(&self, text: &str) -> Vec<ValidationWarning> {
        let lowered = text.to_lowercase();

        banned_terms()
            .filter(|term| lowered.contains(&term.to_lowercase()))
            .map(|term| ValidationWarning::ToneViolation {
                term: term.to_string(),
            })
            .collect()
    }

    /// Verbatim check: each supplied evidence string must appear as an exact
    /// substring of each variant
    fn verbatim_failures(&self, evidence: &Evidence, variants: &[&str]) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for text in variants {
            if let Some(before) = &evidence.before {
                if !text.contains(before.as_str()) {
                    warnings.push(ValidationWarning::EvidenceNotVerbatim {
                        field: EvidenceField::Before,
                    });
                }
            }
            if let Some(after) = &evidence.after {
                if !text.contains(after.as_str()) {
                    warnings.push(ValidationWarning::EvidenceNotVerbatim {
                        field: EvidenceField::After,
                    });
                }
            }
        }

        warnings
    }
}
