//! Validation warning entity

use serde::{Serialize, Serializer};

/// Which evidence field a verbatim check failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceField {
    Before,
    After,
}

impl std::fmt::Display for EvidenceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Before => write!(f, "evidence_before"),
            Self::After => write!(f, "evidence_after"),
        }
    }
}

/// A soft validation finding, rendered as `"<kind>: <detail>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// A banned hype term appeared in generated text
    ToneViolation { term: String },
    /// Numeric claims appeared although no evidence was supplied
    NumericClaimsWithoutEvidence,
    /// Performance claims appeared although no evidence was supplied
    PerformanceClaimsWithoutEvidence,
    /// Supplied evidence was not reproduced as an exact substring
    EvidenceNotVerbatim { field: EvidenceField },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToneViolation { term } => {
                write!(f, "tone_violation: \"{term}\" detected")
            }
            Self::NumericClaimsWithoutEvidence => write!(
                f,
                "numeric_claims_without_evidence: numeric claims detected but no evidence provided"
            ),
            Self::PerformanceClaimsWithoutEvidence => write!(
                f,
                "performance_claims_without_evidence: performance claims detected but no evidence provided"
            ),
            Self::EvidenceNotVerbatim { field } => write!(
                f,
                "evidence_not_verbatim: {field} may not be quoted exactly as provided"
            ),
        }
    }
}

impl Serialize for ValidationWarning {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_violation_rendering() {
        let warning = ValidationWarning::ToneViolation {
            term: "game-changer".to_string(),
        };
        assert_eq!(warning.to_string(), "tone_violation: \"game-changer\" detected");
    }

    #[test]
    fn test_claim_warning_rendering() {
        assert!(
            ValidationWarning::NumericClaimsWithoutEvidence
                .to_string()
                .starts_with("numeric_claims_without_evidence:")
        );
        assert!(
            ValidationWarning::PerformanceClaimsWithoutEvidence
                .to_string()
                .starts_with("performance_claims_without_evidence:")
        );
    }

    #[test]
    fn test_verbatim_warning_names_field() {
        let warning = ValidationWarning::EvidenceNotVerbatim {
            field: EvidenceField::Before,
        };
        assert_eq!(
            warning.to_string(),
            "evidence_not_verbatim: evidence_before may not be quoted exactly as provided"
        );
    }

    #[test]
    fn test_serializes_as_rendered_string() {
        let warning = ValidationWarning::ToneViolation {
            term: "10x".to_string(),
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert_eq!(json, "\"tone_violation: \\\"10x\\\" detected\"");
    }
}
