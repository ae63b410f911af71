//! Claim detection patterns
//!
//! Two independent regular-expression families, only consulted when no
//! evidence was supplied: quantitative claims (percentages, multipliers,
//! fold-changes) and qualitative performance superlatives, in English and
//! Korean.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_CLAIMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d+%|\d+배|\d+x|\d+×|improved by \d+|\d+\s*times|by\s+\d+%|by\s+\d+x|\d+\s*fold",
    )
    .expect("numeric claim pattern is valid")
});

static PERFORMANCE_CLAIMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)significantly (faster|better|improved)|much (faster|better|improved)|dramatically (faster|better|improved)|way (faster|better)|far (better|faster)|greatly (enhanced|improved)|훨씬\s+(빠른|나은|좋은)|월등히\s+(나은|빠른)|크게\s+(개선|향상)",
    )
    .expect("performance claim pattern is valid")
});

/// Whether the text contains a quantitative claim
pub fn has_numeric_claims(text: &str) -> bool {
    NUMERIC_CLAIMS.is_match(text)
}

/// Whether the text contains a qualitative performance claim
pub fn has_performance_claims(text: &str) -> bool {
    PERFORMANCE_CLAIMS.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_percent() {
        assert!(has_numeric_claims("Cut latency by 50% overall"));
        assert!(has_numeric_claims("50% fewer allocations"));
    }

    #[test]
    fn test_numeric_multipliers() {
        assert!(has_numeric_claims("Made it 3x faster"));
        assert!(has_numeric_claims("throughput rose 3× under load"));
        assert!(has_numeric_claims("처리량이 2배 늘었다"));
        assert!(has_numeric_claims("a 10 fold reduction"));
        assert!(has_numeric_claims("ran 4 times quicker"));
    }

    #[test]
    fn test_numeric_improved_by() {
        assert!(has_numeric_claims("improved by 40 points"));
    }

    #[test]
    fn test_performance_superlatives() {
        assert!(has_performance_claims("significantly faster than before"));
        assert!(has_performance_claims("this is much better now"));
        assert!(has_performance_claims("dramatically improved the pipeline"));
        assert!(has_performance_claims("way faster in production"));
        assert!(has_performance_claims("far better throughput"));
        assert!(has_performance_claims("greatly improved stability"));
    }

    #[test]
    fn test_performance_korean() {
        assert!(has_performance_claims("훨씬 빠른 응답"));
        assert!(has_performance_claims("크게 개선 되었습니다"));
    }

    #[test]
    fn test_neutral_text_matches_neither() {
        let text = "Moved the cache refresh into the worker and added a regression test.";
        assert!(!has_numeric_claims(text));
        assert!(!has_performance_claims(text));
    }

    #[test]
    fn test_families_are_independent() {
        assert!(has_numeric_claims("3x") && !has_performance_claims("3x"));
        assert!(
            !has_numeric_claims("significantly faster")
                && has_performance_claims("significantly faster")
        );
    }
}
