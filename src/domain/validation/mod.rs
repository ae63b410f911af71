//! Claim validation domain
//!
//! Post-processes generated text against the evidence the user actually
//! supplied. Findings are always warnings attached to a successful response,
//! never errors: the system surfaces a flagged-but-usable result instead of
//! silently blocking or rewriting.

mod banned;
mod claims;
mod validator;
mod warning;

pub use banned::{BANNED_EMOJIS, BANNED_EN_WORDS, BANNED_KO_WORDS, banned_terms};
pub use claims::{has_numeric_claims, has_performance_claims};
pub use validator::{ClaimValidator, Evidence};
pub use warning::{EvidenceField, ValidationWarning};
