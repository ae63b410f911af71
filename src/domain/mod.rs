//! Domain layer - core entities and pure pipeline logic

pub mod admission;
pub mod error;
pub mod extraction;
pub mod generation;
pub mod usage;
pub mod validation;

pub use admission::{
    AdmissionDecision, BudgetRejection, ClientId, RateLimitInfo, RateLimitPolicy,
    RateLimitRejection,
};
pub use error::DomainError;
pub use extraction::{CodeFragment, detect_language, extract_code_fragments};
pub use generation::{
    GeneratedText, GenerationRequest, Language, OutputLanguage, Platform, PostRequest,
    PostResponse, PostVariant, TextGenerator, TokenUsage,
};
pub use usage::{
    BudgetLimits, BudgetStatus, ModelPricing, MonthlyUsage, UsageEntry, UsageMap, UsageStore,
};
pub use validation::{ClaimValidator, Evidence, EvidenceField, ValidationWarning};
