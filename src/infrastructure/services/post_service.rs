//! Post generation pipeline service

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::extraction::extract_code_fragments;
use crate::domain::generation::{
    GenerationRequest, PostRequest, PostResponse, PostVariant, TextGenerator, TokenUsage,
    build_system_prompt, build_user_prompt,
};
use crate::domain::validation::ClaimValidator;
use crate::domain::DomainError;
use crate::infrastructure::usage::UsageLedger;

const GENERATION_TEMPERATURE: f32 = 0.7;

/// Orchestrates the per-request pipeline after admission
///
/// Extraction runs on the raw log independently of generation; the ledger is
/// written once per completed generation, after token counts are known. A
/// failed generation records nothing.
#[derive(Debug)]
pub struct PostService {
    generator: Arc<dyn TextGenerator>,
    ledger: Arc<UsageLedger>,
    validator: ClaimValidator,
}

impl PostService {
    /// Create the service over a generator and the shared ledger
    pub fn new(generator: Arc<dyn TextGenerator>, ledger: Arc<UsageLedger>) -> Self {
        Self {
            generator,
            ledger,
            validator: ClaimValidator::new(),
        }
    }

    /// Run the full pipeline for one admitted request
    pub async fn generate_post(&self, request: &PostRequest) -> Result<PostResponse, DomainError> {
        let code_fragments = extract_code_fragments(&request.raw_log);
        let evidence = request.evidence();
        let languages = request.output_language.languages();

        info!(
            platform = %request.platform,
            languages = languages.len(),
            fragments = code_fragments.len(),
            evidence_missing = evidence.is_missing(),
            "Generating post"
        );

        let mut token_usage = TokenUsage::default();
        let mut variants = Vec::with_capacity(languages.len());

        for language in languages {
            let generated = self
                .generator
                .generate(GenerationRequest {
                    system_prompt: build_system_prompt(language, request.platform),
                    user_prompt: build_user_prompt(request, language, request.platform),
                    max_tokens: request.platform.max_completion_tokens(),
                    temperature: GENERATION_TEMPERATURE,
                })
                .await?;

            token_usage.add(generated.usage);
            variants.push(PostVariant {
                language,
                text: generated.text,
            });
        }

        let texts: Vec<&str> = variants.iter().map(|v| v.text.as_str()).collect();
        let warnings = self.validator.validate(&evidence, &texts);

        if let Some(warnings) = &warnings {
            warn!(count = warnings.len(), "Generated post carries validation warnings");
        }

        self.ledger
            .record_usage(
                token_usage.prompt_tokens,
                token_usage.completion_tokens,
                token_usage.total_tokens,
            )
            .await;

        Ok(PostResponse {
            platform: request.platform,
            variants,
            code_fragments,
            evidence_missing: evidence.is_missing(),
            warnings,
            token_usage,
        })
    }
}
