//! Text generation provider seam

use std::fmt::Debug;

use async_trait::async_trait;

use super::response::TokenUsage;
use crate::domain::DomainError;

/// A single role-tagged completion request
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System instructions
    pub system_prompt: String,
    /// User content
    pub user_prompt: String,
    /// Completion-token ceiling for this call
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// A completed generation with its token accounting
#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub text: String,
    pub usage: TokenUsage,
}

/// Trait for completion providers
///
/// Implementations map their transport failures onto the domain categories:
/// timeout, upstream rate limit, credential problem, or a generic provider
/// error.
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    /// Run one completion
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedText, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}


#[cfg(test)]
mod tests {
    use super::mock::MockTextGenerator;
    use super::*;

    #[tokio::test]
    async fn test_mock_generator_returns_scripted_text() {
        let generator = MockTextGenerator::returning("done", TokenUsage::new(10, 5));

        let result = generator
            .generate(GenerationRequest {
                system_prompt: "system".to_string(),
                user_prompt: "user".to_string(),
                max_tokens: 500,
                temperature: 0.7,
            })
            .await
            .unwrap();

        assert_eq!(result.text, "done");
        assert_eq!(result.usage.total_tokens, 15);
        assert_eq!(generator.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_generator_failure() {
        let generator = MockTextGenerator::failing("boom");

        let error = generator
            .generate(GenerationRequest {
                system_prompt: String::new(),
                user_prompt: String::new(),
                max_tokens: 1,
                temperature: 0.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(error, DomainError::Provider { .. }));
    }
}
