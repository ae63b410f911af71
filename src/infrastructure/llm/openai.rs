//! OpenAI completion provider

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::debug;

use crate::domain::generation::{GeneratedText, GenerationRequest, TextGenerator, TokenUsage};
use crate::domain::DomainError;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const PROVIDER_NAME: &str = "openai";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI chat-completions provider
#[derive(Debug)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    auth_header: String,
    base_url: String,
    model: String,
}

impl OpenAiGenerator {
    /// Create a provider against the public API
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_OPENAI_BASE_URL)
    }

    /// Create a provider against a custom base URL
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            auth_header: format!("Bearer {}", api_key.into()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_body(&self, request: &GenerationRequest) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_prompt },
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedText, DomainError> {
        let body = self.build_body(&request);

        debug!(model = %self.model, max_tokens = request.max_tokens, "Sending completion request");

        let response = self
            .client
            .post(self.chat_completions_url())
            .header(AUTHORIZATION, &self.auth_header)
            .json(&body)
            .send()
            .await
            .map_err(|error| {
                if error.is_timeout() {
                    DomainError::timeout(PROVIDER_NAME)
                } else {
                    DomainError::provider(PROVIDER_NAME, error.to_string())
                }
            })?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(DomainError::upstream_rate_limited(PROVIDER_NAME));
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(DomainError::credential(format!(
                    "{PROVIDER_NAME} rejected the configured API key"
                )));
            }
            status => {
                let detail = response.text().await.unwrap_or_default();
                return Err(DomainError::provider(
                    PROVIDER_NAME,
                    format!("unexpected status {status}: {detail}"),
                ));
            }
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|error| DomainError::provider(PROVIDER_NAME, error.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        let usage = completion
            .usage
            .map(|usage| TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            })
            .unwrap_or_default();

        Ok(GeneratedText { text, usage })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> GenerationRequest {
        GenerationRequest {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }

    fn generator_for(server: &MockServer) -> OpenAiGenerator {
        OpenAiGenerator::with_base_url("test-key", "gpt-4o-mini", server.uri())
    }

    #[tokio::test]
    async fn test_successful_generation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "Shipped the retry queue." } }
                ],
                "usage": { "prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160 }
            })))
            .mount(&server)
            .await;

        let generated = generator_for(&server).generate(request()).await.unwrap();

        assert_eq!(generated.text, "Shipped the retry queue.");
        assert_eq!(generated.usage.prompt_tokens, 120);
        assert_eq!(generated.usage.completion_tokens, 40);
        assert_eq!(generated.usage.total_tokens, 160);
    }

    #[tokio::test]
    async fn test_upstream_rate_limit_maps_to_category() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let error = generator_for(&server).generate(request()).await.unwrap_err();
        assert!(matches!(error, DomainError::UpstreamRateLimited { .. }));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_credential() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let error = generator_for(&server).generate(request()).await.unwrap_err();
        assert!(matches!(error, DomainError::Credential { .. }));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_provider() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
            .mount(&server)
            .await;

        let error = generator_for(&server).generate(request()).await.unwrap_err();
        match error {
            DomainError::Provider { provider, message } => {
                assert_eq!(provider, "openai");
                assert!(message.contains("500"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_usage_defaults_to_zero() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [ { "message": { "role": "assistant", "content": "ok" } } ]
            })))
            .mount(&server)
            .await;

        let generated = generator_for(&server).generate(request()).await.unwrap();
        assert_eq!(generated.usage.total_tokens, 0);
    }
}
