//! devpost-gateway
//!
//! A generation-safety gateway that turns developer technical work logs into
//! social-media posts. The interesting part is not the HTTP surface but the
//! pipeline between "request admitted" and "text returned":
//! - an admission guard (per-client sliding-window rate limit plus a monthly
//!   budget ceiling) that rejects requests before any generation cost,
//! - a durable usage ledger aggregating token counts and cost per calendar
//!   month,
//! - a deterministic code fragment extractor over the raw log text,
//! - a claim validator that flags hype vocabulary, unsubstantiated numeric
//!   and performance claims, and evidence that was not quoted verbatim.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;

use api::state::AppState;
use domain::admission::RateLimitPolicy;
use domain::generation::TextGenerator;
use domain::usage::{BudgetLimits, default_model_pricing};
use infrastructure::admission::AdmissionGuard;
use infrastructure::llm::OpenAiGenerator;
use infrastructure::services::PostService;
use infrastructure::usage::{JsonFileStore, UsageLedger};

/// Wire up the shared services from configuration
///
/// Constructed once per process; every stateful piece of the pipeline lives
/// behind the returned state.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY must be set to reach the generation service")?;

    let pricing = default_model_pricing()
        .remove(&config.generation.model)
        .with_context(|| {
            format!(
                "no pricing configured for model '{}'",
                config.generation.model
            )
        })?;

    let store = Arc::new(JsonFileStore::new(&config.storage.usage_file));
    let limits = BudgetLimits::new(
        config.budget.monthly_cost_limit_usd,
        config.budget.max_monthly_tokens,
    );
    let ledger = Arc::new(UsageLedger::new(store, pricing, limits));

    let generator: Arc<dyn TextGenerator> = match &config.generation.base_url {
        Some(base_url) => Arc::new(OpenAiGenerator::with_base_url(
            api_key.as_str(),
            config.generation.model.as_str(),
            base_url.as_str(),
        )),
        None => Arc::new(OpenAiGenerator::new(
            api_key.as_str(),
            config.generation.model.as_str(),
        )),
    };

    let policy = RateLimitPolicy::new(
        config.admission.max_requests,
        config.admission.window_seconds,
    );
    let admission = Arc::new(AdmissionGuard::new(policy, ledger.clone()));
    let post_service = Arc::new(PostService::new(generator, ledger.clone()));

    Ok(AppState::new(admission, post_service, ledger))
}
