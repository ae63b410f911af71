//! Post generation endpoint handler

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
};
use tracing::info;
use uuid::Uuid;

use crate::api::middleware::client_ip;
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::admission::AdmissionDecision;
use crate::domain::generation::{PostRequest, PostResponse};

/// POST /v1/posts
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let client = client_ip(&headers);

    info!(
        request_id = %request_id,
        client = %client,
        platform = %request.platform,
        "Processing post generation request"
    );

    match state.admission.admit(&client).await {
        AdmissionDecision::Allowed => {}
        AdmissionDecision::RateLimited(rejection) => {
            return Err(ApiError::from_rate_limit(&rejection));
        }
        AdmissionDecision::BudgetExceeded(rejection) => {
            return Err(ApiError::from_budget(&rejection));
        }
    }

    // Admission is consumed on attempt; a request failing these checks has
    // still used a rate slot.
    if request.raw_log.trim().is_empty() {
        return Err(ApiError::bad_request("raw_log cannot be empty"));
    }
    if request.outcome.trim().is_empty() {
        return Err(ApiError::bad_request("outcome cannot be empty"));
    }

    let response = state
        .post_service
        .generate_post(&request)
        .await
        .map_err(ApiError::from_domain)?;

    info!(
        request_id = %request_id,
        variants = response.variants.len(),
        total_tokens = response.token_usage.total_tokens,
        warnings = response.warnings.as_ref().map(|w| w.len()).unwrap_or(0),
        "Post generation completed"
    );

    Ok(Json(response))
}
