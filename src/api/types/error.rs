//! API error types

use axum::{
    Json,
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::DomainError;
use crate::domain::admission::{BudgetRejection, RateLimitRejection};

/// JSON error body
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub message: String,
    /// Whole seconds until a rate-limited client may retry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    /// Machine-readable rejection metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error with status code and response headers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
    headers: Vec<(HeaderName, String)>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: error.into(),
                message: message.into(),
                retry_after: None,
                details: None,
            },
            headers: Vec::new(),
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request", message)
    }

    /// Internal error with a redacted client-facing message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error", message)
    }

    /// 429 response for a rate-limited request
    pub fn from_rate_limit(rejection: &RateLimitRejection) -> Self {
        let mut error = Self::new(
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded",
            format!(
                "Too many requests from this client. Maximum {} requests per hour allowed.",
                rejection.limit
            ),
        );
        error.response.retry_after = Some(rejection.retry_after_seconds);
        error.headers = vec![
            (
                header::RETRY_AFTER,
                rejection.retry_after_seconds.to_string(),
            ),
            (
                HeaderName::from_static("x-ratelimit-limit"),
                rejection.limit.to_string(),
            ),
            (
                HeaderName::from_static("x-ratelimit-remaining"),
                rejection.remaining.to_string(),
            ),
            (
                HeaderName::from_static("x-ratelimit-reset"),
                rejection.resets_at.to_rfc3339(),
            ),
        ];
        error
    }

    /// 403 response for a budget-exceeded request
    pub fn from_budget(rejection: &BudgetRejection) -> Self {
        let mut error = Self::new(
            StatusCode::FORBIDDEN,
            "Budget limit reached",
            "Monthly budget limit reached. Generation paused until next month.",
        );
        error.response.details = serde_json::to_value(rejection).ok();
        error
    }

    /// Map a pipeline failure onto a user-facing category
    pub fn from_domain(error: DomainError) -> Self {
        match error {
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Timeout { .. } => Self::new(
                StatusCode::GATEWAY_TIMEOUT,
                "Generation timed out",
                "The generation service did not respond in time. Try again.",
            ),
            DomainError::UpstreamRateLimited { .. } => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Generation service busy",
                "The generation service is rate limiting us. Try again shortly.",
            ),
            DomainError::Credential { .. } | DomainError::Configuration { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Service misconfigured",
                "The generation service credentials are not configured correctly.",
            ),
            DomainError::Provider { .. } => Self::new(
                StatusCode::BAD_GATEWAY,
                "Generation failed",
                "The generation service returned an error.",
            ),
            DomainError::Storage { message } | DomainError::Internal { message } => {
                Self::internal(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.response)).into_response();

        for (name, value) in self.headers {
            if let Ok(value) = value.parse() {
                response.headers_mut().insert(name, value);
            }
        }

        response
    }
}
