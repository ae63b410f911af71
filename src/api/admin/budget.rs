//! Budget administration endpoints

use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::usage::BudgetStatus;

#[derive(Debug, Deserialize, Default)]
pub struct ResetBudgetRequest {
    /// Month to reset ("YYYY-MM"); defaults to the current month
    pub month: Option<String>,
}

/// GET /admin/budget
pub async fn get_budget_status(State(state): State<AppState>) -> Json<BudgetStatus> {
    Json(state.ledger.budget_status().await)
}

/// POST /admin/budget/reset
///
/// The body is optional; an empty body resets the current month.
pub async fn reset_budget(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BudgetStatus>, ApiError> {
    let month = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<ResetBudgetRequest>(&body)
            .map_err(|error| ApiError::bad_request(format!("invalid request body: {error}")))?
            .month
    };

    if let Some(month) = &month {
        if !is_month_key(month) {
            return Err(ApiError::bad_request(format!(
                "'{month}' is not a valid month, expected YYYY-MM"
            )));
        }
    }

    info!(month = ?month, "Resetting monthly usage");
    let status = state.ledger.reset_monthly_usage(month).await;

    Ok(Json(status))
}

fn is_month_key(value: &str) -> bool {
    let Some((year, month)) = value.split_once('-') else {
        return false;
    };

    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && month.len() == 2
        && month
            .parse::<u8>()
            .map(|m| (1..=12).contains(&m))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_month_key() {
        assert!(is_month_key("2026-02"));
        assert!(is_month_key("2026-12"));
        assert!(!is_month_key("2026-13"));
        assert!(!is_month_key("2026-00"));
        assert!(!is_month_key("2026-2"));
        assert!(!is_month_key("feb-2026"));
        assert!(!is_month_key(""));
    }
}
