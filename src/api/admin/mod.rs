//! Administrative API

mod budget;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/budget", get(budget::get_budget_status))
        .route("/budget/reset", post(budget::reset_budget))
}
