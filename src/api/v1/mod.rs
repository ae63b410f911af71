//! Public v1 API

mod posts;

use axum::{Router, routing::post};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new().route("/posts", post(posts::create_post))
}
