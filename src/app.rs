use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze_form))
        .route("/api/analyze", post(handlers::analyze_api))
        .route("/api/session", get(handlers::session))
        .with_state(state)
}
