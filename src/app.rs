use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/login", post(handlers::login))
        .route("/api/dashboard", get(handlers::dashboard))
        .route("/api/activity", post(handlers::submit))
        .route("/api/history", get(handlers::get_history))
        .with_state(state)
}
