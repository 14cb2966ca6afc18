use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/config.js", get(handlers::config_js))
        .route("/api/plan/today", get(handlers::plan_today))
        .route("/api/plan/:date", get(handlers::plan_for_date))
        .with_state(state)
}
