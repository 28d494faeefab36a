pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::suggestion::handlers as suggestion;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/resume", post(resume::handle_save_resume))
        .route("/api/resume/:id", get(resume::handle_get_resume))
        .route("/api/ai/suggest", post(suggestion::handle_suggest))
        .with_state(state)
}
