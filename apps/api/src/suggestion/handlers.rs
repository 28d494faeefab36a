use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use resume_editor::{SuggestRequest, SuggestResponse};

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestion::suggest;

/// POST /api/ai/suggest
pub async fn handle_suggest(
    State(state): State<AppState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, AppError> {
    let Json(req) = payload?;
    let response = suggest(state.llm.as_ref(), &req).await?;
    Ok(Json(response))
}
