use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use resume_editor::draft::{ResumeDraft, StoredResume};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredResume>), AppError> {
    let Json(draft) = payload?;
    let stored = state.store.insert(&draft).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredResume>, AppError> {
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}
