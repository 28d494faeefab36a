//! Storage seam for saved drafts.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; production wires in
//! `PgResumeStore`, router tests an in-memory implementation.

use async_trait::async_trait;
use resume_editor::draft::{ResumeDraft, StoredResume};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Always creates a new record. There is no update-by-identity path.
    async fn insert(&self, draft: &ResumeDraft) -> Result<StoredResume, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredResume>, AppError>;
}

/// Postgres-backed store. One row per save, document as JSONB.
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(&self, draft: &ResumeDraft) -> Result<StoredResume, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, document)
            VALUES ($1, $2)
            RETURNING id, document, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Json(draft))
        .fetch_one(&self.pool)
        .await?;

        info!(resume_id = %row.id, "Resume saved");
        Ok(row.into())
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredResume>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT id, document, created_at, updated_at FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
