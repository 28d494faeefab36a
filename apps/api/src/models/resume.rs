use chrono::{DateTime, Utc};
use resume_editor::draft::{ResumeDraft, StoredResume};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the `resumes` table. The draft is stored whole as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub document: Json<ResumeDraft>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for StoredResume {
    fn from(row: ResumeRow) -> Self {
        StoredResume {
            id: row.id,
            document: row.document.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
