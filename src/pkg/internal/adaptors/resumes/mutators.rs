use sqlx::types::Json;
use sqlx::PgConnection;
use uuid::Uuid;

use super::spec::{ResumeDoc, ResumeEntry};
use crate::prelude::Result;

pub struct ResumeMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ResumeMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ResumeMutator { pool }
    }

    pub async fn create(&mut self, doc: ResumeDoc) -> Result<ResumeEntry> {
        let row = sqlx::query_as::<_, ResumeEntry>(
            r#"
            INSERT INTO resumes (document)
            VALUES ($1)
            RETURNING id, document, created_at, updated_at
            "#,
        )
        .bind(Json(doc.normalized()))
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    /// Replaces the stored document wholesale. Concurrent writers follow
    /// last-write-wins; the builder always submits the full resume.
    pub async fn replace(&mut self, id: Uuid, doc: ResumeDoc) -> Result<Option<ResumeEntry>> {
        let row = sqlx::query_as::<_, ResumeEntry>(
            r#"
            UPDATE resumes
            SET document = $2, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING id, document, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(Json(doc.normalized()))
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
