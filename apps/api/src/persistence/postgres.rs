use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::SavedResume;
use crate::persistence::{ResumeStore, StoreError};

pub struct PgResumeStore {
    db: PgPool,
}

impl PgResumeStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn save(
        &self,
        user_id: Uuid,
        content: &str,
        ats_score: i32,
        analysis: &Value,
    ) -> Result<Uuid, StoreError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO resumes (user_id, content, ats_score, analysis)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(content)
        .bind(ats_score)
        .bind(analysis)
        .fetch_one(&self.db)
        .await?;

        Ok(id)
    }

    async fn load(&self, user_id: Uuid, id: Uuid) -> Result<Option<SavedResume>, StoreError> {
        let resume: Option<SavedResume> = sqlx::query_as(
            "SELECT id, user_id, content, ats_score, analysis, created_at FROM resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(resume)
    }
}
