use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::resume::SavedResume;
use crate::persistence::{ResumeStore, StoreError};

/// Process-local store used when no database is configured, and in tests.
#[derive(Default)]
pub struct InMemoryResumeStore {
    resumes: RwLock<HashMap<Uuid, SavedResume>>,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn save(
        &self,
        user_id: Uuid,
        content: &str,
        ats_score: i32,
        analysis: &Value,
    ) -> Result<Uuid, StoreError> {
        let resume = SavedResume {
            id: Uuid::new_v4(),
            user_id,
            content: content.to_string(),
            ats_score,
            analysis: analysis.clone(),
            created_at: Utc::now(),
        };
        let id = resume.id;
        self.resumes.write().await.insert(id, resume);
        Ok(id)
    }

    async fn load(&self, user_id: Uuid, id: Uuid) -> Result<Option<SavedResume>, StoreError> {
        let resumes = self.resumes.read().await;
        Ok(resumes.get(&id).filter(|r| r.user_id == user_id).cloned())
    }
}
