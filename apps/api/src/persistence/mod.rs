//! Persistence boundary for saved résumés.
//!
//! Only serialized text and the analysis payload cross this boundary; the
//! document and render types stay in memory. `AppState` carries an
//! `Arc<dyn ResumeStore>`: Postgres when `DATABASE_URL` is set, otherwise
//! the in-memory store.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::SavedResume;

pub use memory::InMemoryResumeStore;
pub use postgres::PgResumeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Inserts a new saved résumé for `user_id` and returns its id.
    async fn save(
        &self,
        user_id: Uuid,
        content: &str,
        ats_score: i32,
        analysis: &Value,
    ) -> Result<Uuid, StoreError>;

    /// Loads a résumé owned by `user_id`. Other users' résumés are not found.
    async fn load(&self, user_id: Uuid, id: Uuid) -> Result<Option<SavedResume>, StoreError>;
}
