use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A saved résumé: the exported text plus its analysis at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SavedResume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub ats_score: i32,
    pub analysis: Value,
    pub created_at: DateTime<Utc>,
}
