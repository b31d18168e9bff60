use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated caller, as resolved from the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
}
