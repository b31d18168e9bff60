//! Current-user resolution. The caller identifies itself with an `X-User-Id`
//! header carrying a UUID; an upstream gateway is expected to set it.

use axum::{extract::FromRequestParts, http::request::Parts, http::HeaderMap};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Returns the user named by the request headers, if any.
pub fn get_current_user(headers: &HeaderMap) -> Option<User> {
    let raw = headers.get(USER_ID_HEADER)?.to_str().ok()?;
    let id = Uuid::parse_str(raw.trim()).ok()?;
    Some(User { id })
}

/// Extractor for handlers that require a signed-in user. Rejects with 401.
pub struct CurrentUser(pub User);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_current_user(&parts.headers)
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}
