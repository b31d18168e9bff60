use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::editor::handlers::snapshot;
use crate::errors::AppError;
use crate::export::{export, ExportOptions};
use crate::state::AppState;

/// POST /api/v1/sessions/:id/export
/// Returns the artifact as an attachment. The session is not modified, so a
/// failed export can simply be retried.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(options): Json<ExportOptions>,
) -> Result<Response, AppError> {
    let tree = snapshot(&state, id).await?.render();
    let artifact = export(&tree, &options)?;

    let disposition = format!("attachment; filename=\"{}\"", artifact.filename);
    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.body,
    )
        .into_response())
}
