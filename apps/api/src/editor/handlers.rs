use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::AnalysisReport;
use crate::auth::CurrentUser;
use crate::editor::{EditorCommand, EditorSession, SessionView};
use crate::errors::AppError;
use crate::models::resume::SavedResume;
use crate::models::style::{ColorScheme, FontFamilyOption, FontSettings, FontSize, FONT_FAMILIES};
use crate::render::html::{to_html, to_plain_text};
use crate::render::RenderTree;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NewSessionQuery {
    pub template: Option<String>,
}

/// Copies the current state of a session out of the table. Later awaits work
/// on this snapshot, so the session stays editable meanwhile.
pub async fn snapshot(state: &AppState, id: Uuid) -> Result<EditorSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// POST /api/v1/sessions?template=<id>
pub async fn handle_create_session(
    State(state): State<AppState>,
    Query(query): Query<NewSessionQuery>,
) -> (StatusCode, Json<SessionView>) {
    let session = EditorSession::new(query.template.as_deref());
    info!(session_id = %session.id, template = %session.template_id, "Created editor session");

    let view = session.view();
    state.sessions.insert(session).await;
    (StatusCode::CREATED, Json(view))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(snapshot(&state, id).await?.view()))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// POST /api/v1/sessions/:id/commands
/// Applies one command. A rejected command leaves the stored session as it was.
pub async fn handle_apply_command(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(command): Json<EditorCommand>,
) -> Result<Json<SessionView>, AppError> {
    let next = state
        .sessions
        .apply(id, command)
        .await
        .ok_or_else(|| session_not_found(id))??;
    Ok(Json(next.view()))
}

/// GET /api/v1/sessions/:id/render
pub async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RenderTree>, AppError> {
    Ok(Json(snapshot(&state, id).await?.render()))
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let tree = snapshot(&state, id).await?.render();
    Ok(Html(to_html(&tree.root)))
}

/// GET /api/v1/sessions/:id/analysis
pub async fn handle_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisReport>, AppError> {
    let content = to_plain_text(&snapshot(&state, id).await?.render());
    let report = state.analyzer.analyze(&content).await?;
    Ok(Json(report))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub id: Uuid,
    pub ats_score: i32,
}

/// POST /api/v1/sessions/:id/save
/// Persists the plain-text rendering with its analysis. Failure is reported
/// to the caller; the session is never modified.
pub async fn handle_save(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    let content = to_plain_text(&snapshot(&state, id).await?.render());
    let report = state.analyzer.analyze(&content).await?;

    let ats_score = i32::try_from(report.overall_score).unwrap_or(i32::MAX);
    let analysis = serde_json::to_value(&report)
        .map_err(|e| AppError::Internal(e.into()))?;

    let resume_id = state
        .store
        .save(user.id, &content, ats_score, &analysis)
        .await?;
    info!(session_id = %id, resume_id = %resume_id, user_id = %user.id, "Saved resume");

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            id: resume_id,
            ats_score,
        }),
    ))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SavedResume>, AppError> {
    state
        .store
        .load(user.id, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

#[derive(Serialize)]
pub struct StyleOptions {
    pub font_families: &'static [FontFamilyOption],
    pub font_sizes: Vec<FontSizeOption>,
    pub default_color_scheme: ColorScheme,
    pub default_font_settings: FontSettings,
}

#[derive(Serialize)]
pub struct FontSizeOption {
    pub value: FontSize,
    pub px: u16,
}

/// GET /api/v1/style/options
pub async fn handle_style_options() -> Json<StyleOptions> {
    Json(StyleOptions {
        font_families: &FONT_FAMILIES,
        font_sizes: FontSize::SCALE
            .iter()
            .map(|&size| FontSizeOption {
                value: size,
                px: size.px(),
            })
            .collect(),
        default_color_scheme: ColorScheme::default(),
        default_font_settings: FontSettings::default(),
    })
}
