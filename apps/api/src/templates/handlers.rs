use axum::{extract::Path, Json};

use crate::templates::{get_template, list_templates, Template};

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<&'static [Template]> {
    Json(list_templates())
}

/// GET /api/v1/templates/:id
/// Unknown ids resolve to the default template rather than 404.
pub async fn handle_get_template(Path(id): Path<String>) -> Json<&'static Template> {
    Json(get_template(Some(id.as_str())))
}
