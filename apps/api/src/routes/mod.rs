pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editor::handlers;
use crate::export::handlers::handle_export;
use crate::state::AppState;
use crate::templates::handlers::{handle_get_template, handle_list_templates};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template registry
        .route("/api/v1/templates", get(handle_list_templates))
        .route("/api/v1/templates/:id", get(handle_get_template))
        .route("/api/v1/style/options", get(handlers::handle_style_options))
        // Editor sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/commands",
            post(handlers::handle_apply_command),
        )
        .route("/api/v1/sessions/:id/render", get(handlers::handle_render))
        .route("/api/v1/sessions/:id/preview", get(handlers::handle_preview))
        .route("/api/v1/sessions/:id/export", post(handle_export))
        .route("/api/v1/sessions/:id/analysis", get(handlers::handle_analysis))
        // Persistence
        .route("/api/v1/sessions/:id/save", post(handlers::handle_save))
        .route("/api/v1/resumes/:id", get(handlers::handle_get_resume))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::auth::USER_ID_HEADER;

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        build_router(state.clone()).oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn create_session(state: &AppState, template: &str) -> Value {
        let request = Request::builder()
            .method(Method::POST)
            .uri(format!("/api/v1/sessions?template={template}"))
            .body(Body::empty())
            .unwrap();
        let response = send(state, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_health() {
        let state = AppState::in_memory();
        let json = body_json(send(&state, get("/health")).await).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "vitae-api");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_templates_listed_and_unknown_falls_back() {
        let state = AppState::in_memory();
        let list = body_json(send(&state, get("/api/v1/templates")).await).await;
        assert_eq!(list.as_array().map(Vec::len), Some(3));

        let response = send(&state, get("/api/v1/templates/unknown")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], "professional");
    }

    #[tokio::test]
    async fn test_style_options() {
        let state = AppState::in_memory();
        let json = body_json(send(&state, get("/api/v1/style/options")).await).await;
        assert_eq!(json["font_families"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["font_sizes"][4], json!({ "value": "2xl", "px": 24 }));
        assert_eq!(json["default_color_scheme"]["primary"], "#1a1a1a");
    }

    #[tokio::test]
    async fn test_session_view_includes_render() {
        let state = AppState::in_memory();
        let created = create_session(&state, "modern").await;
        assert_eq!(created["template_id"], "modern");
        assert_eq!(created["sections"].as_array().map(Vec::len), Some(5));
        assert_eq!(created["render"]["template_id"], "modern");

        let id = created["id"].as_str().unwrap();
        let fetched = body_json(send(&state, get(&format!("/api/v1/sessions/{id}"))).await).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_command_updates_session_and_render() {
        let state = AppState::in_memory();
        let created = create_session(&state, "professional").await;
        let id = created["id"].as_str().unwrap();

        let response = send(
            &state,
            post_json(
                &format!("/api/v1/sessions/{id}/commands"),
                json!({
                    "command": "update_section_content",
                    "id": "0",
                    "patch": { "type": "personal", "name": "Ada Lovelace" }
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let view = body_json(response).await;
        assert_eq!(view["sections"][0]["content"]["name"], "Ada Lovelace");

        let preview = body_text(send(&state, get(&format!("/api/v1/sessions/{id}/preview"))).await).await;
        assert!(preview.contains(">Ada Lovelace</h1>"));
    }

    #[tokio::test]
    async fn test_invalid_color_rejected_and_session_kept() {
        let state = AppState::in_memory();
        let created = create_session(&state, "professional").await;
        let id = created["id"].as_str().unwrap();

        let response = send(
            &state,
            post_json(
                &format!("/api/v1/sessions/{id}/commands"),
                json!({
                    "command": "set_color_scheme",
                    "color_scheme": { "primary": "blue", "secondary": "#000", "background": "#fff" }
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");

        let fetched = body_json(send(&state, get(&format!("/api/v1/sessions/{id}"))).await).await;
        assert_eq!(fetched["color_scheme"]["primary"], "#1a1a1a");
    }

    #[tokio::test]
    async fn test_switch_template_replaces_sections_keeps_fonts() {
        let state = AppState::in_memory();
        let created = create_session(&state, "professional").await;
        let uri = format!("/api/v1/sessions/{}/commands", created["id"].as_str().unwrap());

        let fonts = json!({
            "family": "'Georgia', serif",
            "name_size": "3xl",
            "section_size": "lg",
            "body_size": "base"
        });
        let response = send(
            &state,
            post_json(&uri, json!({ "command": "set_font_settings", "font_settings": fonts })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(
            &state,
            post_json(&uri, json!({ "command": "switch_template", "template_id": "modern" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let view = body_json(response).await;

        assert_eq!(view["template_id"], "modern");
        assert_eq!(view["render"]["template_id"], "modern");
        assert_eq!(view["font_settings"], fonts);

        let sections = view["sections"].as_array().unwrap();
        let of_type = |ty: &str| {
            sections
                .iter()
                .filter(|s| s["content"]["type"] == ty)
                .collect::<Vec<_>>()
        };
        assert_eq!(of_type("experience").len(), 1);
        assert_eq!(of_type("education").len(), 1);
        assert_eq!(of_type("skills")[0]["content"]["skills"].as_array().map(Vec::len), Some(5));
        assert_eq!(of_type("personal")[0]["content"]["name"], "Sarah Chen");
    }

    #[tokio::test]
    async fn test_reorder_with_duplicate_id_rejected() {
        let state = AppState::in_memory();
        let created = create_session(&state, "professional").await;
        let uri = format!("/api/v1/sessions/{}/commands", created["id"].as_str().unwrap());

        let mut sections = created["sections"].as_array().unwrap().clone();
        sections.push(sections[0].clone());
        let response = send(
            &state,
            post_json(&uri, json!({ "command": "reorder_sections", "sections": sections })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");

        let reversed: Vec<Value> = created["sections"].as_array().unwrap().iter().rev().cloned().collect();
        let response = send(
            &state,
            post_json(&uri, json!({ "command": "reorder_sections", "sections": reversed })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let ids: Vec<String> = body_json(response).await["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["4", "3", "2", "1", "0"]);
    }

    #[tokio::test]
    async fn test_add_section_command() {
        let state = AppState::in_memory();
        let created = create_session(&state, "minimal").await;
        let uri = format!("/api/v1/sessions/{}/commands", created["id"].as_str().unwrap());

        let response = send(
            &state,
            post_json(&uri, json!({ "command": "add_section", "section_type": "education" })),
        )
        .await;
        let view = body_json(response).await;
        let sections = view["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[5]["title"], "Education");
        assert_eq!(sections[5]["order"], 5);
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let state = AppState::in_memory();
        let response = send(&state, get(&format!("/api/v1/sessions/{}", Uuid::new_v4()))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_session() {
        let state = AppState::in_memory();
        let created = create_session(&state, "minimal").await;
        let uri = format!("/api/v1/sessions/{}", created["id"].as_str().unwrap());

        let delete = || {
            Request::builder()
                .method(Method::DELETE)
                .uri(&uri)
                .body(Body::empty())
                .unwrap()
        };
        assert_eq!(send(&state, delete()).await.status(), StatusCode::NO_CONTENT);
        assert_eq!(send(&state, delete()).await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_returns_attachment() {
        let state = AppState::in_memory();
        let created = create_session(&state, "professional").await;
        let id = created["id"].as_str().unwrap();

        let response = send(
            &state,
            post_json(
                &format!("/api/v1/sessions/{id}/export"),
                json!({ "format": "doc", "filename": "Alex Thompson", "paper_size": "letter" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"alex-thompson.doc\""
        );
        let body = body_text(response).await;
        assert!(body.contains("data-resume-root"));
    }

    #[tokio::test]
    async fn test_analysis_report() {
        let state = AppState::in_memory();
        let created = create_session(&state, "professional").await;
        let id = created["id"].as_str().unwrap();

        let json = body_json(send(&state, get(&format!("/api/v1/sessions/{id}/analysis"))).await).await;
        assert_eq!(json["overall_score"], 83);
        assert_eq!(json["label"], "Excellent ATS Score");
    }

    #[tokio::test]
    async fn test_save_requires_user() {
        let state = AppState::in_memory();
        let created = create_session(&state, "professional").await;
        let id = created["id"].as_str().unwrap();

        let response = send(
            &state,
            post_json(&format!("/api/v1/sessions/{id}/save"), json!({})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_save_then_load_for_owner_only() {
        let state = AppState::in_memory();
        let created = create_session(&state, "professional").await;
        let id = created["id"].as_str().unwrap();
        let user = Uuid::new_v4().to_string();

        let save = Request::builder()
            .method(Method::POST)
            .uri(format!("/api/v1/sessions/{id}/save"))
            .header(USER_ID_HEADER, &user)
            .body(Body::empty())
            .unwrap();
        let response = send(&state, save).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let saved = body_json(response).await;
        assert_eq!(saved["ats_score"], 83);
        let resume_uri = format!("/api/v1/resumes/{}", saved["id"].as_str().unwrap());

        let load = Request::builder()
            .uri(&resume_uri)
            .header(USER_ID_HEADER, &user)
            .body(Body::empty())
            .unwrap();
        let resume = body_json(send(&state, load).await).await;
        assert!(resume["content"].as_str().unwrap().starts_with("Alex Thompson\n"));
        assert_eq!(resume["analysis"]["label"], "Excellent ATS Score");

        let other = Request::builder()
            .uri(&resume_uri)
            .header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(&state, other).await.status(), StatusCode::NOT_FOUND);

        // Session is untouched by saving.
        let fetched = body_json(send(&state, get(&format!("/api/v1/sessions/{id}"))).await).await;
        assert_eq!(fetched, created);
    }
}
