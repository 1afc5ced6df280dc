pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::exchange::handlers as exchange;
use crate::profiles::handlers as profiles;
use crate::render::handlers as render;
use crate::schema::handlers as schema;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless schema and preview
        .route("/api/v1/validate", post(schema::handle_validate))
        .route("/api/v1/migrate", post(schema::handle_migrate))
        .route("/api/v1/render/:target", post(render::handle_render_preview))
        // Profiles
        .route(
            "/api/v1/profiles",
            get(profiles::handle_list).post(profiles::handle_create),
        )
        .route(
            "/api/v1/profiles/active",
            get(profiles::handle_get_active).put(profiles::handle_set_active),
        )
        .route(
            "/api/v1/profiles/:id",
            get(profiles::handle_get)
                .put(profiles::handle_save)
                .delete(profiles::handle_delete),
        )
        .route("/api/v1/profiles/:id/reset", post(profiles::handle_reset))
        .route(
            "/api/v1/profiles/:id/render/:target",
            get(profiles::handle_render),
        )
        // Exchange
        .route("/api/v1/profiles/:id/export", get(exchange::handle_export))
        .route("/api/v1/profiles/:id/import", post(exchange::handle_import))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::db::create_pool;
    use crate::profiles::service::ProfileService;
    use crate::profiles::store::SqliteProfileStore;
    use crate::schema::default_resume;

    async fn app() -> Router {
        let config = Config::for_tests();
        let pool = create_pool(&config.database_url).await.unwrap();
        let profiles = ProfileService::new(Arc::new(SqliteProfileStore::new(pool)));
        profiles.bootstrap().await.unwrap();
        build_router(AppState { profiles, config })
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["service"], "folio");
    }

    #[tokio::test]
    async fn test_validate_reports_all_violations() {
        let app = app().await;
        let mut raw = serde_json::to_value(default_resume()).unwrap();
        raw["basics"]["email"] = json!("nope");
        raw["links"]["github"] = json!("not a url");

        let (status, body) = send(&app, Method::POST, "/api/v1/validate", Some(raw)).await;
        assert_eq!(status, StatusCode::OK);
        let body = json_body(&body);
        assert_eq!(body["valid"], false);
        let paths: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|e| e["path"].as_str())
            .collect();
        assert!(paths.contains(&"basics.email"));
        assert!(paths.contains(&"links.github"));
    }

    #[tokio::test]
    async fn test_migrate_flags_recovery() {
        let app = app().await;
        let (status, body) = send(&app, Method::POST, "/api/v1/migrate", Some(json!(42))).await;
        assert_eq!(status, StatusCode::OK);
        let body = json_body(&body);
        assert_eq!(body["status"], "defaulted");
        assert_eq!(body["recovered"], true);
    }

    #[tokio::test]
    async fn test_render_preview_escapes_markup() {
        let app = app().await;
        let mut raw = serde_json::to_value(default_resume()).unwrap();
        raw["basics"]["name"] = json!("<script>alert(1)</script>");

        let (status, body) =
            send(&app, Method::POST, "/api/v1/render/resume", Some(raw)).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn test_unknown_render_target_is_not_found() {
        let app = app().await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/render/slides",
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_profile_lifecycle() {
        let app = app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/profiles",
            Some(json!({"profileId": " work "})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json_body(&body)["profile"]["profileId"], "work");

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/profiles",
            Some(json!({"profileId": "work"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (_, body) = send(&app, Method::GET, "/api/v1/profiles/active", None).await;
        assert_eq!(json_body(&body)["profile"]["profileId"], "work");

        let (_, body) = send(&app, Method::GET, "/api/v1/profiles", None).await;
        assert_eq!(json_body(&body).as_array().unwrap().len(), 2);

        let (status, body) = send(&app, Method::DELETE, "/api/v1/profiles/work", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["activeProfileId"], "default");

        let (status, _) = send(&app, Method::DELETE, "/api/v1/profiles/default", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_reserved_profile_names_are_rejected() {
        let app = app().await;
        for name in ["active", "work/side"] {
            let (status, body) = send(
                &app,
                Method::POST,
                "/api/v1/profiles",
                Some(json!({ "profileId": name })),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{name}");
            assert_eq!(json_body(&body)["error"]["code"], "VALIDATION_ERROR");
        }

        let (_, body) = send(&app, Method::GET, "/api/v1/profiles", None).await;
        let listed = json_body(&body);
        let ids: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|p| p["profileId"].as_str())
            .collect();
        assert_eq!(ids, vec!["default"]);
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_record() {
        let app = app().await;
        let mut raw = serde_json::to_value(default_resume()).unwrap();
        raw["ui"]["resume"]["template"] = json!("fancy");

        let (status, body) =
            send(&app, Method::PUT, "/api/v1/profiles/default", Some(raw)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body = json_body(&body);
        assert_eq!(body["error"]["code"], "INVALID_RESUME");
        assert_eq!(body["error"]["details"][0]["path"], "ui.resume.template");
    }

    #[tokio::test]
    async fn test_save_then_render_profile() {
        let app = app().await;
        let mut raw = serde_json::to_value(default_resume()).unwrap();
        raw["ui"]["resume"]["template"] = json!("ats");

        let (status, _) = send(&app, Method::PUT, "/api/v1/profiles/default", Some(raw)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/profiles/default/render/resume",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("data-template=\"ats\""));
        assert!(!html.contains("badge"));
    }

    #[tokio::test]
    async fn test_export_then_import_round_trips() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/profiles/default/export")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume.json\""
        );
        let exported = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/profiles/copy/import")
                    .body(Body::from(exported.clone()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(json_body(&body)["status"], "valid");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/profiles/copy/export")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let reexported = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(reexported, exported);
    }

    #[tokio::test]
    async fn test_import_rejects_non_json() {
        let app = app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/profiles/default/import")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
