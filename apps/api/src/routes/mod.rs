pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::letter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-cover-letter",
            post(handlers::handle_generate),
        )
        .route("/api/cover-letter/options", get(handlers::handle_options))
        .route(
            "/api/cover-letter/download",
            post(handlers::handle_download),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()), // TODO: restrict origins to the form's host
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::letter::gateway::LetterGateway;
    use crate::llm_client::classify::AUTHENTICATION_MESSAGE;
    use crate::llm_client::testing::MockTransport;

    fn app_with(mock: &Arc<MockTransport>, api_key: Option<&str>) -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        let state = AppState {
            gateway: LetterGateway::new(mock.clone(), api_key.map(str::to_string)),
            config,
        };
        build_router(state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn form_body() -> Value {
        json!({
            "template": "standard",
            "fullName": "Alan Turing",
            "currentRole": "",
            "yearsOfExperience": "",
            "keySkills": "Cryptanalysis",
            "achievements": "",
            "companyName": "Bletchley Park",
            "jobTitle": "Codebreaker",
            "hiringManager": "",
            "jobDescription": "",
            "motivation": "",
            "tone": "professional",
            "length": "standard",
            "useAI": true
        })
    }

    #[tokio::test]
    async fn test_health() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let response = app_with(&mock, Some("sk"))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "coverletter-api");
        assert_eq!(json["model"], crate::llm_client::MODEL);
        assert_eq!(json["provider"], crate::llm_client::DEFAULT_BASE_URL);
        assert_eq!(json["credential_configured"], true);
        assert!(!json.to_string().contains("\"sk\""));
    }

    #[tokio::test]
    async fn test_generate_returns_letter() {
        let mock = Arc::new(MockTransport::new(
            200,
            r#"{"choices":[{"message":{"content":"Dear Hiring Manager, ..."}}]}"#,
        ));
        let response = app_with(&mock, Some("sk"))
            .oneshot(post_json("/api/generate-cover-letter", form_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "letter": "Dear Hiring Manager, ..." })
        );
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_missing_name_is_400_without_call() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let mut body = form_body();
        body["fullName"] = json!("");

        let response = app_with(&mock, Some("sk"))
            .oneshot(post_json("/api/generate-cover-letter", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            crate::errors::MISSING_FIELDS_MESSAGE
        );
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_absent_fields_are_400_not_422() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let response = app_with(&mock, Some("sk"))
            .oneshot(post_json("/api/generate-cover-letter", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(mock.calls(), 0);
    }

    fn post_raw(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_malformed_body_is_json_error() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let response = app_with(&mock, Some("sk"))
            .oneshot(post_raw("/api/generate-cover-letter", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("JSON"), "{json}");
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_wrong_content_type_is_json_error() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate-cover-letter")
            .body(Body::from(form_body().to_string()))
            .unwrap();

        let response = app_with(&mock, Some("sk")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body_json(response).await["error"].is_string());
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_download_malformed_body_is_json_error() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let response = app_with(&mock, None)
            .oneshot(post_raw("/api/cover-letter/download", "[1, 2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_generate_null_hiring_manager_uses_placeholder() {
        let mock = Arc::new(MockTransport::new(
            200,
            r#"{"choices":[{"message":{"content":"Dear Hiring Manager, ..."}}]}"#,
        ));
        let mut body = form_body();
        body["hiringManager"] = Value::Null;
        body["motivation"] = Value::Null;

        let response = app_with(&mock, Some("sk"))
            .oneshot(post_json("/api/generate-cover-letter", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let prompt = mock.last_prompt().unwrap();
        assert!(prompt.contains("Hiring Manager: Not provided"));
        assert!(prompt.contains("Salutation: Dear Hiring Manager,"));
        assert!(prompt.contains("Motivation/Interest: Not provided"));
    }

    #[tokio::test]
    async fn test_generate_null_full_name_is_400() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let mut body = form_body();
        body["fullName"] = Value::Null;

        let response = app_with(&mock, Some("sk"))
            .oneshot(post_json("/api/generate-cover-letter", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            crate::errors::MISSING_FIELDS_MESSAGE
        );
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_unreachable_provider_is_502() {
        let mock = Arc::new(MockTransport::unreachable());
        let response = app_with(&mock, Some("sk"))
            .oneshot(post_json("/api/generate-cover-letter", form_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await,
            json!({ "error": crate::errors::TRANSPORT_MESSAGE })
        );
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_without_key_is_500() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let response = app_with(&mock, None)
            .oneshot(post_json("/api/generate-cover-letter", form_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            crate::errors::MISSING_KEY_MESSAGE
        );
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_provider_auth_error_passes_status() {
        let mock = Arc::new(MockTransport::new(
            401,
            r#"{"error":{"message":"No auth credentials found (authentication)"}}"#,
        ));
        let response = app_with(&mock, Some("sk-bad"))
            .oneshot(post_json("/api/generate-cover-letter", form_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({ "error": AUTHENTICATION_MESSAGE })
        );
    }

    #[tokio::test]
    async fn test_generate_empty_choices_is_500() {
        let mock = Arc::new(MockTransport::new(200, r#"{"choices":[]}"#));
        let response = app_with(&mock, Some("sk"))
            .oneshot(post_json("/api/generate-cover-letter", form_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            crate::errors::EMPTY_RESPONSE_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_options_lists_catalog() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let response = app_with(&mock, None)
            .oneshot(
                Request::get("/api/cover-letter/options")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["templates"][0]["id"], "standard");
        assert_eq!(json["tones"].as_array().unwrap().len(), 3);
        assert_eq!(json["lengths"][2]["words"], "400-500 words");
    }

    #[tokio::test]
    async fn test_download_returns_attachment() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let response = app_with(&mock, None)
            .oneshot(post_json(
                "/api/cover-letter/download",
                json!({ "companyName": "Acme Corp", "letter": "Dear Hiring Manager,\nHi" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"cover-letter-Acme-Corp.txt\""
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Dear Hiring Manager,\nHi");
    }

    #[tokio::test]
    async fn test_download_empty_letter_is_400() {
        let mock = Arc::new(MockTransport::new(200, "{}"));
        let response = app_with(&mock, None)
            .oneshot(post_json(
                "/api/cover-letter/download",
                json!({ "companyName": "Acme", "letter": "" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "letter cannot be empty"
        );
    }
}
