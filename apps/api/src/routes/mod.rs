pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::auth::handlers as auth;
use crate::documents::descriptions;
use crate::documents::resumes::{self, UPLOAD_BODY_LIMIT};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload = post(resumes::handle_upload_resume).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(health::api_root))
        // Accounts
        .route("/api/register", post(auth::handle_register))
        .route("/api/login", post(auth::handle_login))
        .route("/api/verify-token", get(auth::handle_verify_token))
        // Résumés
        .route(
            "/api/resume",
            upload
                .clone()
                .put(resumes::handle_rename_resume)
                .delete(resumes::handle_delete_resume),
        )
        .route("/api/resume-upload", upload)
        .route("/api/resumes/:email", get(resumes::handle_list_resumes))
        // Job descriptions
        .route(
            "/api/job-description",
            post(descriptions::handle_create_description)
                .put(descriptions::handle_rename_description)
                .delete(descriptions::handle_delete_description),
        )
        .route(
            "/api/job-descriptions/:email",
            get(descriptions::handle_list_descriptions),
        )
        // Analysis
        .route("/api/comparison", post(analysis::handle_comparison))
        .route("/api/analyze", post(analysis::handle_analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::JwtKeys;
    use crate::extract::tests::docx_with_paragraphs;
    use crate::llm_client::feedback::FeedbackCategory;
    use crate::llm_client::{Feedback, FeedbackClient, FeedbackItem, LlmError};
    use crate::models::resume::DOCX_CONTENT_TYPE;
    use crate::store::MemoryStore;

    const BOUNDARY: &str = "fitscore-test-boundary";

    struct StubFeedback;

    #[async_trait]
    impl FeedbackClient for StubFeedback {
        async fn feedback(&self, _: &str, _: &str) -> Result<Feedback, LlmError> {
            Ok(Feedback {
                matching_keywords: vec!["Experience".to_string()],
                feedback: vec![FeedbackItem {
                    category: FeedbackCategory::Skills,
                    text: "List certifications.".to_string(),
                }],
            })
        }
    }

    fn app() -> Router {
        build_router(AppState {
            store: Arc::new(MemoryStore::new()),
            feedback: Arc::new(StubFeedback),
            jwt: JwtKeys::new(b"test-secret"),
        })
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn upload_request(file_name: &str, content_type: &str, data: &[u8], email: &str) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"email\"\r\n\r\n{email}\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume_file\"; \
                 filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn error_message(response: Response) -> String {
        body_json(response).await["error"]["message"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let app = app();
        let response = send(&app, get_request("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");

        let response = send(&app, get_request("/api")).await;
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"API is running");
    }

    #[tokio::test]
    async fn test_register_login_verify() {
        let app = app();
        let account = json!({"email": "jane@example.com", "password": "secret1", "username": "jane"});

        let response = send(&app, json_request("POST", "/api/register", account.clone())).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["message"], "User registered successfully");

        let response = send(&app, json_request("POST", "/api/register", account)).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(error_message(response).await, "Email already in use");

        let response = send(
            &app,
            json_request("POST", "/api/login", json!({"email": "jane@example.com", "password": "wrong1"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(
            &app,
            json_request("POST", "/api/login", json!({"email": "jane@example.com", "password": "secret1"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let token = body_json(response).await["token"].as_str().unwrap().to_string();

        let bearer = Request::builder()
            .uri("/api/verify-token")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let response = send(&app, bearer).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["email"], "jane@example.com");

        let cookie = Request::builder()
            .uri("/api/verify-token")
            .header(header::COOKIE, format!("theme=dark; token={token}"))
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(&app, cookie).await.status(), StatusCode::OK);

        let response = send(&app, get_request("/api/verify-token")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let app = app();
        let response = send(
            &app,
            json_request("POST", "/api/register", json!({"email": "jane@example.com"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(response).await, "Missing required fields.");
    }

    #[tokio::test]
    async fn test_description_crud() {
        let app = app();
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/job-description",
                json!({"email": "test@got.com", "name": "ChildCare", "job_description": "Requires experience in early childhood development..."}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["message"], "Job description submitted successfully.");
        assert_eq!(created["status"], "success");
        let id = created["id"].as_str().unwrap().to_string();

        let response = send(
            &app,
            json_request("PUT", "/api/job-description", json!({"id": id, "name": "Daycare"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let listed = body_json(send(&app, get_request("/api/job-descriptions/test@got.com")).await).await;
        assert_eq!(listed["descriptions"].as_array().unwrap().len(), 1);
        assert_eq!(listed["descriptions"][0]["name"], "Daycare");

        let response = send(&app, json_request("DELETE", "/api/job-description", json!({"id": id}))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = send(&app, json_request("DELETE", "/api/job-description", json!({"id": id}))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_description_over_limit_rejected() {
        let app = app();
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/job-description",
                json!({"email": "a@b.io", "name": "Big", "job_description": "x".repeat(5001)}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_message(response).await,
            "Job description exceeds character limit of 5000."
        );
    }

    #[tokio::test]
    async fn test_upload_then_compare_and_analyze() {
        let app = app();
        let docx = docx_with_paragraphs(&["I have experience in early childhood development"]);

        let response = send(&app, upload_request("cv.docx", DOCX_CONTENT_TYPE, &docx, "test@proton.com")).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let uploaded = body_json(response).await;
        assert_eq!(uploaded["message"], "Resume uploaded successfully.");
        let resume_id = uploaded["id"].as_str().unwrap().to_string();

        let listed = body_json(send(&app, get_request("/api/resumes/test@proton.com")).await).await;
        assert_eq!(listed["resumes"][0]["name"], "cv.docx");
        assert!(listed["resumes"][0].get("data").is_none());

        let created = body_json(
            send(
                &app,
                json_request(
                    "POST",
                    "/api/job-description",
                    json!({"email": "test@proton.com", "name": "ChildCare", "job_description": "Requires experience in early childhood development..."}),
                ),
            )
            .await,
        )
        .await;
        let description_id = created["id"].as_str().unwrap().to_string();
        let pair = json!({"resume_id": resume_id, "description_id": description_id});

        let response = send(&app, json_request("POST", "/api/comparison", pair.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"fit_score": 0.8333333333333334}));

        let response = send(&app, json_request("POST", "/api/analyze", pair)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let analysis = body_json(response).await;
        assert_eq!(analysis["fit_score"], 83);
        assert_eq!(analysis["matching_keywords"], json!(["Experience"]));
        assert_eq!(analysis["feedback"][0]["category"], "skills");
    }

    #[tokio::test]
    async fn test_analyze_without_resume_id() {
        let app = app();
        let response = send(
            &app,
            json_request("POST", "/api/analyze", json!({"resume_id": "", "description_id": "x"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(response).await, "Resume Id not given.");
    }

    #[tokio::test]
    async fn test_upload_rejects_wrong_type() {
        let app = app();
        let response = send(&app, upload_request("cv.txt", "text/plain", b"hello", "a@b.io")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_message(response).await,
            "Invalid file type. Only PDF or DOCX files are allowed."
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let app = app();
        let data = vec![b'a'; resumes::MAX_RESUME_BYTES + 1];
        let response = send(&app, upload_request("cv.pdf", "application/pdf", &data, "a@b.io")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(response).await, "File size exceeds the 2MB limit.");
    }

    #[tokio::test]
    async fn test_rename_unknown_resume_is_not_found() {
        let app = app();
        let response = send(
            &app,
            json_request(
                "PUT",
                "/api/resume",
                json!({"id": uuid::Uuid::new_v4(), "name": "new"}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
