//! HTTP API gateway for LessonLens.
//!
//! Exposes REST endpoints for lesson discovery, question answering, and
//! static lesson content.
//!
//! Built on Axum for high performance async HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info};

use lessonlens_config::AppConfig;
use lessonlens_core::{Error, MediaDescriptor};
use lessonlens_engine::AnswerEngine;

/// Shared application state for the gateway.
pub struct AppState {
    pub engine: AnswerEngine,
    pub content_dir: PathBuf,
}

type SharedState = Arc<AppState>;

/// Build the Axum router with all gateway routes.
///
/// Lesson media under the content directory is served directly at
/// `/content/{lesson_id}/{file}` so clients can display what the answer
/// refers to.
pub fn build_router(state: SharedState) -> Router {
    let content_service = ServeDir::new(&state.content_dir);

    Router::new()
        .route("/health", get(health_handler))
        .route("/lessons", get(lessons_handler))
        .route("/ask", post(ask_handler))
        .nest_service("/content", content_service)
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let generator = lessonlens_providers::build_from_config(&config)?;
    let content_dir = config.content_dir.clone();
    let engine = AnswerEngine::new(generator, &content_dir);

    let state = Arc::new(AppState {
        engine,
        content_dir,
    });

    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn lessons_handler(
    State(state): State<SharedState>,
) -> Result<Json<Vec<lessonlens_core::LessonSummary>>, (StatusCode, Json<serde_json::Value>)> {
    match lessonlens_knowledge::list_lessons(&state.content_dir).await {
        Ok(lessons) => Ok(Json(lessons)),
        Err(e) => {
            error!(error = %e, "Failed to list lessons");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to list lessons"})),
            ))
        }
    }
}

#[derive(Deserialize)]
struct AskRequest {
    question: String,
    lesson_id: String,
    #[serde(default)]
    mode: Option<String>,
}

#[derive(Serialize)]
struct AskResponse {
    answer: String,
    /// `null` when the answer has no media to display.
    media: Option<MediaDescriptor>,
    lesson_id: String,
}

async fn ask_handler(
    State(state): State<SharedState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<serde_json::Value>)> {
    let mode = lessonlens_core::QueryMode::from_param(payload.mode.as_deref());

    match state
        .engine
        .answer(&payload.question, &payload.lesson_id, mode)
        .await
    {
        Ok(answer) => Ok(Json(AskResponse {
            answer: answer.answer,
            media: answer.media,
            lesson_id: answer.lesson_id,
        })),
        Err(Error::LessonNotFound { lesson_id }) => {
            info!(lesson_id, "Lesson not found");
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Lesson not found"})),
            ))
        }
        Err(Error::Knowledge(e)) => {
            error!(error = %e, lesson_id = payload.lesson_id, "Failed to load lesson content");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to load lesson content."})),
            ))
        }
        Err(e) => {
            // The internal cause stays in the logs; clients get a generic message.
            error!(error = %e, lesson_id = payload.lesson_id, "Answer generation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to generate a response from the AI model."})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use lessonlens_core::{GenerationError, Generator, PromptBundle};
    use std::path::Path;
    use tower::ServiceExt;

    struct CannedGenerator(String);

    #[async_trait]
    impl Generator for CannedGenerator {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate(
            &self,
            _bundle: &PromptBundle,
        ) -> Result<String, GenerationError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(
            &self,
            _bundle: &PromptBundle,
        ) -> Result<String, GenerationError> {
            Err(GenerationError::Network("connection reset".into()))
        }
    }

    fn test_app(content_dir: &Path, generator: Arc<dyn Generator>) -> Router {
        let state = Arc::new(AppState {
            engine: AnswerEngine::new(generator, content_dir),
            content_dir: content_dir.to_path_buf(),
        });
        build_router(state)
    }

    fn write_lesson(root: &Path, id: &str, manifest: &str) {
        let dir = root.join(id);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("manifest.json"), manifest).unwrap();
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn ask_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ask")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let tmp = tempfile::tempdir().unwrap();
        let app = test_app(tmp.path(), Arc::new(CannedGenerator("x".into())));

        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn lessons_endpoint_lists_manifests() {
        let tmp = tempfile::tempdir().unwrap();
        write_lesson(tmp.path(), "water_cycle", r#"{"title": "The Water Cycle"}"#);
        write_lesson(tmp.path(), "volcanoes", r#"{"title": "Volcanoes"}"#);
        let app = test_app(tmp.path(), Arc::new(CannedGenerator("x".into())));

        let req = Request::builder()
            .uri("/lessons")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let lessons = json.as_array().unwrap();
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0]["id"], "volcanoes");
        assert_eq!(lessons[0]["title"], "Volcanoes");
        assert_eq!(lessons[1]["id"], "water_cycle");
    }

    #[tokio::test]
    async fn ask_unknown_lesson_is_404() {
        let tmp = tempfile::tempdir().unwrap();
        let app = test_app(tmp.path(), Arc::new(CannedGenerator("x".into())));

        let response = app
            .oneshot(ask_request(json!({
                "question": "why does it rain?",
                "lesson_id": "ghost"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Lesson not found");
    }

    #[tokio::test]
    async fn ask_returns_answer_with_null_media() {
        let tmp = tempfile::tempdir().unwrap();
        write_lesson(
            tmp.path(),
            "water_cycle",
            r#"{
                "title": "The Water Cycle",
                "summary": "How water moves.",
                "modules": [{"topic": "rain", "text_content": "water falls", "related_media": []}]
            }"#,
        );
        let app = test_app(tmp.path(), Arc::new(CannedGenerator("Rain falls.".into())));

        let response = app
            .oneshot(ask_request(json!({
                "question": "tell me about rain",
                "lesson_id": "water_cycle"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["answer"], "Rain falls.");
        assert!(json["media"].is_null());
        assert_eq!(json["lesson_id"], "water_cycle");
    }

    #[tokio::test]
    async fn ask_returns_media_descriptor_for_matched_image() {
        let tmp = tempfile::tempdir().unwrap();
        write_lesson(
            tmp.path(),
            "water_cycle",
            r#"{
                "title": "The Water Cycle",
                "summary": "How water moves.",
                "modules": [{
                    "topic": "evaporation",
                    "text_content": "water turns to vapor",
                    "related_media": ["vapor.png"]
                }]
            }"#,
        );
        std::fs::write(tmp.path().join("water_cycle/vapor.png"), b"png-bytes").unwrap();
        let app = test_app(tmp.path(), Arc::new(CannedGenerator("ok".into())));

        let response = app
            .oneshot(ask_request(json!({
                "question": "what is evaporation",
                "lesson_id": "water_cycle",
                "mode": "visual_assist"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["media"]["path"], "vapor.png");
        assert_eq!(json["media"]["type"], "image");
    }

    #[tokio::test]
    async fn generation_failure_is_500_with_generic_message() {
        let tmp = tempfile::tempdir().unwrap();
        write_lesson(
            tmp.path(),
            "water_cycle",
            r#"{"title": "L", "summary": "S", "modules": []}"#,
        );
        let app = test_app(tmp.path(), Arc::new(FailingGenerator));

        let response = app
            .oneshot(ask_request(json!({
                "question": "overview please",
                "lesson_id": "water_cycle"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Failed to generate a response from the AI model."
        );
    }

    #[tokio::test]
    async fn broken_manifest_is_500_without_model_message() {
        let tmp = tempfile::tempdir().unwrap();
        write_lesson(tmp.path(), "water_cycle", "{not json");
        let app = test_app(tmp.path(), Arc::new(CannedGenerator("x".into())));

        let response = app
            .oneshot(ask_request(json!({
                "question": "why does it rain?",
                "lesson_id": "water_cycle"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to load lesson content.");
    }

    #[tokio::test]
    async fn content_route_serves_lesson_files() {
        let tmp = tempfile::tempdir().unwrap();
        write_lesson(tmp.path(), "water_cycle", r#"{"title": "L"}"#);
        std::fs::write(tmp.path().join("water_cycle/diagram.png"), b"png-bytes").unwrap();
        let app = test_app(tmp.path(), Arc::new(CannedGenerator("x".into())));

        let req = Request::builder()
            .uri("/content/water_cycle/diagram.png")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"png-bytes");
    }
}
