use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const PDF_BYTES: &[u8] =
    b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\ntrailer << /Root 1 0 R >>\n%%EOF\n";

/// How the mock deviates from the real service, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Conforming,
    /// Answers generation requests with HTML instead of a PDF.
    NotPdf,
    /// Answers generation requests with a plain-text 500.
    ServerError,
    /// Renders an empty `htmlTable` instead of rejecting it.
    AcceptsEmpty,
    /// Health probe answers 503.
    Unhealthy,
}

#[derive(Clone)]
struct AppState {
    behaviour: Behaviour,
    requests: Arc<AtomicUsize>,
}

pub struct MockService {
    base_url: String,
    requests: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl MockService {
    pub async fn start() -> Self {
        Self::with_behaviour(Behaviour::Conforming).await
    }

    pub async fn with_behaviour(behaviour: Behaviour) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock service");
        let addr = listener.local_addr().expect("mock service address");

        let requests = Arc::new(AtomicUsize::new(0));
        let state = AppState {
            behaviour,
            requests: Arc::clone(&requests),
        };
        let app = Router::new()
            .route("/", get(health))
            .route("/api/generate-pdf", post(generate_pdf))
            .with_state(state);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock service");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

async fn health(State(state): State<AppState>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    if state.behaviour == Behaviour::Unhealthy {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unhealthy", "message": "renderer pool exhausted" })),
        )
            .into_response();
    }
    Json(json!({ "status": "healthy", "message": "PDF Generator API is running" })).into_response()
}

async fn generate_pdf(State(state): State<AppState>, body: Bytes) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    if state.behaviour == Behaviour::ServerError {
        return (StatusCode::INTERNAL_SERVER_ERROR, "renderer crashed").into_response();
    }

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Request body must be JSON" })),
            )
                .into_response();
        }
    };

    match payload.get("htmlTable").and_then(Value::as_str) {
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing htmlTable field" })),
        )
            .into_response(),
        Some("") if state.behaviour != Behaviour::AcceptsEmpty => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "htmlTable cannot be empty" })),
        )
            .into_response(),
        Some(_) if state.behaviour == Behaviour::NotPdf => (
            [(header::CONTENT_TYPE, "text/html")],
            "<html><body>not a pdf</body></html>",
        )
            .into_response(),
        Some(_) => ([(header::CONTENT_TYPE, "application/pdf")], PDF_BYTES).into_response(),
    }
}
