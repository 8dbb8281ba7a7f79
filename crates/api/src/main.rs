use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Json, State};
use axum::routing::{get, post};
use axum::Router;
use gemini_brain::GeminiBrain;
use orchestrator::{ChatReply, ConversationOrchestrator};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Clone)]
struct AppState {
    orchestrator: Arc<ConversationOrchestrator<GeminiBrain>>,
}

#[derive(Debug, Deserialize)]
struct SpeechRequest {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct Health {
    status: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let orchestrator =
        ConversationOrchestrator::from_env().expect("Failed to initialize orchestrator");

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/process-speech", post(process_speech))
        .with_state(state);

    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{port}").parse().expect("Invalid PORT");
    info!(%addr, "Tone-reply API listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// One conversational turn. Always 200: degraded outcomes arrive as a
/// well-formed reply body, never as an error status.
async fn process_speech(
    State(state): State<AppState>,
    Json(payload): Json<SpeechRequest>,
) -> Json<ChatReply> {
    Json(state.orchestrator.process(&payload.text).await)
}
