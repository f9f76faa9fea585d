//! HTTP + WebSocket API for Raksha
//!
//! Endpoints:
//! - POST /analyze - Stateless message analysis
//! - POST /watch/new - Create watcher session
//! - GET /watch/{id} - Get session status
//! - POST /watch/{id}/start - Start listening (clears transcript and alert)
//! - POST /watch/{id}/stop - Stop listening
//! - POST /watch/{id}/event - Feed one transcript source event
//! - WS /ws/{id} - Live updates
//! - GET /health - Health check

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{MessageAnalyzer, TranscriptWatcher};
use crate::types::{AnalysisResult, SourceEvent};

/// One watcher session
#[derive(Debug)]
pub struct WatchSession {
    pub id: String,
    pub watcher: TranscriptWatcher,
    pub update_tx: broadcast::Sender<WatchUpdate>,
}

/// Live update message
#[derive(Debug, Clone, Serialize)]
pub struct WatchUpdate {
    pub state: String,
    pub detected: bool,
    pub word: Option<String>,
    pub alert_fired: bool,
    pub transcript_chars: usize,
}

/// App state
pub struct AppState {
    pub analyzer: MessageAnalyzer,
    pub sessions: RwLock<HashMap<String, WatchSession>>,
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Create new watch session response
#[derive(Debug, Serialize)]
pub struct NewWatchResponse {
    pub watch_id: String,
    pub websocket_url: String,
}

/// Watch session status response
#[derive(Debug, Serialize)]
pub struct WatchStatusResponse {
    pub watch_id: String,
    pub state: String,
    pub detected: bool,
    pub word: Option<String>,
    pub transcript: String,
    pub event_count: u64,
    pub last_error: Option<String>,
}

/// Event response
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub state: String,
    pub detected: bool,
    pub word: Option<String>,
    pub alert_fired: bool,
    pub reason: String,
    pub error: Option<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub watchers_active: usize,
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(AppState {
        analyzer: MessageAnalyzer::new(),
        sessions: RwLock::new(HashMap::new()),
    });

    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/watch/new", post(create_watch))
        .route("/watch/:id", get(get_watch))
        .route("/watch/:id/start", post(start_watch))
        .route("/watch/:id/stop", post(stop_watch))
        .route("/watch/:id/event", post(push_event))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        watchers_active: sessions.len(),
    })
}

/// Stateless message analysis
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    Json(state.analyzer.analyze(&req.text))
}

/// Create new watch session
async fn create_watch(State(state): State<Arc<AppState>>) -> Json<NewWatchResponse> {
    let watch_id = generate_watch_id();
    let (tx, _) = broadcast::channel(100);

    let session = WatchSession {
        id: watch_id.clone(),
        watcher: TranscriptWatcher::new(),
        update_tx: tx,
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(watch_id.clone(), session);

    Json(NewWatchResponse {
        watch_id: watch_id.clone(),
        websocket_url: format!("/ws/{}", watch_id),
    })
}

/// Get watch session status
async fn get_watch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WatchStatusResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(WatchStatusResponse {
        watch_id: session.id.clone(),
        state: session.watcher.state().to_string(),
        detected: session.watcher.alert().detected,
        word: session.watcher.alert().word.clone(),
        transcript: session.watcher.transcript(),
        event_count: session.watcher.event_count(),
        last_error: session.watcher.last_error().map(str::to_string),
    }))
}

/// Start listening on a session
async fn start_watch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let output = session.watcher.start();
    broadcast_update(session, &output);
    Ok(Json(event_response(&output)))
}

/// Stop listening on a session
async fn stop_watch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let output = session.watcher.stop();
    broadcast_update(session, &output);
    Ok(Json(event_response(&output)))
}

/// Feed one source event to a session
async fn push_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(event): Json<SourceEvent>,
) -> Result<Json<EventResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let output = session.watcher.on_event(event);
    broadcast_update(session, &output);
    Ok(Json(event_response(&output)))
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let rx = session.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Handle WebSocket connection
async fn handle_websocket(mut socket: WebSocket, mut rx: broadcast::Receiver<WatchUpdate>) {
    while let Ok(update) = rx.recv().await {
        let json = serde_json::to_string(&update).unwrap_or_default();
        if socket.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

fn broadcast_update(session: &WatchSession, output: &crate::types::WatchOutput) {
    let update = WatchUpdate {
        state: output.state.to_string(),
        detected: output.alert.detected,
        word: output.alert.word.clone(),
        alert_fired: output.alert_fired,
        transcript_chars: output.transcript_chars,
    };
    let _ = session.update_tx.send(update);
}

fn event_response(output: &crate::types::WatchOutput) -> EventResponse {
    EventResponse {
        state: output.state.to_string(),
        detected: output.alert.detected,
        word: output.alert.word.clone(),
        alert_fired: output.alert_fired,
        reason: output.reason.code().to_string(),
        error: output.error.clone(),
    }
}

/// Generate watch session ID
fn generate_watch_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("watch_{:x}", nanos as u64)
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("🛡 Raksha API running on {}", addr);
    println!("  POST /analyze          - Analyze a message");
    println!("  POST /watch/new        - Create watch session");
    println!("  GET  /watch/:id        - Get status");
    println!("  POST /watch/:id/start  - Start listening");
    println!("  POST /watch/:id/stop   - Stop listening");
    println!("  POST /watch/:id/event  - Feed transcript event");
    println!("  WS   /ws/:id           - Live updates");
    println!("  GET  /health           - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
