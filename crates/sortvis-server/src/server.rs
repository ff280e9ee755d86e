//! Axum web server with WebSocket streaming for playback.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sortvis_algorithms::{AlgorithmProvider, BuiltinProvider};
use sortvis_engine::EngineKind;
use sortvis_playback::{Direction, PlaybackController, PlaybackStatus, RenderSnapshot};
use tokio::sync::{broadcast, Mutex};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::config::{ServerConfig, MAX_ARRAY_SIZE};
use crate::error::{Error, Result};
use crate::frame_loop::FrameDriver;
use crate::input;

/// Buffered updates per WebSocket client before it starts lagging.
const UPDATE_CHANNEL_CAPACITY: usize = 256;

/// Shared application state.
pub struct AppState {
    // Engines and listeners are Send but not Sync.
    controller: Mutex<PlaybackController>,
    provider: Arc<dyn AlgorithmProvider>,
    config: ServerConfig,
    updates: broadcast::Sender<String>,
}

impl AppState {
    pub fn controller(&self) -> &Mutex<PlaybackController> {
        &self.controller
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Receive serialized status and frame updates.
    pub fn subscribe_updates(&self) -> broadcast::Receiver<String> {
        self.updates.subscribe()
    }
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a server and load the configured startup run.
    pub fn new(config: ServerConfig) -> Result<Self> {
        Self::with_provider(config, Arc::new(BuiltinProvider))
    }

    pub fn with_provider(config: ServerConfig, provider: Arc<dyn AlgorithmProvider>) -> Result<Self> {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        let mut controller = PlaybackController::new(config.playback);

        let tx = updates.clone();
        controller.subscribe(move |status| {
            broadcast_update(&tx, || WsResponse::Status(status.clone()));
        });
        let tx = updates.clone();
        controller.on_render(move |snapshot| {
            broadcast_update(&tx, || WsResponse::Snapshot(RenderSnapshot::clone(snapshot)));
        });

        start_run(&mut controller, &provider, &config, RunRequest::default())?;

        Ok(Self {
            state: Arc::new(AppState {
                controller: Mutex::new(controller),
                provider,
                config,
                updates,
            }),
        })
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/status", get(status_handler))
            .route("/api/algorithms", get(algorithms_handler))
            .route("/api/snapshot", get(snapshot_handler))
            .route("/api/run", post(run_handler))
            .route("/api/playback", get(playback_status_handler))
            .route("/api/playback/play", post(play_handler))
            .route("/api/playback/play_backward", post(play_backward_handler))
            .route("/api/playback/pause", post(pause_handler))
            .route("/api/playback/reset", post(reset_handler))
            .route("/api/playback/seek", post(seek_handler))
            .route("/api/playback/speed", post(speed_handler))
            .route("/api/playback/step", post(step_handler))
            // WebSocket for real-time updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the frame driver and serve until the listener fails.
    pub async fn serve(self) -> Result<()> {
        let addr = self.state.config.addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let driver = FrameDriver::new(self.state(), self.state.config.frame_interval).spawn();

        info!("Visualization server running on http://{}", addr);
        let served = axum::serve(listener, self.router()).await;
        driver.abort();
        served?;
        Ok(())
    }
}

fn broadcast_update(tx: &broadcast::Sender<String>, update: impl FnOnce() -> WsResponse) {
    if tx.receiver_count() == 0 {
        return;
    }
    match serde_json::to_string(&update()) {
        Ok(json) => {
            // Only fails when every receiver has gone away.
            let _ = tx.send(json);
        }
        Err(e) => warn!("Failed to serialize update: {}", e),
    }
}

/// Parameters for a new run. Missing fields fall back to the server config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunRequest {
    pub algorithm: Option<String>,
    pub engine: Option<String>,
    pub size: Option<usize>,
    pub seed: Option<u64>,
}

fn start_run(
    controller: &mut PlaybackController,
    provider: &Arc<dyn AlgorithmProvider>,
    config: &ServerConfig,
    req: RunRequest,
) -> Result<()> {
    let algorithm = req.algorithm.unwrap_or_else(|| config.algorithm.clone());
    let engine = match req.engine.as_deref() {
        Some(name) => EngineKind::from_name(name)
            .ok_or_else(|| Error::InvalidInput(format!("unknown engine: {name}")))?,
        None => config.engine,
    };
    let size = req.size.unwrap_or(config.array_size);
    if size == 0 || size > MAX_ARRAY_SIZE {
        return Err(Error::InvalidInput(format!(
            "size must be between 1 and {MAX_ARRAY_SIZE}"
        )));
    }

    let array = input::shuffled(size, req.seed.or(config.seed));
    let engine = engine.create(Arc::clone(provider), config.streaming);
    controller.initialize(engine, &algorithm, &array)?;
    info!(algorithm = %algorithm, size, "run started");
    Ok(())
}

/// Server status response.
#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    algorithm: Option<String>,
    engine: Option<EngineKind>,
    array_size: usize,
    total_steps: usize,
    ws_clients: usize,
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let controller = state.controller.lock().await;
    Json(StatusResponse {
        status: "ok",
        algorithm: controller.algorithm().map(str::to_string),
        engine: controller.engine_kind(),
        array_size: controller.array().len(),
        total_steps: controller.total_steps(),
        ws_clients: state.updates.receiver_count(),
    })
}

#[derive(Serialize)]
struct AlgorithmsResponse {
    algorithms: Vec<&'static str>,
    live_algorithms: Vec<&'static str>,
    engines: Vec<EngineKind>,
}

async fn algorithms_handler(State(state): State<Arc<AppState>>) -> Json<AlgorithmsResponse> {
    Json(AlgorithmsResponse {
        algorithms: state.provider.list_algorithms(),
        live_algorithms: state.provider.list_live_algorithms(),
        engines: vec![EngineKind::Materializing, EngineKind::Streaming],
    })
}

async fn snapshot_handler(State(state): State<Arc<AppState>>) -> Json<RenderSnapshot> {
    let controller = state.controller.lock().await;
    Json(controller.snapshot())
}

async fn run_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RunRequest>,
) -> Result<Json<PlaybackStatus>> {
    let mut controller = state.controller.lock().await;
    start_run(&mut controller, &state.provider, &state.config, req)?;
    Ok(Json(controller.status()))
}

async fn playback_status_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let controller = state.controller.lock().await;
    Json(controller.status())
}

async fn play_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut controller = state.controller.lock().await;
    controller.play();
    Json(controller.status())
}

async fn play_backward_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut controller = state.controller.lock().await;
    controller.play_backward();
    Json(controller.status())
}

async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut controller = state.controller.lock().await;
    controller.pause();
    Json(controller.status())
}

async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut controller = state.controller.lock().await;
    controller.reset();
    Json(controller.status())
}

#[derive(Deserialize)]
struct SeekRequest {
    position: usize,
}

async fn seek_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeekRequest>,
) -> Json<PlaybackStatus> {
    let mut controller = state.controller.lock().await;
    controller.seek_to(req.position);
    Json(controller.status())
}

#[derive(Deserialize)]
struct SpeedRequest {
    speed: f64,
}

async fn speed_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeedRequest>,
) -> Json<PlaybackStatus> {
    let mut controller = state.controller.lock().await;
    controller.set_speed(req.speed);
    Json(controller.status())
}

#[derive(Deserialize)]
struct StepRequest {
    direction: Direction,
}

async fn step_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StepRequest>,
) -> Json<PlaybackStatus> {
    let mut controller = state.controller.lock().await;
    step(&mut controller, req.direction);
    Json(controller.status())
}

fn step(controller: &mut PlaybackController, direction: Direction) {
    match direction {
        Direction::Forward => controller.step_forward(),
        Direction::Backward => controller.step_backward(),
    }
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    debug!("WebSocket client connected");
    let mut updates = state.subscribe_updates();

    // Send initial snapshot and status
    let initial = {
        let controller = state.controller.lock().await;
        [
            WsResponse::Snapshot(controller.snapshot()),
            WsResponse::Status(controller.status()),
        ]
    };
    for response in initial {
        if send_response(&mut socket, &response).await.is_err() {
            return;
        }
    }

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let response = match serde_json::from_str::<WsCommand>(&text) {
                            Ok(cmd) => handle_ws_command(&state, cmd).await,
                            Err(e) => WsResponse::Error { message: e.to_string() },
                        };
                        if send_response(&mut socket, &response).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            update = updates.recv() => {
                match update {
                    Ok(json) => {
                        if socket.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        debug!(skipped, "WebSocket client lagging, dropped updates");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }
    debug!("WebSocket client disconnected");
}

async fn send_response(socket: &mut WebSocket, response: &WsResponse) -> std::result::Result<(), ()> {
    let json = serde_json::to_string(response).map_err(|e| {
        warn!("Failed to serialize response: {}", e);
    })?;
    socket.send(Message::Text(json.into())).await.map_err(|e| {
        debug!("Failed to send response: {}", e);
    })
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsCommand {
    GetSnapshot,
    GetStatus,
    Run(RunRequest),
    Play,
    PlayBackward,
    Pause,
    Reset,
    Seek { position: usize },
    Speed { speed: f64 },
    Step { direction: Direction },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsResponse {
    Snapshot(RenderSnapshot),
    Status(PlaybackStatus),
    Error { message: String },
}

async fn handle_ws_command(state: &Arc<AppState>, cmd: WsCommand) -> WsResponse {
    let mut controller = state.controller.lock().await;
    match cmd {
        WsCommand::GetSnapshot => return WsResponse::Snapshot(controller.snapshot()),
        WsCommand::GetStatus => {}
        WsCommand::Run(req) => {
            if let Err(e) = start_run(&mut controller, &state.provider, &state.config, req) {
                return WsResponse::Error { message: e.to_string() };
            }
        }
        WsCommand::Play => controller.play(),
        WsCommand::PlayBackward => controller.play_backward(),
        WsCommand::Pause => controller.pause(),
        WsCommand::Reset => controller.reset(),
        WsCommand::Seek { position } => controller.seek_to(position),
        WsCommand::Speed { speed } => controller.set_speed(speed),
        WsCommand::Step { direction } => step(&mut controller, direction),
    }
    WsResponse::Status(controller.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use sortvis_playback::PlaybackState;

    fn server() -> VisServer {
        let config = ServerConfig::default()
            .with_algorithm("bubble")
            .with_array_size(8)
            .with_seed(42);
        VisServer::new(config).unwrap()
    }

    #[test]
    fn server_creation() {
        let server = server();
        let controller = server.state.controller.try_lock().unwrap();
        assert_eq!(controller.algorithm(), Some("bubble"));
        assert_eq!(controller.array().len(), 8);
        assert_eq!(controller.state(), PlaybackState::Idle);
    }

    #[test]
    fn router_builds() {
        let server = server();
        let _router = server.router();
    }

    #[test]
    fn unknown_startup_algorithm_fails() {
        let config = ServerConfig::default().with_algorithm("bogo");
        assert!(VisServer::new(config).is_err());
    }

    #[tokio::test]
    async fn playback_controls() {
        let server = server();
        let state = server.state();

        let Json(status) = play_handler(State(state.clone())).await;
        assert_eq!(status.playback_state, PlaybackState::Playing);

        let Json(status) = pause_handler(State(state.clone())).await;
        assert_eq!(status.playback_state, PlaybackState::Paused);

        let Json(status) = step_handler(
            State(state.clone()),
            Json(StepRequest { direction: Direction::Forward }),
        )
        .await;
        assert_eq!(status.position, 1);

        let Json(status) = seek_handler(State(state.clone()), Json(SeekRequest { position: 5 })).await;
        assert_eq!(status.position, 5);

        let Json(status) = speed_handler(State(state.clone()), Json(SpeedRequest { speed: 0.0 })).await;
        assert_eq!(status.speed, 0.1);

        let Json(status) = reset_handler(State(state.clone())).await;
        assert_eq!(status.position, 0);
        assert_eq!(status.playback_state, PlaybackState::Idle);
    }

    #[tokio::test]
    async fn run_replaces_current_run() {
        let server = server();
        let req = RunRequest {
            algorithm: Some("insertion".into()),
            engine: Some("streaming".into()),
            size: Some(20),
            seed: Some(1),
        };

        let Json(status) = run_handler(State(server.state()), Json(req)).await.unwrap();
        assert_eq!(status.algorithm.as_deref(), Some("insertion"));
        assert_eq!(status.engine, Some(EngineKind::Streaming));
        assert_eq!(status.array.len(), 20);
        assert!(!status.supports_random_seek);
    }

    #[tokio::test]
    async fn bad_run_is_rejected_and_keeps_prior_run() {
        let server = server();
        let state = server.state();
        let before = state.controller.lock().await.array().to_vec();

        let req = RunRequest { algorithm: Some("bogo".into()), ..Default::default() };
        let err = run_handler(State(state.clone()), Json(req)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let req = RunRequest { size: Some(0), ..Default::default() };
        assert!(run_handler(State(state.clone()), Json(req)).await.is_err());

        let Json(status) = playback_status_handler(State(state)).await;
        assert_eq!(status.algorithm.as_deref(), Some("bubble"));
        assert_eq!(status.array, before);
        assert!(status.error.is_some());
    }

    #[tokio::test]
    async fn algorithm_listing() {
        let server = server();
        let Json(listing) = algorithms_handler(State(server.state())).await;
        assert!(listing.algorithms.contains(&"quicksort"));
        assert!(listing.live_algorithms.contains(&"bubble"));
        assert_eq!(listing.engines.len(), 2);
    }

    #[tokio::test]
    async fn ws_commands() {
        let server = server();
        let state = server.state();

        let cmd: WsCommand = serde_json::from_str(r#"{"type":"step","direction":"forward"}"#).unwrap();
        match handle_ws_command(&state, cmd).await {
            WsResponse::Status(status) => assert_eq!(status.position, 1),
            other => panic!("unexpected response: {other:?}"),
        }

        let cmd: WsCommand = serde_json::from_str(r#"{"type":"run","algorithm":"nope"}"#).unwrap();
        assert!(matches!(handle_ws_command(&state, cmd).await, WsResponse::Error { .. }));

        let cmd: WsCommand = serde_json::from_str(r#"{"type":"get_snapshot"}"#).unwrap();
        assert!(matches!(handle_ws_command(&state, cmd).await, WsResponse::Snapshot(_)));
    }

    #[tokio::test]
    async fn updates_are_broadcast() {
        let server = server();
        let state = server.state();
        let mut updates = state.subscribe_updates();

        play_handler(State(state.clone())).await;

        let status = updates.recv().await.unwrap();
        assert!(status.contains("\"type\":\"status\""));
        assert!(status.contains("\"playback_state\":\"playing\""));
        let frame = updates.recv().await.unwrap();
        assert!(frame.contains("\"type\":\"snapshot\""));
    }
}
