//! In-process stand-in for the job board backend, served by axum on a random port.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::api_client::{CREATE_PATH, CSRF_HEADER, PROFILE_PATH, SKILLS_PATH};

#[derive(Clone)]
pub(crate) struct BackendConfig {
    pub skills: (StatusCode, Value),
    pub profile: (StatusCode, Value),
    pub create: (StatusCode, Value),
    pub create_delay: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            skills: (StatusCode::OK, json!([])),
            profile: (StatusCode::NOT_FOUND, json!({"detail": "Not found."})),
            create: (StatusCode::CREATED, json!({"message": "Profile created"})),
            create_delay: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedCreate {
    pub csrf_token: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct BackendState {
    config: Arc<BackendConfig>,
    creates: Arc<Mutex<Vec<RecordedCreate>>>,
}

pub(crate) struct FakeBackend {
    pub url: String,
    creates: Arc<Mutex<Vec<RecordedCreate>>>,
}

impl FakeBackend {
    pub fn creates(&self) -> Vec<RecordedCreate> {
        self.creates.lock().unwrap().clone()
    }
}

async fn handle_skills(State(state): State<BackendState>) -> (StatusCode, Json<Value>) {
    let (status, body) = state.config.skills.clone();
    (status, Json(body))
}

async fn handle_profile(State(state): State<BackendState>) -> (StatusCode, Json<Value>) {
    let (status, body) = state.config.profile.clone();
    (status, Json(body))
}

async fn handle_create(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let csrf_token = headers
        .get(CSRF_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .creates
        .lock()
        .unwrap()
        .push(RecordedCreate { csrf_token, body });

    if let Some(delay) = state.config.create_delay {
        tokio::time::sleep(delay).await;
    }

    let (status, body) = state.config.create.clone();
    (status, Json(body))
}

pub(crate) async fn spawn_backend(config: BackendConfig) -> Result<FakeBackend> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let creates = Arc::new(Mutex::new(Vec::new()));
    let state = BackendState {
        config: Arc::new(config),
        creates: creates.clone(),
    };
    let app = Router::new()
        .route(SKILLS_PATH, get(handle_skills))
        .route(PROFILE_PATH, get(handle_profile))
        .route(CREATE_PATH, post(handle_create))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(FakeBackend {
        url: format!("http://{addr}"),
        creates,
    })
}
