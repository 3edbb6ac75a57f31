//! In-process session server.
//!
//! Serves the three endpoints the controller uses with the same cookie
//! semantics as the real server: a successful login sets `auth_cookie`,
//! logout deletes it, and `/api/status` reports what the cookie maps to.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const COOKIE_NAME: &str = "auth_cookie";
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "password";

/// Lifetime of the session cookie the real server sets.
pub const COOKIE_MAX_AGE: u64 = 600;

#[derive(Debug, Deserialize)]
struct LoginBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug)]
struct ServerState {
    /// cookie value -> session id
    sessions: Mutex<HashMap<String, String>>,
    cookie_max_age: u64,
    malformed_status: AtomicBool,
    status_calls: AtomicUsize,
}

/// Running fake server. Stops when dropped.
pub struct FakeServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
    handle: JoinHandle<()>,
}

impl FakeServer {
    /// Bind an ephemeral localhost port and start serving.
    pub async fn start() -> Self {
        Self::start_with_cookie_max_age(COOKIE_MAX_AGE).await
    }

    /// Like [`start`](Self::start), with a custom session cookie lifetime.
    pub async fn start_with_cookie_max_age(cookie_max_age: u64) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake server");
        let addr = listener.local_addr().expect("fake server address");

        let state = Arc::new(ServerState {
            sessions: Mutex::new(HashMap::new()),
            cookie_max_age,
            malformed_status: AtomicBool::new(false),
            status_calls: AtomicUsize::new(0),
        });
        let router = Router::new()
            .route("/login", post(login))
            .route("/logout", post(logout))
            .route("/api/status", get(status))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Forget every session, as a server-side expiry would. Cookies held
    /// by clients stay set.
    pub fn expire_sessions(&self) {
        self.state.sessions.lock().clear();
    }

    /// Serve a non-JSON body from `/api/status`.
    pub fn set_malformed_status(&self, malformed: bool) {
        self.state.malformed_status.store(malformed, Ordering::SeqCst);
    }

    pub fn session_count(&self) -> usize {
        self.state.sessions.lock().len()
    }

    pub fn status_calls(&self) -> usize {
        self.state.status_calls.load(Ordering::SeqCst)
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn auth_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| value.to_string())
}

async fn login(State(state): State<Arc<ServerState>>, Json(body): Json<LoginBody>) -> Response {
    if body.username != USERNAME || body.password != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        )
            .into_response();
    }

    let cookie_value = uuid::Uuid::new_v4().simple().to_string();
    let session_id = uuid::Uuid::new_v4().simple().to_string()[..16].to_string();

    {
        let mut sessions = state.sessions.lock();
        sessions.clear();
        sessions.insert(cookie_value.clone(), session_id);
    }

    let set_cookie = format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
        COOKIE_NAME, cookie_value, state.cookie_max_age
    );
    (
        [(header::SET_COOKIE, set_cookie)],
        Json(json!({ "status": "ok" })),
    )
        .into_response()
}

async fn logout(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    if let Some(cookie) = auth_cookie(&headers) {
        state.sessions.lock().remove(&cookie);
    }

    let set_cookie = format!("{}=; Max-Age=0; Path=/", COOKIE_NAME);
    (
        [(header::SET_COOKIE, set_cookie)],
        Json(json!({ "status": "ok" })),
    )
        .into_response()
}

async fn status(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    state.status_calls.fetch_add(1, Ordering::SeqCst);

    if state.malformed_status.load(Ordering::SeqCst) {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    let cookie = auth_cookie(&headers);
    let session_id = cookie
        .as_ref()
        .and_then(|value| state.sessions.lock().get(value).cloned());

    match session_id {
        Some(session_id) => Json(json!({
            "authenticated": true,
            "session_id": session_id,
            "cookie_present": true,
        }))
        .into_response(),
        None => Json(json!({
            "authenticated": false,
            "cookie_present": cookie.is_some(),
        }))
        .into_response(),
    }
}
