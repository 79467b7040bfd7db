use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use shared_types::AuthSettings;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One request the stub provider saw, decoded enough to assert on.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: &'static str,
    pub query: HashMap<String, String>,
    pub apikey: Option<String>,
    pub authorization: Option<String>,
    pub body: Value,
}

/// Shared state of the stub provider.
#[derive(Default)]
pub struct ProviderState {
    requests: Mutex<Vec<RecordedRequest>>,
    /// One-shot failure for the next auth endpoint hit: (status, message).
    fail_next: Mutex<Option<(u16, String)>>,
    /// When true, `/signup` behaves like an auto-confirming project and
    /// returns a session instead of a pending user.
    autoconfirm: Mutex<bool>,
}

/// A GoTrue-shaped stub listening on an ephemeral local port.
pub struct StubProvider {
    pub base_url: String,
    state: Arc<ProviderState>,
}

impl StubProvider {
    /// Settings pointing the client at this stub, with a configured site
    /// URL so redirect building is deterministic.
    pub fn settings(&self) -> AuthSettings {
        AuthSettings {
            auth_url: self.base_url.clone(),
            anon_key: "test-anon-key".to_string(),
            site_url: Some("https://webgolf.example".to_string()),
            deploy_url: None,
        }
    }

    /// Make the next `/token` or `/recover` call fail with this message.
    pub fn fail_next_with(&self, status: u16, message: &str) {
        *self.state.fail_next.lock().unwrap() = Some((status, message.to_string()));
    }

    pub fn set_autoconfirm(&self, enabled: bool) {
        *self.state.autoconfirm.lock().unwrap() = enabled;
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn recorded_for(&self, path: &str) -> Vec<RecordedRequest> {
        self.recorded()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

/// Start the stub provider on an ephemeral port and serve it in the
/// background for the rest of the test.
pub async fn spawn_provider() -> StubProvider {
    let state = Arc::new(ProviderState::default());

    let router = Router::new()
        .route("/token", post(token))
        .route("/signup", post(signup))
        .route("/recover", post(recover))
        .route("/logout", post(logout))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub provider");
    let addr = listener.local_addr().expect("stub provider address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub provider");
    });

    StubProvider {
        base_url: format!("http://{addr}"),
        state,
    }
}

fn record(
    state: &ProviderState,
    path: &'static str,
    query: &HashMap<String, String>,
    headers: &HeaderMap,
    body: &Value,
) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        path,
        query: query.clone(),
        apikey: header("apikey"),
        authorization: header("authorization"),
        body: body.clone(),
    });
}

fn take_failure(state: &ProviderState) -> Option<(u16, String)> {
    state.fail_next.lock().unwrap().take()
}

fn session_body(email: &str) -> Value {
    json!({
        "access_token": "stub-access-token",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "stub-refresh-token",
        "user": {"id": "user-1", "email": email, "aud": "authenticated"}
    })
}

fn body_email(body: &Value) -> &str {
    body.get("email")
        .and_then(Value::as_str)
        .unwrap_or("player@example.com")
}

async fn token(
    State(state): State<Arc<ProviderState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record(&state, "/token", &query, &headers, &body);

    if let Some((status, message)) = take_failure(&state) {
        return (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
            Json(json!({"error": "invalid_grant", "error_description": message})),
        );
    }

    (StatusCode::OK, Json(session_body(body_email(&body))))
}

async fn signup(
    State(state): State<Arc<ProviderState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record(&state, "/signup", &query, &headers, &body);

    if let Some((status, message)) = take_failure(&state) {
        return (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
            Json(json!({"code": status, "msg": message})),
        );
    }

    let email = body_email(&body);
    if *state.autoconfirm.lock().unwrap() {
        (StatusCode::OK, Json(session_body(email)))
    } else {
        (
            StatusCode::OK,
            Json(json!({
                "id": "user-2",
                "email": email,
                "confirmation_sent_at": "2026-08-06T12:00:00Z"
            })),
        )
    }
}

async fn recover(
    State(state): State<Arc<ProviderState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record(&state, "/recover", &query, &headers, &body);

    if let Some((status, message)) = take_failure(&state) {
        return (
            StatusCode::from_u16(status).unwrap_or(StatusCode::UNPROCESSABLE_ENTITY),
            Json(json!({"code": status, "msg": message})),
        );
    }

    (StatusCode::OK, Json(json!({})))
}

async fn logout(
    State(state): State<Arc<ProviderState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> StatusCode {
    record(&state, "/logout", &query, &headers, &Value::Null);
    StatusCode::NO_CONTENT
}
