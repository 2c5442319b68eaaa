//! Axum-based mock Dropbox provider for integration testing
//!
//! Each test starts its own server on an ephemeral port, so tests never share
//! state. The server records every request it receives, which lets tests
//! assert on the exact wire shape and on the absence of requests.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::IntoResponse,
    routing::post,
};
use std::{
    collections::HashMap,
    io::{Read, Write},
    sync::{Arc, Mutex},
    time::Duration,
};

use dropbox_oauth2::{
    ClientConfig, DROPBOX_API_URL, DROPBOX_AUTH_URL, DROPBOX_CLIENT_ID, DROPBOX_CLIENT_SECRET,
    DROPBOX_HTTP_TIMEOUT_SECS, DROPBOX_REDIRECT_URI, DROPBOX_TOKEN_URL, OAuth2Client,
};

use super::fixtures::{TEST_CLIENT_ID, TEST_CLIENT_SECRET, TEST_REDIRECT_URI};

/// A request as seen by the mock provider
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    /// Decode the body as `application/x-www-form-urlencoded`
    pub fn form(&self) -> HashMap<String, String> {
        url::form_urlencoded::parse(self.body.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone, Debug)]
struct Reply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

impl Reply {
    fn json(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }
}

/// Shared state for the mock server
#[derive(Clone)]
struct MockServerState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    token_reply: Arc<Mutex<Reply>>,
    team_info_reply: Arc<Mutex<Reply>>,
}

/// Handle to a running mock provider
pub struct MockProvider {
    pub base_url: String,
    state: MockServerState,
}

impl MockProvider {
    /// Start a mock provider on an ephemeral local port
    pub async fn start() -> Self {
        let state = MockServerState {
            requests: Arc::new(Mutex::new(Vec::new())),
            token_reply: Arc::new(Mutex::new(Reply::json(super::fixtures::FULL_TOKEN_JSON))),
            team_info_reply: Arc::new(Mutex::new(Reply::json(super::fixtures::TEAM_INFO_JSON))),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock provider");
        let addr = listener
            .local_addr()
            .expect("Mock provider should have a local address");

        let app = create_mock_app(state.clone());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock provider error: {e}");
            }
        });

        MockProvider {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Start a raw TCP provider that answers every request with `status`, a
    /// `Content-Length` of 100 and a five byte body, then closes the connection.
    ///
    /// Requests sent to it are not recorded.
    pub fn start_truncated(status: StatusCode) -> Self {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind raw provider");
        let addr = listener
            .local_addr()
            .expect("Raw provider should have a local address");

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                read_full_request(&mut stream);
                let reply = format!(
                    "HTTP/1.1 {} {}\r\nContent-Length: 100\r\nContent-Type: application/json\r\n\r\nshort",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown"),
                );
                let _ = stream.write_all(reply.as_bytes());
                let _ = stream.flush();
                let _ = stream.shutdown(std::net::Shutdown::Both);
            }
        });

        MockProvider {
            base_url: format!("http://{addr}"),
            state: MockServerState {
                requests: Arc::new(Mutex::new(Vec::new())),
                token_reply: Arc::new(Mutex::new(Reply::json(""))),
                team_info_reply: Arc::new(Mutex::new(Reply::json(""))),
            },
        }
    }

    pub fn set_token_reply(&self, status: StatusCode, body: &str) {
        *self.state.token_reply.lock().unwrap() = Reply {
            status,
            body: body.to_string(),
            delay: None,
        };
    }

    pub fn delay_token_reply(&self, delay: Duration) {
        self.state.token_reply.lock().unwrap().delay = Some(delay);
    }

    pub fn set_team_info_reply(&self, status: StatusCode, body: &str) {
        *self.state.team_info_reply.lock().unwrap() = Reply {
            status,
            body: body.to_string(),
            delay: None,
        };
    }

    /// All requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn config_values(&self) -> HashMap<String, String> {
        [
            (DROPBOX_CLIENT_ID, TEST_CLIENT_ID.to_string()),
            (DROPBOX_CLIENT_SECRET, TEST_CLIENT_SECRET.to_string()),
            (DROPBOX_REDIRECT_URI, TEST_REDIRECT_URI.to_string()),
            (DROPBOX_AUTH_URL, format!("{}/oauth2/authorize", self.base_url)),
            (DROPBOX_TOKEN_URL, format!("{}/oauth2/token", self.base_url)),
            (DROPBOX_API_URL, self.base_url.clone()),
            (DROPBOX_HTTP_TIMEOUT_SECS, "1".to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    /// Build a client whose endpoints all point at this mock provider
    pub fn client(&self) -> OAuth2Client {
        let values = self.config_values();
        let config = ClientConfig::from_lookup(|key| values.get(key).cloned())
            .expect("Mock configuration should be valid");
        OAuth2Client::new(config).expect("Client should build")
    }
}

/// Consume the request head and its `Content-Length` body
fn read_full_request(stream: &mut std::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + content_length {
            return;
        }
    }
}

fn create_mock_app(state: MockServerState) -> Router {
    Router::new()
        .route("/oauth2/token", post(oauth2_token))
        .route("/2/team/get_info", post(team_get_info))
        .fallback(not_found)
        .with_state(state)
}

fn record(state: &MockServerState, method: Method, uri: &Uri, headers: HeaderMap, body: String) {
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });
}

async fn respond(reply: Reply) -> impl IntoResponse {
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// Token endpoint
async fn oauth2_token(
    State(state): State<MockServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    record(&state, method, &uri, headers, body);
    let reply = state.token_reply.lock().unwrap().clone();
    respond(reply).await
}

/// Team info endpoint
async fn team_get_info(
    State(state): State<MockServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    record(&state, method, &uri, headers, body);
    let reply = state.team_info_reply.lock().unwrap().clone();
    respond(reply).await
}

async fn not_found(
    State(state): State<MockServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    record(&state, method, &uri, headers, body);
    StatusCode::NOT_FOUND
}
