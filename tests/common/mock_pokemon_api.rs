//! Mock GraphQL pokemon endpoint for testing the HTTP lookup.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Response, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response for one pokemon name.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn pokemon(name: &str, number: &str) -> Self {
        Self {
            status: 200,
            body: serde_json::json!({ "data": { "pokemon": pokemon_json(name, number) } })
                .to_string(),
            delay_ms: 0,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 200,
            body: r#"{"data": {"pokemon": null}}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn graphql_errors(status: u16, messages: &[&str]) -> Self {
        let errors: Vec<Value> = messages
            .iter()
            .map(|m| serde_json::json!({ "message": m }))
            .collect();
        Self {
            status,
            body: serde_json::json!({ "data": null, "errors": errors }).to_string(),
            delay_ms: 0,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

pub fn pokemon_json(name: &str, number: &str) -> Value {
    serde_json::json!({
        "id": format!("UG9rZW1vbjo{}", number),
        "number": number,
        "name": name,
        "image": format!("https://img.pokemondb.net/artwork/{}.jpg", name.to_lowercase()),
        "attacks": {
            "special": [
                { "name": "Struggle", "type": "Normal", "damage": 35 }
            ]
        }
    })
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Value>>>,
    responses: Arc<HashMap<String, MockResponse>>,
}

/// Mock pokemon API server for testing.
pub struct MockPokemonApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockPokemonApi {
    /// Start a server answering the given names. Unknown names get
    /// `{"data": {"pokemon": null}}`.
    pub async fn start(responses: Vec<(&str, MockResponse)>) -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(
                responses
                    .into_iter()
                    .map(|(name, resp)| (name.to_string(), resp))
                    .collect(),
            ),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/", post(handle_query))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// All GraphQL request bodies received so far.
    pub async fn captured_requests(&self) -> Vec<Value> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockPokemonApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_query(State(state): State<MockState>, Json(body): Json<Value>) -> Response<Body> {
    let name = body["variables"]["name"].as_str().unwrap_or("").to_string();
    state.requests.lock().await.push(body);

    let resp = state
        .responses
        .get(&name)
        .cloned()
        .unwrap_or_else(MockResponse::not_found);

    if resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(resp.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(resp.body))
        .unwrap()
}
