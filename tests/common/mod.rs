//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_pokemon_api;

use parking_lot::Mutex;
use pokeinfo::fetch::Lookup;
use pokeinfo::pokemon::{Attacks, Pokemon, PokemonError};
use std::collections::HashMap;
use std::future::Future;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::oneshot;

type Outcome = Result<Pokemon, PokemonError>;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn fake_pokemon(name: &str) -> Pokemon {
    Pokemon {
        id: format!("id-{}", name),
        number: "000".to_string(),
        name: name.to_string(),
        image: String::new(),
        attacks: Attacks::default(),
        fetched_at: "00:00:00.000 UTC".to_string(),
    }
}

pub fn not_found(name: &str) -> PokemonError {
    PokemonError::NotFound {
        name: name.to_string(),
    }
}

#[derive(Default)]
struct Gate {
    sender: Option<oneshot::Sender<Outcome>>,
    receiver: Option<oneshot::Receiver<Outcome>>,
}

impl Gate {
    fn new() -> Self {
        let (sender, receiver) = oneshot::channel();
        Self {
            sender: Some(sender),
            receiver: Some(receiver),
        }
    }
}

/// Lookup whose responses are released by the test, per query, in any order.
#[derive(Default)]
pub struct GatedLookup {
    gates: Mutex<HashMap<String, Gate>>,
    calls: Mutex<Vec<String>>,
}

impl GatedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete the lookup for `query` (before or after it was issued).
    pub fn release(&self, query: &str, outcome: Outcome) {
        let sender = self
            .gates
            .lock()
            .entry(query.to_string())
            .or_insert_with(Gate::new)
            .sender
            .take()
            .expect("query released twice");
        let _ = sender.send(outcome);
    }

    /// Queries looked up so far, in issue order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl Lookup for GatedLookup {
    type Output = Pokemon;
    type Error = PokemonError;

    fn lookup(&self, query: &str) -> impl Future<Output = Outcome> + Send {
        self.calls.lock().push(query.to_string());
        let receiver = self
            .gates
            .lock()
            .entry(query.to_string())
            .or_insert_with(Gate::new)
            .receiver
            .take()
            .expect("query looked up twice");

        async move {
            receiver.await.unwrap_or_else(|_| {
                Err(PokemonError::Connection {
                    endpoint: "gated".to_string(),
                    message: "gate dropped".to_string(),
                })
            })
        }
    }
}

/// Lookup answering immediately from a fixed table; unknown names are not found.
pub struct TableLookup {
    known: Vec<&'static str>,
}

impl TableLookup {
    pub fn new(known: &[&'static str]) -> Self {
        Self {
            known: known.to_vec(),
        }
    }
}

impl Lookup for TableLookup {
    type Output = Pokemon;
    type Error = PokemonError;

    fn lookup(&self, query: &str) -> impl Future<Output = Outcome> + Send {
        let outcome = if self.known.contains(&query) {
            Ok(fake_pokemon(query))
        } else {
            Err(not_found(query))
        };
        async move { outcome }
    }
}

/// Temp dir plus a config file pointing storage inside it.
pub fn temp_config(endpoint: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let storage_path = temp_dir.path().join("storage.json");

    let content = format!(
        r#"[storage]
path = "{}"

[greeting]
key = "name"

[lookup]
endpoint = "{}"
timeout_seconds = 5
connect_timeout_seconds = 2
"#,
        storage_path.display(),
        endpoint
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
