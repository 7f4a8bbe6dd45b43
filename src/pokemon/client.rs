use std::future::Future;
use std::time::{Duration, SystemTime};

use reqwest::Client;
use serde::Deserialize;
use tokio::time::timeout;
use tracing::Instrument;

use crate::config::LookupConfig;
use crate::fetch::Lookup;

use super::error::PokemonError;
use super::types::{format_clock, Pokemon};

/// GraphQL document sent for every lookup.
pub const POKEMON_QUERY: &str = r#"query PokemonInfo($name: String) {
  pokemon(name: $name) {
    id
    number
    name
    image
    attacks {
      special {
        name
        type
        damage
      }
    }
  }
}"#;

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<GraphqlData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    pokemon: Option<Pokemon>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

impl GraphqlResponse {
    fn error_message(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        Some(messages.join("\n"))
    }
}

/// HTTP client for the pokemon GraphQL endpoint.
pub struct PokemonClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
    delay: Duration,
}

impl PokemonClient {
    pub fn new(config: &LookupConfig) -> Result<Self, PokemonError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| PokemonError::Connection {
                endpoint: config.endpoint.clone(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
            delay: config.delay(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Look up a pokemon by name (case-insensitive).
    ///
    /// The configured delay runs before the request; the timeout covers the
    /// request itself.
    pub async fn fetch(&self, name: &str) -> Result<Pokemon, PokemonError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!("pokemon_lookup", request_id = %request_id, name = %name);

        async {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let result = match timeout(self.timeout, self.do_fetch(name)).await {
                Ok(result) => result,
                Err(_) => Err(PokemonError::Timeout {
                    seconds: self.timeout.as_secs(),
                }),
            };

            match &result {
                Ok(pokemon) => tracing::info!(number = %pokemon.number, "Lookup succeeded"),
                Err(e) => tracing::warn!(kind = e.kind(), error = %e, "Lookup failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn do_fetch(&self, name: &str) -> Result<Pokemon, PokemonError> {
        let body = serde_json::json!({
            "query": POKEMON_QUERY,
            "variables": { "name": name.to_lowercase() },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.connection_error(e))?;

        let envelope: GraphqlResponse = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(PokemonError::Upstream {
                    status: status.as_u16(),
                    message: String::from_utf8_lossy(&bytes).into_owned(),
                });
            }
            Err(e) => {
                return Err(PokemonError::Decode {
                    message: e.to_string(),
                });
            }
        };

        if !status.is_success() {
            let message = envelope.error_message().unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
            return Err(PokemonError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let error_message = envelope.error_message();
        match envelope.data.and_then(|data| data.pokemon) {
            Some(mut pokemon) => {
                pokemon.fetched_at = format_clock(SystemTime::now());
                Ok(pokemon)
            }
            None => match error_message {
                Some(message) => Err(PokemonError::Upstream {
                    status: status.as_u16(),
                    message,
                }),
                None => Err(PokemonError::NotFound {
                    name: name.to_string(),
                }),
            },
        }
    }

    fn connection_error(&self, err: reqwest::Error) -> PokemonError {
        PokemonError::Connection {
            endpoint: self.endpoint.clone(),
            message: err.to_string(),
        }
    }
}

impl Lookup for PokemonClient {
    type Output = Pokemon;
    type Error = PokemonError;

    fn lookup(&self, query: &str) -> impl Future<Output = Result<Pokemon, PokemonError>> + Send {
        self.fetch(query)
    }
}
