use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;

/// A pokemon as returned by the `PokemonInfo` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: String,
    pub number: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub attacks: Attacks,
    /// Wall-clock time the response arrived, stamped by the client.
    #[serde(skip)]
    pub fetched_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Attacks {
    #[serde(default)]
    pub special: Vec<Attack>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attack {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: u32,
}

/// `HH:MM:SS.mmm UTC` for the time of day of `time`.
pub fn format_clock(time: SystemTime) -> String {
    let since_epoch = time.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = since_epoch.as_secs() % 86_400;
    format!(
        "{:02}:{:02}:{:02}.{:03} UTC",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        since_epoch.subsec_millis()
    )
}
