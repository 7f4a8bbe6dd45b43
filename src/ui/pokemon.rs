use std::fmt::Write;

use crate::fetch::Presentable;
use crate::pokemon::Pokemon;

pub fn render_idle() -> String {
    "Submit a pokemon".to_string()
}

/// Named placeholder shown while a lookup is in flight.
pub fn render_pending(name: &str) -> String {
    format!("Loading {}...", name)
}

pub fn render_pokemon(pokemon: &Pokemon) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} #{}", pokemon.name, pokemon.number);
    if !pokemon.image.is_empty() {
        let _ = writeln!(out, "  {}", pokemon.image);
    }
    if !pokemon.attacks.special.is_empty() {
        let _ = writeln!(out, "  Special attacks:");
        for attack in &pokemon.attacks.special {
            let _ = writeln!(
                out,
                "    - {}: {} ({})",
                attack.name, attack.damage, attack.kind
            );
        }
    }
    let _ = write!(out, "  fetched at {}", pokemon.fetched_at);
    out
}

pub fn render_presentable(view: Presentable<'_, Pokemon>) -> String {
    match view {
        Presentable::Idle => render_idle(),
        Presentable::Pending { query } => render_pending(query),
        Presentable::Resolved(pokemon) => render_pokemon(pokemon),
    }
}
