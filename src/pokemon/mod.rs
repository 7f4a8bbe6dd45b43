//! Pokemon lookup over the GraphQL pokemon API.

mod client;
mod error;
mod types;

pub use client::{PokemonClient, POKEMON_QUERY};
pub use error::PokemonError;
pub use types::{format_clock, Attack, Attacks, Pokemon};
