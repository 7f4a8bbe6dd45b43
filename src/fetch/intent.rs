use crate::mvi::Intent;

use super::state::Payload;

/// Inputs to the fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchIntent<T, E> {
    /// The tracked query took a new value (possibly empty).
    QueryChanged { query: String },

    /// A lookup issued under `generation` finished.
    Settled {
        generation: u64,
        outcome: Result<T, E>,
    },

    /// Recovery action: clear the query and return to idle.
    Reset,
}

impl<T: Payload, E: Payload> Intent for FetchIntent<T, E> {}
