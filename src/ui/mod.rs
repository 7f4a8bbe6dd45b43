//! Line-oriented presentation.
//!
//! - `greeting.rs` - name form backed by a persisted value
//! - `pokemon.rs` - renders each lookup status
//! - `boundary.rs` - receives escalated failures and offers a reset
//! - `session.rs` - interactive loops over an async line reader

pub mod boundary;
pub mod greeting;
pub mod pokemon;
pub mod session;

pub use boundary::{BoundaryView, ErrorBoundary};
pub use greeting::Greeting;
pub use session::{run_greeting, run_pokemon, SessionCommand};
