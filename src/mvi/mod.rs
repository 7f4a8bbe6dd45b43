//! Model-View-Intent primitives.
//!
//! State machines in this crate are written as pure reducers so that every
//! transition can be exercised without a runtime:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── side effects ────────┘
//! ```
//!
//! Whatever owns the state (a controller) is responsible for side effects
//! such as issuing requests; the reducer only decides the next state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
