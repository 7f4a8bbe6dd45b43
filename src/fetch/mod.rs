//! Asynchronous fetch lifecycle.
//!
//! A query drives at most one "current" lookup. The lifecycle moves through
//! four mutually exclusive statuses:
//!
//! ```text
//!            query = ""                      query != ""
//!   Idle <──────────────── any ────────────────> Pending
//!                                                  │
//!                              settled (current) ──┼──> Resolved(T)
//!                                                  └──> Rejected(E)
//! ```
//!
//! Every accepted query change bumps a generation counter. A lookup carries
//! the generation it was issued under, and its outcome is applied only if
//! that generation is still current. Superseded outcomes are dropped.
//!
//! - `state.rs` - lifecycle value and status tags
//! - `intent.rs` - inputs to the machine
//! - `reducer.rs` - pure transitions
//! - `lookup.rs` - the asynchronous collaborator seam
//! - `controller.rs` - owns the state, issues lookups, applies completions

mod controller;
mod intent;
mod lookup;
mod reducer;
mod state;

pub use controller::{Completion, FetchController};
pub use intent::FetchIntent;
pub use lookup::{Lookup, LookupAborted};
pub use reducer::FetchReducer;
pub use state::{FetchLifecycle, FetchState, FetchStatus, Payload, Presentable};
