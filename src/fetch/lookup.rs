use std::fmt::Display;
use std::future::Future;

use thiserror::Error;

use super::state::Payload;

/// A lookup task that ended without producing an outcome (it panicked or
/// was cancelled). Settles the lifecycle like any other failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lookup for \"{query}\" aborted: {reason}")]
pub struct LookupAborted {
    pub query: String,
    pub reason: String,
}

/// Asynchronous lookup collaborator.
///
/// The payload and failure types belong to the implementor; the lifecycle
/// only stores them. The failure type must be able to represent an aborted
/// task so that every issued lookup settles.
pub trait Lookup: Send + Sync + 'static {
    type Output: Payload;
    type Error: Payload + Display + From<LookupAborted>;

    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
