use std::fmt;

use crate::mvi::State;

/// Bounds shared by lookup results and failures so they can live in
/// reducer state.
pub trait Payload: Clone + PartialEq + Send + 'static {}

impl<T: Clone + PartialEq + Send + 'static> Payload for T {}

/// Status tag of a [`FetchState`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    Idle,
    Pending,
    Resolved,
    Rejected,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Disposition of the current lookup.
///
/// The result exists only when resolved and the error only when rejected;
/// idle and pending carry neither.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T, E> {
    Idle,
    Pending,
    Resolved(T),
    Rejected(E),
}

impl<T, E> Default for FetchState<T, E> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T, E> FetchState<T, E> {
    pub fn status(&self) -> FetchStatus {
        match self {
            Self::Idle => FetchStatus::Idle,
            Self::Pending => FetchStatus::Pending,
            Self::Resolved(_) => FetchStatus::Resolved,
            Self::Rejected(_) => FetchStatus::Rejected,
        }
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Rejected(error) => Some(error),
            _ => None,
        }
    }
}

/// What a view may render. Rejection is not in here: it is escalated as the
/// `Err` side of [`FetchLifecycle::presentable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Presentable<'a, T> {
    Idle,
    Pending { query: &'a str },
    Resolved(&'a T),
}

/// Query, request generation and state of one fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchLifecycle<T, E> {
    pub(super) query: String,
    pub(super) generation: u64,
    pub(super) state: FetchState<T, E>,
}

impl<T, E> Default for FetchLifecycle<T, E> {
    fn default() -> Self {
        Self {
            query: String::new(),
            generation: 0,
            state: FetchState::Idle,
        }
    }
}

impl<T: Payload, E: Payload> State for FetchLifecycle<T, E> {}

impl<T, E> FetchLifecycle<T, E> {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Generation of the most recent accepted query change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &FetchState<T, E> {
        &self.state
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status()
    }

    pub fn result(&self) -> Option<&T> {
        self.state.result()
    }

    pub fn error(&self) -> Option<&E> {
        self.state.error()
    }

    /// Hand the caller something to render, or escalate the failure.
    pub fn presentable(&self) -> Result<Presentable<'_, T>, &E> {
        match &self.state {
            FetchState::Idle => Ok(Presentable::Idle),
            FetchState::Pending => Ok(Presentable::Pending { query: &self.query }),
            FetchState::Resolved(value) => Ok(Presentable::Resolved(value)),
            FetchState::Rejected(error) => Err(error),
        }
    }

    /// Give up the lifecycle and take ownership of its state.
    pub fn into_state(self) -> FetchState<T, E> {
        self.state
    }
}
