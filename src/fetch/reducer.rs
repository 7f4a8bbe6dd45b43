use std::marker::PhantomData;

use crate::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::{FetchLifecycle, FetchState, Payload};

/// Transitions for [`FetchLifecycle`].
///
/// The next state is always built from the lifecycle passed in, which the
/// owner keeps as the freshest value; nothing is reconstructed from a copy
/// captured when a request was issued.
pub struct FetchReducer<T, E>(PhantomData<fn() -> (T, E)>);

impl<T: Payload, E: Payload> Reducer for FetchReducer<T, E> {
    type State = FetchLifecycle<T, E>;
    type Intent = FetchIntent<T, E>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::QueryChanged { query } => change_query(state, query),

            FetchIntent::Reset => change_query(state, String::new()),

            FetchIntent::Settled {
                generation,
                outcome,
            } => {
                // Only the request issued for the current query may settle it.
                if generation != state.generation || !matches!(state.state, FetchState::Pending) {
                    return state;
                }

                let next = match outcome {
                    Ok(value) => FetchState::Resolved(value),
                    Err(error) => FetchState::Rejected(error),
                };

                FetchLifecycle {
                    state: next,
                    ..state
                }
            }
        }
    }
}

fn change_query<T, E>(state: FetchLifecycle<T, E>, query: String) -> FetchLifecycle<T, E> {
    if query == state.query {
        return state;
    }

    let next = if query.is_empty() {
        FetchState::Idle
    } else {
        FetchState::Pending
    };

    FetchLifecycle {
        query,
        generation: state.generation.wrapping_add(1),
        state: next,
    }
}
