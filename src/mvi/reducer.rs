use super::intent::Intent;
use super::state::State;

/// The only place where state transitions happen.
///
/// `reduce` must be pure: `(State, Intent) -> State`, no I/O, no clocks.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
