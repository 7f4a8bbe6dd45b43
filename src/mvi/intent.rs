/// Marker trait for intents.
///
/// An intent is either an input from the user (a submitted query, a reset)
/// or a system event (a request completing).
pub trait Intent: Send + 'static {}
