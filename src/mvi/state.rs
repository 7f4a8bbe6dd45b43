/// Marker trait for reducer state.
///
/// States are plain values: cloned to snapshot, compared to detect changes,
/// and defaulted to the machine's initial state.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
