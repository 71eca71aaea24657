//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are either user actions (key presses) or system events such as
/// fetch progress. Reducers consume them to produce new states.
pub trait Intent: Send + 'static {}
