//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are replaced wholesale on every transition, so they must be
/// cheap to clone and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
