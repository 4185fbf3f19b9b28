//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (form submit, toggles, refresh)
/// - Completed background work (a subject load resolving)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
