//! Marker for unit state snapshots.

/// State owned by one unit of the profile screen (`ProfileState`,
/// `PreferencesState`).
///
/// `Default` lets `dispatch_mvi!` move the state out while a reducer runs;
/// `PartialEq` lets tests compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
