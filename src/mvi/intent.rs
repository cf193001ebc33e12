//! Base trait for intents (API/UI actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - API calls (present a dialog, dismiss it)
/// - UI events (button activation, field confirmation)
/// - Scheduled commands arriving from other threads
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
