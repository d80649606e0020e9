//! Base trait for slice intents (mutation requests).

/// Marker trait for intent objects.
///
/// Intents represent the named operations a slice accepts: collection
/// replacement, prepends, in-place lookups. Every intent is a total
/// function over its slice; lookups that miss are silent no-ops.
///
/// Intents are processed by reducers to produce new slice states.
pub trait Intent: Send + 'static {}
