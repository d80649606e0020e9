//! Base trait for slice state.

/// Marker trait for the per-domain state slices composed into the root tree.
///
/// Slices should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a page needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
