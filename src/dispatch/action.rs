//! Action trait for type-safe state mutations.

use std::fmt::Debug;

/// An intent to change state, dispatched to the [`Store`](crate::dispatch::Store).
///
/// Actions are plain values: they can be logged, collected in tests, and
/// sent across task boundaries, hence the `Clone + Debug + Send` bounds.
pub trait Action: Clone + Debug + Send + 'static {
    /// Stable name for logging and filtering.
    fn name(&self) -> &'static str;
}
