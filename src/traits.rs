//! Core traits shared across the crate
//!
//! Summaries implement [`Summary`], so callers can feed, combine and reset
//! them without knowing the concrete accumulator. Anything that can produce
//! a labeled dataset implements [`RecordSource`].

use core::fmt::Debug;

#[cfg(feature = "records")]
use crate::records::RecordBatch;

/// Core trait for one-pass summaries over a stream
pub trait Summary: Clone + Debug {
    /// The type of item this summary consumes
    type Item: ?Sized;

    /// Feed one item into the summary
    fn update(&mut self, item: &Self::Item);

    /// Fold another summary of the same kind into this one
    fn merge(&mut self, other: &Self);

    /// Reset to the empty state
    fn clear(&mut self);

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if nothing has been processed yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// A producer of labeled string datasets
///
/// Implemented by the line-oriented corpus loader; other dataset formats
/// plug in behind the same seam.
#[cfg(feature = "records")]
pub trait RecordSource {
    /// Error raised when the dataset cannot be produced in full
    type Error;

    /// Produce the whole batch, or fail as a unit
    fn load(&self) -> Result<RecordBatch, Self::Error>;
}
