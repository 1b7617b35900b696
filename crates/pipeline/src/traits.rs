//! Core traits for consuming prepared data.
//!
//! This module defines the Dataset trait, the indexable view a training
//! loop iterates over.

use crate::error::Result;

/// Fixed-size, random-access collection of training examples.
///
/// ## Design Note
/// - `item_at` returns an error instead of panicking for an index outside
///   `[0, len)`
/// - Implementations are immutable after construction
pub trait Dataset {
    /// The example type handed to the training loop
    type Item;

    /// Number of examples
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch one example.
    ///
    /// # Returns
    /// * `Ok(Item)` - The example at `index`
    /// * `Err(PipelineError::IndexOutOfRange)` - If `index >= len()`
    fn item_at(&self, index: usize) -> Result<Self::Item>;
}
