//! Errors reported by the trees and the Bloom filter.

use thiserror::Error;

/// Everything that can go wrong when querying a structure in this crate.
///
/// Looking up an absent key is *not* an error: `contains` and `test` return `false` and
/// `remove` returns `None`. Errors are reserved for queries that have no meaningful answer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// `minimum` or `maximum` was asked of a tree with no keys.
    #[error("the tree is empty")]
    Empty,
    /// `successor` was asked for a key the tree does not store.
    #[error("key not found in the tree")]
    KeyNotFound,
    /// A Bloom filter was sized for zero expected items.
    #[error("expected item count must be at least 1")]
    InvalidItemCount,
    /// A Bloom filter was given a false-positive rate outside `(0, 1)`.
    #[error("false-positive probability must be in (0, 1), got {0}")]
    InvalidProbability(f64),
    /// A Bloom filter for this many items at the requested rate needs more bits than an
    /// allocation can hold.
    #[error("a filter for {0} items at that false-positive rate is too large")]
    TooLarge(usize),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
