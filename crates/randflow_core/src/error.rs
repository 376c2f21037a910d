//! Error types for structured error handling.
//!
//! This module provides [`RandError`], the single error enum shared by the
//! generator core, the algorithm registry, and the non-uniform samplers.

use thiserror::Error;

/// Categorised generator errors.
///
/// Distinguishes the three failure classes of the engine: bad arguments
/// (unknown algorithm, invalid limit, out-of-bounds cursor), a misused
/// generator (draws before seeding, reseed before seed), and an entropy
/// collaborator failure.
///
/// # Examples
/// ```
/// use randflow_core::RandError;
///
/// let err = RandError::BadLimit { limit: 0 };
/// assert_eq!(format!("{}", err), "Invalid limit 0: must be in 1..=65535");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandError {
    /// No registered algorithm matches the requested name.
    #[error("Unknown algorithm: {name}")]
    UnknownAlgorithm {
        /// The name that failed to resolve.
        name: String,
    },

    /// No registered algorithm carries the requested ordinal id.
    #[error("Unknown algorithm id {id}: valid ids are 1..={count}")]
    UnknownAlgorithmId {
        /// The 1-based id that failed to resolve.
        id: usize,
        /// Number of registered algorithms.
        count: usize,
    },

    /// An algorithm descriptor failed the size-consistency check at open.
    #[error("Bad descriptor for {name}: {reason}")]
    BadDescriptor {
        /// Name of the offending algorithm.
        name: &'static str,
        /// Which size constraint was violated.
        reason: &'static str,
    },

    /// A draw or reseed was requested before the generator was seeded.
    #[error("Generator has not been seeded")]
    NotSeeded,

    /// The limit passed to `rand` is outside the supported range.
    #[error("Invalid limit {limit}: must be in 1..=65535")]
    BadLimit {
        /// The rejected limit.
        limit: u32,
    },

    /// A raw accessor tried to move the buffer cursor out of bounds.
    #[error("Cursor position {pos} out of bounds for buffer of {bufsize} words")]
    BadCursor {
        /// The rejected cursor position.
        pos: usize,
        /// Length of the output buffer in words.
        bufsize: usize,
    },

    /// Explicit seed material of length zero was supplied.
    #[error("Seed material must contain at least one word")]
    EmptySeed,

    /// The shuffle selection count exceeds the slice length.
    #[error("Shuffle count {count} exceeds slice length {len}")]
    BadShuffleCount {
        /// Requested selection size.
        count: usize,
        /// Length of the slice.
        len: usize,
    },

    /// The entropy collaborator failed to deliver the requested words.
    #[error("Entropy source failure: {0}")]
    Entropy(String),
}
