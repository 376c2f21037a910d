//! The static algorithm registry and discovery operations.
//!
//! Algorithms are registered in one fixed, ordered table; this is the
//! only place a new algorithm is added. External callers (and language
//! bindings) discover algorithms by case-insensitive name or by 1-based
//! ordinal id, and may query the descriptor sizes without opening a
//! generator.

use randflow_core::{Algorithm, Generator, RandError};

use crate::jkiss::Jkiss;
use crate::mt19937::Mt19937;
use crate::mwc256::Mwc256;
use crate::mwc8222::Mwc8222;

/// The fixed, ordered table of builtin algorithms.
///
/// Ordinal ids are 1-based positions in this table; the first entry is
/// the workspace default.
pub static ALGORITHMS: [&dyn Algorithm; 4] = [&Jkiss, &Mt19937, &Mwc256, &Mwc8222];

/// Number of registered algorithms.
pub fn count() -> usize {
    ALGORITHMS.len()
}

/// Looks up an algorithm by case-insensitive name.
pub fn by_name(name: &str) -> Option<&'static dyn Algorithm> {
    ALGORITHMS
        .iter()
        .copied()
        .find(|a| a.name().eq_ignore_ascii_case(name))
}

/// Looks up an algorithm by 1-based ordinal id.
pub fn by_id(id: usize) -> Option<&'static dyn Algorithm> {
    if id >= 1 && id <= ALGORITHMS.len() {
        Some(ALGORITHMS[id - 1])
    } else {
        None
    }
}

/// Resolves a name to its 1-based ordinal id.
pub fn id_of(name: &str) -> Option<usize> {
    ALGORITHMS
        .iter()
        .position(|a| a.name().eq_ignore_ascii_case(name))
        .map(|p| p + 1)
}

/// Opens a generator for the named algorithm.
///
/// # Errors
///
/// Returns [`RandError::UnknownAlgorithm`] if no registered algorithm
/// matches.
///
/// # Examples
/// ```
/// let mut g = randflow_algorithms::open("MT19937")?;
/// g.seed_value(0xceb5542e)?;
/// assert_eq!(g.next32()?, 0xa1dc760c);
/// # Ok::<(), randflow_core::RandError>(())
/// ```
pub fn open(name: &str) -> Result<Generator, RandError> {
    let alg = by_name(name).ok_or_else(|| RandError::UnknownAlgorithm {
        name: name.to_string(),
    })?;
    Generator::open(alg)
}

/// Opens a generator by 1-based ordinal id.
///
/// # Errors
///
/// Returns [`RandError::UnknownAlgorithmId`] if the id is out of range.
pub fn open_id(id: usize) -> Result<Generator, RandError> {
    let alg = by_id(id).ok_or(RandError::UnknownAlgorithmId {
        id,
        count: count(),
    })?;
    Generator::open(alg)
}

/// Opens a generator for the default algorithm (the first table entry).
///
/// # Errors
///
/// Propagates [`Generator::open`] failures.
pub fn open_default() -> Result<Generator, RandError> {
    Generator::open(ALGORITHMS[0])
}
