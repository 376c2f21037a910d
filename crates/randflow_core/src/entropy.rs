//! System entropy acquisition for seeding.
//!
//! The engine never generates its own seed material: an [`EntropySource`]
//! collaborator delivers unpredictable words, and the default implementation
//! defers to the operating system via [`rand::rngs::OsRng`].
//!
//! The contract is all-or-nothing: either every requested word is filled
//! with system-quality entropy, or the call fails with
//! [`RandError::Entropy`]. No partial or degraded fills are produced.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::RandError;

/// Source of unpredictable seed material.
///
/// Implementations must fill the entire destination or return an error;
/// callers rely on every word being fresh entropy.
///
/// # Examples
/// ```
/// use randflow_core::entropy::{EntropySource, SystemEntropy};
///
/// let mut words = [0u32; 4];
/// SystemEntropy.fill(&mut words).unwrap();
/// ```
pub trait EntropySource {
    /// Fills `dest` with unpredictable words.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::Entropy`] if the underlying source cannot
    /// deliver the requested number of words. `dest` must then be treated
    /// as garbage.
    fn fill(&mut self, dest: &mut [u32]) -> Result<(), RandError>;
}

/// Operating-system entropy via [`OsRng`].
///
/// On Unix this reads the kernel CSPRNG (`getrandom(2)` / `/dev/urandom`);
/// on Windows it uses the platform crypto provider. The call may block
/// early at boot while the kernel pool initialises.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn fill(&mut self, dest: &mut [u32]) -> Result<(), RandError> {
        let mut bytes = vec![0u8; 4 * dest.len()];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| RandError::Entropy(e.to_string()))?;
        for (word, chunk) in dest.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(())
    }
}

/// Fills `dest` from the default system source.
///
/// Convenience wrapper used by the entropy-sourced seeding paths.
///
/// # Errors
///
/// Returns [`RandError::Entropy`] if the operating system source fails.
pub fn system_entropy(dest: &mut [u32]) -> Result<(), RandError> {
    SystemEntropy.fill(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_every_word() {
        // 64 zero words all staying zero has probability 2^-2048.
        let mut words = [0u32; 64];
        system_entropy(&mut words).unwrap();
        assert!(words.iter().any(|&w| w != 0));
    }

    #[test]
    fn test_consecutive_fills_differ() {
        let mut a = [0u32; 8];
        let mut b = [0u32; 8];
        let mut src = SystemEntropy;
        src.fill(&mut a).unwrap();
        src.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_fill_is_ok() {
        let mut words: [u32; 0] = [];
        assert!(system_entropy(&mut words).is_ok());
    }
}
