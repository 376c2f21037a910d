//! MT19937: the Mersenne Twister of Matsumoto and Nishimura.
//!
//! Canonical twist/temper recurrence over 624 state words with period
//! 2^19937 - 1. Seeding follows the reference initialisation: a single
//! word uses the `init_genrand` expansion, longer material runs the
//! `init_by_array` non-linear mixing passes on top of it.

use randflow_core::{default_reseed, Algorithm};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Knuth-style multiplier of the state expansion.
const INIT_MUL: u32 = 1_812_433_253;
/// Base value of the array-seeding expansion.
const ARRAY_SEED_BASE: u32 = 19_650_218;
/// Multiplier of the first array-mixing pass.
const MIX1_MUL: u32 = 1_664_525;
/// Multiplier of the second array-mixing pass.
const MIX2_MUL: u32 = 1_566_083_941;

/// The MT19937 algorithm descriptor.
///
/// Descriptor sizes: 16 seed words recommended, 624 state words, and a
/// 624-word output buffer so each refill runs exactly one twist of the
/// full state.
#[derive(Debug)]
pub struct Mt19937;

fn expand(state: &mut [u32], first: u32) {
    state[0] = first;
    for i in 1..N {
        let prev = state[i - 1];
        state[i] = INIT_MUL
            .wrapping_mul(prev ^ (prev >> 30))
            .wrapping_add(i as u32);
    }
}

impl Algorithm for Mt19937 {
    fn name(&self) -> &'static str {
        "mt19937"
    }

    fn seed_size(&self) -> usize {
        16
    }

    fn state_size(&self) -> usize {
        N
    }

    fn buf_size(&self) -> usize {
        N
    }

    fn seed(&self, state: &mut [u32], seed: &[u32]) {
        if seed.len() == 1 {
            expand(state, seed[0]);
            return;
        }
        expand(state, ARRAY_SEED_BASE);

        let mut i = 1;
        let mut j = 0;
        for _ in 0..N.max(seed.len()) {
            let prev = state[i - 1];
            state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(MIX1_MUL))
                .wrapping_add(seed[j])
                .wrapping_add(j as u32);
            i += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
            j += 1;
            if j >= seed.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = state[i - 1];
            state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(MIX2_MUL))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
        }
        state[0] = UPPER_MASK;
    }

    fn reseed(&self, state: &mut [u32], seed: &[u32]) {
        default_reseed(state, seed);
        // The all-zero state is unreachable from any reseed fold.
        state[0] = UPPER_MASK;
    }

    fn refill(&self, state: &mut [u32], buf: &mut [u32]) {
        debug_assert_eq!(state.len(), N);
        debug_assert_eq!(buf.len(), N);

        for i in 0..N {
            let j = if i + 1 >= N { i + 1 - N } else { i + 1 };
            let k = if i + M >= N { i + M - N } else { i + M };

            let mixed = (state[i] & UPPER_MASK) | (state[j] & LOWER_MASK);
            let twist = if state[j] & 1 != 0 { MATRIX_A } else { 0 };
            state[i] = twist ^ state[k] ^ (mixed >> 1);
        }
        for (i, word) in buf.iter_mut().rev().enumerate() {
            let mut y = state[i];
            y ^= y >> 11;
            y ^= (y << 7) & 0x9d2c_5680;
            y ^= (y << 15) & 0xefc6_0000;
            *word = y ^ (y >> 18);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_expansion_keeps_seed() {
        // init_genrand keeps the seed itself as state word 0.
        let mut state = [0u32; N];
        Mt19937.seed(&mut state, &[0xceb5_542e]);
        assert_eq!(state[0], 0xceb5_542e);
    }

    #[test]
    fn test_array_seed_pins_word_zero() {
        let mut state = [0u32; N];
        Mt19937.seed(&mut state, &[1, 2, 3, 4]);
        assert_eq!(state[0], UPPER_MASK);
    }

    #[test]
    fn test_reseed_pins_word_zero() {
        let mut state = [0u32; N];
        Mt19937.seed(&mut state, &[9]);
        Mt19937.reseed(&mut state, &[0xdead_beef]);
        assert_eq!(state[0], UPPER_MASK);
    }

    #[test]
    fn test_refill_changes_whole_state() {
        let mut state = [0u32; N];
        Mt19937.seed(&mut state, &[7]);
        let before = state;
        let mut buf = [0u32; N];
        Mt19937.refill(&mut state, &mut buf);
        assert!(state.iter().zip(before.iter()).any(|(a, b)| a != b));
    }
}
