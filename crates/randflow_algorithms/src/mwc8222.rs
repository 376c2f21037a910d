//! MWC8222: multiply-with-carry with in-place descending lane update.
//!
//! Same multiplier as [`Mwc256`](crate::Mwc256) but a different stream:
//! the lanes are rewritten in place from the highest index down, so each
//! refill advances the whole lag vector, and the diffusion is a custom
//! seed-mixing LCG rather than the default expansion. Classic renditions
//! alias the lane vector onto the output buffer as a space optimisation;
//! here state and buffer stay distinct, which changes nothing observable
//! because the buffer is a verbatim copy of the lanes after each step.

use randflow_core::Algorithm;

use crate::mwc256::{CARRY_INIT, LANES, MWC_MUL};

/// Multiplier of the seed-mixing LCG.
const SEED_MUL: u32 = 69_069;
/// Increment of the seed-mixing LCG.
const SEED_ADD: u32 = 764_385;
/// Starting point of the seed-mixing LCG.
const SEED_INIT: u32 = 232_497_429;

/// The MWC8222 algorithm descriptor.
///
/// Descriptor sizes: 16 seed words recommended, 257 state words (256
/// lanes and the carry in word 256), 256-word output buffer.
#[derive(Debug)]
pub struct Mwc8222;

impl Algorithm for Mwc8222 {
    fn name(&self) -> &'static str {
        "mwc8222"
    }

    fn seed_size(&self) -> usize {
        16
    }

    fn state_size(&self) -> usize {
        LANES + 1
    }

    fn buf_size(&self) -> usize {
        LANES
    }

    fn seed(&self, state: &mut [u32], seed: &[u32]) {
        let mut x = SEED_INIT;
        let mut j = 0;
        for lane in state[..LANES].iter_mut() {
            x = x
                .wrapping_mul(SEED_MUL)
                .wrapping_add(SEED_ADD)
                .wrapping_add(seed[j]);
            *lane = x;
            j += 1;
            if j >= seed.len() {
                j = 0;
            }
        }
        state[LANES] = CARRY_INIT;
    }

    fn reseed(&self, state: &mut [u32], seed: &[u32]) {
        // Fold into the lanes only; the carry word is left alone.
        let mut j = 0;
        for lane in state[..LANES].iter_mut() {
            *lane ^= seed[j];
            j += 1;
            if j >= seed.len() {
                j = 0;
            }
        }
    }

    fn refill(&self, state: &mut [u32], buf: &mut [u32]) {
        debug_assert_eq!(state.len(), LANES + 1);
        debug_assert_eq!(buf.len(), LANES);

        let mut carry = state[LANES];
        for i in (0..LANES).rev() {
            let t = MWC_MUL * u64::from(state[i]) + u64::from(carry);
            carry = (t >> 32) as u32;
            state[i] = t as u32;
            buf[i] = state[i];
        }
        state[LANES] = carry;
    }
}
