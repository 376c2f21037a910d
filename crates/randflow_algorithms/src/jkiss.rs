//! JKISS: combined LCG + xorshift + multiply-with-carry generator.
//!
//! Based on the public-domain JKISS by David Jones of the UCL
//! Bioinformatics Group. Three independent sub-generators run over a
//! four-word state and are combined additively: word 0 is a 32-bit LCG,
//! word 1 a 32-bit xorshift (shifts 5/7/22), and words 2-3 a 64-bit
//! multiply-with-carry lane. Period is roughly 2^127.
//!
//! This file is also the canonical example of adding an algorithm: give
//! the descriptor sizes, override seed/reseed only if the state has
//! constraints the default diffusion can violate, and write the refill
//! recurrence back-to-front into the output buffer.

use randflow_core::{default_reseed, default_seed, Algorithm};

/// Multiplier of the LCG lane (word 0).
const LCG_MUL: u32 = 314_527_869;
/// Increment of the LCG lane.
const LCG_ADD: u32 = 1_234_567;
/// Multiplier of the multiply-with-carry lane (words 2-3).
const MWC_MUL: u64 = 4_294_584_393;
/// Upper bound used to fold word 3 away from a degenerate carry.
const CARRY_FOLD: u32 = 698_769_068;

/// The JKISS algorithm descriptor.
///
/// Descriptor sizes: 4 seed words recommended, 4 state words, 256-word
/// output buffer (any reasonable buffer size works for this recurrence).
#[derive(Debug)]
pub struct Jkiss;

/// Post-diffusion fixups shared by seed and reseed.
///
/// The xorshift word must never settle at zero (it would stay zero
/// forever), and the carry word must stay inside the multiplier's
/// non-degenerate range.
fn fixup(state: &mut [u32]) {
    if state[1] == 0 {
        state[1] = 1;
    }
    state[3] = state[3] % CARRY_FOLD + 1;
}

impl Algorithm for Jkiss {
    fn name(&self) -> &'static str {
        "jkiss"
    }

    fn seed_size(&self) -> usize {
        4
    }

    fn state_size(&self) -> usize {
        4
    }

    fn buf_size(&self) -> usize {
        256
    }

    fn seed(&self, state: &mut [u32], seed: &[u32]) {
        default_seed(state, seed);
        fixup(state);
    }

    fn reseed(&self, state: &mut [u32], seed: &[u32]) {
        default_reseed(state, seed);
        fixup(state);
    }

    fn refill(&self, state: &mut [u32], buf: &mut [u32]) {
        debug_assert_eq!(state.len(), 4);

        for word in buf.iter_mut().rev() {
            state[0] = state[0].wrapping_mul(LCG_MUL).wrapping_add(LCG_ADD);
            state[1] ^= state[1] << 5;
            state[1] ^= state[1] >> 7;
            state[1] ^= state[1] << 22;
            let t = MWC_MUL * u64::from(state[2]) + u64::from(state[3]);
            state[3] = (t >> 32) as u32;
            state[2] = t as u32;
            *word = state[0].wrapping_add(state[1]).wrapping_add(state[2]);
        }
    }
}
