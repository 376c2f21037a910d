//! MWC256: Marsaglia's 256-lane multiply-with-carry generator.
//!
//! 256 lag lanes plus one carry word; each refill steps every lane once
//! with `t = 809430660 * lane + carry`, emitting the low half of `t` and
//! chaining the high half as the next carry. Period is about 2^8222.

use randflow_core::{default_seed, Algorithm};

/// Number of lag lanes.
pub(crate) const LANES: usize = 256;
/// The multiply-with-carry multiplier.
pub(crate) const MWC_MUL: u64 = 809_430_660;
/// Carry value installed after seeding; safely below the multiplier.
pub(crate) const CARRY_INIT: u32 = 362_436;

/// The MWC256 algorithm descriptor.
///
/// Descriptor sizes: 16 seed words recommended, 257 state words (256
/// lanes and the carry in word 256), 256-word output buffer.
#[derive(Debug)]
pub struct Mwc256;

impl Algorithm for Mwc256 {
    fn name(&self) -> &'static str {
        "mwc256"
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
        default_seed(state, seed);
        state[LANES] = CARRY_INIT;
    }

    fn refill(&self, state: &mut [u32], buf: &mut [u32]) {
        debug_assert_eq!(state.len(), LANES + 1);

        // Only the carry is written back between refills; the lanes keep
        // their seeded values and the carry chain drives the sequence.
        let mut carry = state[LANES];
        for (lane, word) in state[..LANES].iter().zip(buf.iter_mut().rev()) {
            let t = MWC_MUL * u64::from(*lane) + u64::from(carry);
            carry = (t >> 32) as u32;
            *word = t as u32;
        }
        state[LANES] = carry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_installs_carry() {
        let mut state = [0u32; LANES + 1];
        Mwc256.seed(&mut state, &[1, 2, 3]);
        assert_eq!(state[LANES], CARRY_INIT);
    }

    #[test]
    fn test_refill_emits_lane_order() {
        // Lane 0 is computed first and must be consumed first, i.e. sit
        // at the back of the buffer.
        let mut state = [0u32; LANES + 1];
        Mwc256.seed(&mut state, &[5]);
        let lane0 = state[0];
        let mut buf = [0u32; LANES];
        Mwc256.refill(&mut state, &mut buf);
        let t = MWC_MUL * u64::from(lane0) + u64::from(CARRY_INIT);
        assert_eq!(buf[LANES - 1], t as u32);
        assert_eq!(state[0], lane0);
    }

    #[test]
    fn test_carry_chains_between_refills() {
        let mut state = [0u32; LANES + 1];
        Mwc256.seed(&mut state, &[5]);
        let mut buf = [0u32; LANES];
        Mwc256.refill(&mut state, &mut buf);
        let carry = state[LANES];
        Mwc256.refill(&mut state, &mut buf);
        assert_ne!(carry, state[LANES]);
    }
}
