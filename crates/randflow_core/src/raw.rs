//! Raw accessor surface for foreign-language bindings.
//!
//! Wrapper layers (JNI, ctypes, and similar) manage generator memory on
//! their side of the boundary and only need plain get/set access to the
//! engine's buffers plus trampolines into the algorithm operations. This
//! module is that seam. It performs no validation beyond lifecycle and
//! bounds assertions; it is not intended for ordinary client code.

use crate::error::RandError;
use crate::generator::{Generator, Lifecycle};

impl Generator {
    /// Read-only view of the algorithm state words.
    pub fn raw_state(&self) -> &[u32] {
        self.parts().0
    }

    /// Mutable view of the algorithm state words.
    pub fn raw_state_mut(&mut self) -> &mut [u32] {
        self.parts_mut().1
    }

    /// Read-only view of the output buffer.
    pub fn raw_buffer(&self) -> &[u32] {
        self.parts().1
    }

    /// Mutable view of the output buffer.
    pub fn raw_buffer_mut(&mut self) -> &mut [u32] {
        self.parts_mut().2
    }

    /// Current cursor: the number of unconsumed words at the front of the
    /// output buffer.
    pub fn raw_cursor(&self) -> usize {
        self.parts().2
    }

    /// Moves the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::BadCursor`] if `pos` exceeds the buffer
    /// length.
    pub fn raw_set_cursor(&mut self, pos: usize) -> Result<(), RandError> {
        let bufsize = self.raw_buffer().len();
        if pos > bufsize {
            return Err(RandError::BadCursor { pos, bufsize });
        }
        *self.parts_mut().3 = pos;
        Ok(())
    }

    /// Current tagged 16-bit leftover cache word (zero when empty).
    pub fn raw_leftover(&self) -> u32 {
        self.parts().3
    }

    /// Clears the 16-bit leftover cache.
    pub fn raw_clear_leftover(&mut self) {
        *self.parts_mut().4 = 0;
    }

    /// Overrides the lifecycle tag.
    ///
    /// Bindings that seed state directly through
    /// [`raw_call_seed`](Self::raw_call_seed) use this to mark the
    /// generator drawable.
    pub fn raw_set_lifecycle(&mut self, lifecycle: Lifecycle) {
        *self.parts_mut().5 = lifecycle;
    }

    /// Invokes the algorithm's open hook on the current state.
    pub fn raw_call_open(&mut self) {
        let (alg, state, ..) = self.parts_mut();
        alg.open(state);
    }

    /// Invokes the algorithm's close hook on the current state.
    pub fn raw_call_close(&mut self) {
        let (alg, state, ..) = self.parts_mut();
        alg.close(state);
    }

    /// Invokes the algorithm's seed operation with caller-held material.
    ///
    /// Unlike [`Generator::seed_with`], the material does not become the
    /// seed-of-record and the cursor is untouched.
    pub fn raw_call_seed(&mut self, seed: &[u32]) {
        let (alg, state, ..) = self.parts_mut();
        alg.seed(state, seed);
    }

    /// Invokes the algorithm's reseed operation with caller-held material.
    pub fn raw_call_reseed(&mut self, seed: &[u32]) {
        let (alg, state, ..) = self.parts_mut();
        alg.reseed(state, seed);
    }

    /// Invokes the algorithm's refill and marks the buffer full.
    pub fn raw_call_refill(&mut self) {
        let (alg, state, buf, pos, ..) = self.parts_mut();
        alg.refill(state, buf);
        *pos = buf.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;

    struct Weyl;

    impl Algorithm for Weyl {
        fn name(&self) -> &'static str {
            "weyl"
        }
        fn seed_size(&self) -> usize {
            1
        }
        fn state_size(&self) -> usize {
            1
        }
        fn buf_size(&self) -> usize {
            8
        }
        fn refill(&self, state: &mut [u32], buf: &mut [u32]) {
            for word in buf.iter_mut().rev() {
                state[0] = state[0].wrapping_add(0x9e37_79b9);
                *word = state[0];
            }
        }
    }

    static WEYL: Weyl = Weyl;

    #[test]
    fn test_cursor_bounds_checked() {
        let mut g = Generator::open(&WEYL).unwrap();
        assert!(g.raw_set_cursor(8).is_ok());
        assert_eq!(
            g.raw_set_cursor(9),
            Err(RandError::BadCursor { pos: 9, bufsize: 8 })
        );
    }

    #[test]
    fn test_trampolines_drive_the_same_stream() {
        // Bindings that seed and refill by hand see the stream the safe
        // API produces.
        let mut a = Generator::open(&WEYL).unwrap();
        a.seed_value(5).unwrap();
        let expect: Vec<u32> = (0..3).map(|_| a.next32().unwrap()).collect();

        let mut b = Generator::open(&WEYL).unwrap();
        b.raw_call_seed(&[5]);
        b.raw_set_lifecycle(Lifecycle::Seeded);
        b.raw_call_refill();
        let n = b.raw_cursor();
        let got: Vec<u32> = (0..3).map(|i| b.raw_buffer()[n - 1 - i]).collect();
        assert_eq!(expect, got);
    }

    #[test]
    fn test_state_views() {
        let mut g = Generator::open(&WEYL).unwrap();
        g.raw_state_mut()[0] = 77;
        assert_eq!(g.raw_state()[0], 77);
    }
}
