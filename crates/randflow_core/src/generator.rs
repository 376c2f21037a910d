//! The generator core: lifecycle, seeding, buffer refill, and typed draws.
//!
//! A [`Generator`] owns three buffers (seed-of-record, algorithm state,
//! output words) and drives one independent random stream. All typed
//! outputs are derived from the 32-bit word stream produced by the
//! algorithm's refill operation; the derivation protocols are fixed here
//! so that every algorithm yields the same bit-to-value mapping.

use tracing::{debug, trace};

use crate::algorithm::Algorithm;
use crate::entropy::{system_entropy, EntropySource, SystemEntropy};
use crate::error::RandError;

/// Tag ORed into the cached high half-word so that a zero-valued half
/// cannot be mistaken for an empty cache.
const LEFTOVER_TAG: u32 = 0x1ef7_0000;

/// IEEE-754 binary64 exponent field for the interval [1, 2).
const ONE_TO_TWO: u64 = 0x3FF0_0000_0000_0000;

/// Largest limit accepted by [`Generator::rand`].
pub const RAND_LIMIT_MAX: u32 = 0xFFFF;

/// Generator lifecycle states.
///
/// Transitions are strictly ordered with no cycles back to `Allocated`:
/// `Allocated → Seeded` on the first seed, `Seeded → Reseeded` on a
/// reseed. Seeding again from any state returns to `Seeded` (the
/// reproducibility marker is replaced, not folded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Buffers sized and zeroed, open hook run, no seed applied yet.
    Allocated,
    /// Seed applied at least once; the stored seed reproduces the stream.
    Seeded,
    /// Extra material folded in; no single seed reproduces the stream.
    Reseeded,
}

/// One independent pseudo-random stream.
///
/// The output buffer is consumed back-to-front: `pos` counts the words not
/// yet consumed, and reaching zero triggers a full refill. A generator is
/// single-threaded; distinct generators are fully independent.
///
/// # Examples
///
/// ```
/// use randflow_core::{Algorithm, Generator};
///
/// struct Weyl;
///
/// impl Algorithm for Weyl {
///     fn name(&self) -> &'static str { "weyl" }
///     fn seed_size(&self) -> usize { 1 }
///     fn state_size(&self) -> usize { 1 }
///     fn buf_size(&self) -> usize { 16 }
///     fn refill(&self, state: &mut [u32], buf: &mut [u32]) {
///         for word in buf.iter_mut().rev() {
///             state[0] = state[0].wrapping_add(0x9e3779b9);
///             *word = state[0];
///         }
///     }
/// }
///
/// static WEYL: Weyl = Weyl;
///
/// let mut g = Generator::open(&WEYL).unwrap();
/// g.seed_value(42).unwrap();
/// let word = g.next32().unwrap();
/// let unit = g.next_double().unwrap();
/// assert!((0.0..1.0).contains(&unit));
/// # let _ = word;
/// ```
pub struct Generator {
    alg: &'static dyn Algorithm,
    lifecycle: Lifecycle,
    seed: Vec<u32>,
    state: Vec<u32>,
    buf: Vec<u32>,
    /// Unconsumed words remaining at the front of `buf`.
    pos: usize,
    /// Tagged 16-bit half-word cache; zero means empty.
    leftover: u32,
}

impl Generator {
    /// Opens a generator for the given algorithm.
    ///
    /// State and output buffers are allocated zeroed to the descriptor's
    /// sizes, the algorithm's open hook runs, and the generator starts in
    /// [`Lifecycle::Allocated`]. It must be seeded before any draw.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::BadDescriptor`] if the descriptor reports a
    /// zero seed, state, or buffer size.
    pub fn open(alg: &'static dyn Algorithm) -> Result<Self, RandError> {
        if alg.state_size() == 0 {
            return Err(RandError::BadDescriptor {
                name: alg.name(),
                reason: "state size must be at least one word",
            });
        }
        if alg.buf_size() == 0 {
            return Err(RandError::BadDescriptor {
                name: alg.name(),
                reason: "buffer size must be at least one word",
            });
        }
        if alg.seed_size() == 0 {
            return Err(RandError::BadDescriptor {
                name: alg.name(),
                reason: "recommended seed size must be at least one word",
            });
        }

        let mut state = vec![0u32; alg.state_size()];
        let buf = vec![0u32; alg.buf_size()];
        alg.open(&mut state);
        debug!(algorithm = alg.name(), "generator opened");

        Ok(Self {
            alg,
            lifecycle: Lifecycle::Allocated,
            seed: Vec::new(),
            state,
            buf,
            pos: 0,
            leftover: 0,
        })
    }

    /// Name of the algorithm driving this generator.
    pub fn algorithm_name(&self) -> &'static str {
        self.alg.name()
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Length in words of the stored seed-of-record.
    pub fn seed_len(&self) -> usize {
        self.seed.len()
    }

    // ----- seeding -------------------------------------------------------

    /// Seeds from system entropy and returns the seed length used.
    ///
    /// Requests the stored seed's length if the generator already holds a
    /// seed-of-record, otherwise the algorithm's recommended size.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::Entropy`] if the system source fails; the
    /// generator keeps its previous seed and state in that case.
    pub fn seed(&mut self) -> Result<usize, RandError> {
        self.seed_from(&mut SystemEntropy)
    }

    /// Seeds from the given entropy source and returns the length used.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`RandError::Entropy`] failure.
    pub fn seed_from(&mut self, source: &mut dyn EntropySource) -> Result<usize, RandError> {
        let len = if self.seed.is_empty() {
            self.alg.seed_size()
        } else {
            self.seed.len()
        };
        let mut material = vec![0u32; len];
        source.fill(&mut material)?;
        self.apply_seed(material);
        Ok(len)
    }

    /// Seeds from a single word.
    ///
    /// Equivalent to [`seed_with`](Self::seed_with) on a one-word slice.
    pub fn seed_value(&mut self, value: u32) -> Result<usize, RandError> {
        self.seed_with(&[value])
    }

    /// Seeds from the supplied words, copied verbatim as the new
    /// seed-of-record, and returns the seed length used.
    ///
    /// The algorithm's seed operation repopulates the entire state from
    /// this material, the output cursor resets to empty, and the
    /// lifecycle becomes [`Lifecycle::Seeded`] even if the generator had
    /// been reseeded before: re-seeding replaces the history marker.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::EmptySeed`] for zero-length material.
    pub fn seed_with(&mut self, material: &[u32]) -> Result<usize, RandError> {
        if material.is_empty() {
            return Err(RandError::EmptySeed);
        }
        self.apply_seed(material.to_vec());
        Ok(material.len())
    }

    fn apply_seed(&mut self, material: Vec<u32>) {
        self.seed = material;
        self.alg.seed(&mut self.state, &self.seed);
        self.pos = 0;
        self.leftover = 0;
        self.lifecycle = Lifecycle::Seeded;
        debug!(
            algorithm = self.alg.name(),
            seed_words = self.seed.len(),
            "generator seeded"
        );
    }

    /// Reseeds from system entropy and returns the length used.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] before the first seed, or
    /// [`RandError::Entropy`] if the system source fails.
    pub fn reseed(&mut self) -> Result<usize, RandError> {
        if self.lifecycle == Lifecycle::Allocated {
            return Err(RandError::NotSeeded);
        }
        let mut material = vec![0u32; self.seed.len()];
        system_entropy(&mut material)?;
        self.apply_reseed(material);
        Ok(self.seed.len())
    }

    /// Reseeds from a single word.
    pub fn reseed_value(&mut self, value: u32) -> Result<usize, RandError> {
        self.reseed_with(&[value])
    }

    /// Folds the supplied words into existing state via the algorithm's
    /// reseed operation and returns the length used.
    ///
    /// State is not zeroed first: the fold adds entropy on top of the
    /// sequence history. The material replaces the stored seed-of-record,
    /// the cursor resets, and the lifecycle becomes
    /// [`Lifecycle::Reseeded`], so reproducibility queries now correctly
    /// report that no single seed reproduces the stream.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] before the first seed, or
    /// [`RandError::EmptySeed`] for zero-length material.
    pub fn reseed_with(&mut self, material: &[u32]) -> Result<usize, RandError> {
        if self.lifecycle == Lifecycle::Allocated {
            return Err(RandError::NotSeeded);
        }
        if material.is_empty() {
            return Err(RandError::EmptySeed);
        }
        self.apply_reseed(material.to_vec());
        Ok(material.len())
    }

    fn apply_reseed(&mut self, material: Vec<u32>) {
        self.seed = material;
        self.alg.reseed(&mut self.state, &self.seed);
        self.pos = 0;
        self.leftover = 0;
        self.lifecycle = Lifecycle::Reseeded;
        debug!(
            algorithm = self.alg.name(),
            seed_words = self.seed.len(),
            "generator reseeded"
        );
    }

    /// Copies the stored seed into `out` and reports reproducibility.
    ///
    /// Returns the number of words copied and `true` iff resupplying the
    /// copied seed would reproduce the current sequence exactly: the
    /// generator was seeded exactly once (never reseeded) and `out` was
    /// large enough to hold the entire stored seed.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] before the first seed.
    pub fn stored_seed(&self, out: &mut [u32]) -> Result<(usize, bool), RandError> {
        if self.lifecycle == Lifecycle::Allocated {
            return Err(RandError::NotSeeded);
        }
        let n = out.len().min(self.seed.len());
        out[..n].copy_from_slice(&self.seed[..n]);
        let reproducible = out.len() >= self.seed.len() && self.lifecycle == Lifecycle::Seeded;
        Ok((n, reproducible))
    }

    // ----- draws ---------------------------------------------------------

    fn check_seeded(&self) -> Result<(), RandError> {
        match self.lifecycle {
            Lifecycle::Allocated => Err(RandError::NotSeeded),
            Lifecycle::Seeded | Lifecycle::Reseeded => Ok(()),
        }
    }

    fn refill(&mut self) {
        trace!(algorithm = self.alg.name(), "buffer refill");
        self.alg.refill(&mut self.state, &mut self.buf);
        self.pos = self.buf.len();
    }

    /// Returns the next 32 random bits.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] before the first seed.
    pub fn next32(&mut self) -> Result<u32, RandError> {
        self.check_seeded()?;
        if self.pos == 0 {
            self.refill();
        }
        self.pos -= 1;
        Ok(self.buf[self.pos])
    }

    /// Returns the next 16 random bits.
    ///
    /// On a cache miss one 32-bit word is drawn; its low half is returned
    /// and its high half cached (tagged, so a zero half-word is a valid
    /// cache entry). On a hit the cached half is returned and cleared.
    /// This halves refill traffic for 16-bit consumers without ever
    /// re-issuing a bit.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] before the first seed.
    pub fn next16(&mut self) -> Result<u16, RandError> {
        if self.leftover != 0 {
            let r = (self.leftover & 0xFFFF) as u16;
            self.leftover = 0;
            return Ok(r);
        }
        let r32 = self.next32()?;
        self.leftover = (r32 >> 16) | LEFTOVER_TAG;
        Ok((r32 & 0xFFFF) as u16)
    }

    /// Returns the next 64 random bits.
    ///
    /// Composed of two consecutive 32-bit draws: the earlier draw is the
    /// high word, the later one the low word. A 64-bit value is therefore
    /// always expressible as a pair of 32-bit draws, never split across a
    /// refill boundary mid-word.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] before the first seed.
    pub fn next64(&mut self) -> Result<u64, RandError> {
        let hi = u64::from(self.next32()?);
        Ok((hi << 32) | u64::from(self.next32()?))
    }

    /// Returns a uniform double in [0, 1) with full 52-bit mantissa
    /// entropy.
    ///
    /// Draws 64 bits, discards the low 12, sets the binary64 exponent to
    /// the bias (a value in [1, 2)), and subtracts 1.0. Bit patterns are
    /// exactly reproducible from the underlying 64-bit draw.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] before the first seed.
    pub fn next_double(&mut self) -> Result<f64, RandError> {
        let r = self.next64()?;
        Ok(f64::from_bits((r >> 12) | ONE_TO_TWO) - 1.0)
    }

    /// Returns a uniform double in (-1, 1).
    ///
    /// The low bit of a 64-bit draw selects the sign; the remaining bits
    /// feed the [0, 1) construction. The single degenerate case, a zero
    /// magnitude with the sign bit set, is redrawn so that negative zero
    /// is never produced.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] before the first seed.
    pub fn next_signed_double(&mut self) -> Result<f64, RandError> {
        loop {
            let r = self.next64()?;
            let negative = r & 1 != 0;
            let mantissa = r >> 12;
            if negative && mantissa == 0 {
                continue;
            }
            let d = f64::from_bits(mantissa | ONE_TO_TWO) - 1.0;
            return Ok(if negative { -d } else { d });
        }
    }

    /// Returns a uniform integer in `[0, limit)` without modulo bias.
    ///
    /// Builds the smallest all-ones mask covering `limit - 1` by
    /// successive OR-shifts, then rejection-samples masked 16-bit draws
    /// until one falls under the limit. Bounded to 16 bits: this call is
    /// built for small-domain selection (deck and array indices), and the
    /// 16-bit path halves buffer traffic.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::BadLimit`] unless `1 <= limit <= 65535`, or
    /// [`RandError::NotSeeded`] before the first seed.
    pub fn rand(&mut self, limit: u32) -> Result<u32, RandError> {
        if limit == 0 || limit > RAND_LIMIT_MAX {
            return Err(RandError::BadLimit { limit });
        }
        let mut mask = limit - 1;
        mask |= mask >> 1;
        mask |= mask >> 2;
        mask |= mask >> 4;
        mask |= mask >> 8;

        loop {
            let v = u32::from(self.next16()?) & mask;
            if v < limit {
                return Ok(v);
            }
        }
    }

    /// Skips `count` future 32-bit outputs without materialising them.
    ///
    /// Advances the cursor arithmetic directly, refilling whole buffers
    /// as needed; the subsequent stream is bit-identical to calling
    /// [`next32`](Self::next32) `count` times and discarding the results.
    /// The 16-bit leftover cache is dropped, matching the word-aligned
    /// equivalence.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] before the first seed.
    pub fn discard(&mut self, count: usize) -> Result<(), RandError> {
        self.check_seeded()?;
        self.leftover = 0;
        if count <= self.pos {
            self.pos -= count;
            return Ok(());
        }
        let mut remaining = count - self.pos;
        self.pos = self.buf.len();
        while remaining > 0 {
            self.refill();
            if remaining <= self.buf.len() {
                self.pos = self.buf.len() - remaining;
                remaining = 0;
            } else {
                remaining -= self.buf.len();
            }
        }
        Ok(())
    }

    /// Moves a uniformly random `count`-combination to the front of the
    /// slice, every (combination, ordering) pair equally likely.
    ///
    /// Partial Fisher–Yates: each position `i < count` is swapped with a
    /// uniformly chosen position in `[i, len)`. When `count == len` the
    /// loop runs `len - 1` times, since the final element is fixed by the
    /// rest. Slices shorter than two elements are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::BadShuffleCount`] if `count > array.len()`,
    /// [`RandError::BadLimit`] if the slice is longer than the 16-bit
    /// [`rand`](Self::rand) domain, or [`RandError::NotSeeded`] before
    /// the first seed.
    pub fn shuffle<T>(&mut self, array: &mut [T], count: usize) -> Result<(), RandError> {
        let len = array.len();
        if count > len {
            return Err(RandError::BadShuffleCount { count, len });
        }
        if len < 2 {
            self.check_seeded()?;
            return Ok(());
        }
        let swaps = if count == len { len - 1 } else { count };
        for i in 0..swaps {
            let r = self.rand((len - i) as u32)? as usize;
            array.swap(i, i + r);
        }
        Ok(())
    }

    // ----- raw buffer views (shared with the binding seam) ---------------

    pub(crate) fn parts(&self) -> (&[u32], &[u32], usize, u32) {
        (&self.state, &self.buf, self.pos, self.leftover)
    }

    pub(crate) fn parts_mut(
        &mut self,
    ) -> (
        &'static dyn Algorithm,
        &mut Vec<u32>,
        &mut Vec<u32>,
        &mut usize,
        &mut u32,
        &mut Lifecycle,
    ) {
        (
            self.alg,
            &mut self.state,
            &mut self.buf,
            &mut self.pos,
            &mut self.leftover,
            &mut self.lifecycle,
        )
    }
}

impl Drop for Generator {
    fn drop(&mut self) {
        self.alg.close(&mut self.state);
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("algorithm", &self.alg.name())
            .field("lifecycle", &self.lifecycle)
            .field("seed_len", &self.seed.len())
            .field("state_len", &self.state.len())
            .field("buf_len", &self.buf.len())
            .field("pos", &self.pos)
            .finish()
    }
}
