//! Unit exponential deviates.
//!
//! Same structure as the normal sampler but one-sided: an 8-bit box
//! index and a 52-bit mantissa per 64-bit draw, with the tail handled
//! by the exponential's self-similarity (a fresh exponential shifted
//! past the cutoff).

use randflow_core::{Generator, RandError};

use crate::tables::{self, EXPONENTIAL_R, ONE_TO_TWO};

/// Draw one deviate from the unit exponential distribution.
pub(crate) fn draw(g: &mut Generator) -> Result<f64, RandError> {
    let t = tables::exponential();
    loop {
        let r = g.next64()?;
        let i = (r & 0xFF) as usize;
        let bits = (r >> 8) & 0x000F_FFFF_FFFF_FFFF;
        let u0 = f64::from_bits(bits | ONE_TO_TWO) - 1.0;

        if u0 < t.ratio[i] {
            return Ok(u0 * t.x[i]);
        }
        if i == 0 {
            return Ok(EXPONENTIAL_R - g.next_double()?.ln());
        }

        let x = u0 * t.x[i];
        let f0 = (x - t.x[i]).exp();
        let f1 = (x - t.x[i + 1]).exp();
        if f1 + g.next_double()? * (f0 - f1) < 1.0 {
            return Ok(x);
        }
    }
}
