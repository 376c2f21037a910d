//! Standard normal deviates.
//!
//! One 64-bit draw supplies a sign bit, a 7-bit box index, and a 52-bit
//! mantissa. Most draws land strictly inside a box and return after a
//! single multiply; the rest fall to an explicit tail algorithm (box 0)
//! or a wedge rejection against the density.

use randflow_core::{Generator, RandError};

use crate::tables::{self, NORMAL_R, ONE_TO_TWO};

/// Draw one deviate from the standard normal distribution.
pub(crate) fn draw(g: &mut Generator) -> Result<f64, RandError> {
    let t = tables::normal();
    loop {
        let mut r;
        let mut sign;
        let mut i;
        loop {
            r = g.next64()?;
            sign = (r & 1) != 0;
            i = ((r >> 1) & 0x7F) as usize;
            r >>= 12;
            // A zero mantissa with the sign set would duplicate +0.0.
            if !(sign && r == 0) {
                break;
            }
        }
        let a = f64::from_bits(r | ONE_TO_TWO) - 1.0;
        let u0 = if sign { -a } else { a };

        if a < t.ratio[i] {
            return Ok(u0 * t.x[i]);
        }
        if i == 0 {
            // Marsaglia tail: sample beyond the cutoff by rejection.
            loop {
                let x = g.next_double()?.ln() / NORMAL_R;
                let y = g.next_double()?.ln();
                if -2.0 * y >= x * x {
                    return Ok(if sign { x - NORMAL_R } else { NORMAL_R - x });
                }
            }
        }
        let x = u0 * t.x[i];
        let f0 = (-0.5 * (t.x[i] * t.x[i] - x * x)).exp();
        let f1 = (-0.5 * (t.x[i + 1] * t.x[i + 1] - x * x)).exp();
        if f1 + g.next_double()? * (f0 - f1) < 1.0 {
            return Ok(x);
        }
    }
}
