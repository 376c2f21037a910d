//! Ziggurat partition tables.
//!
//! Each distribution is covered by a stack of equal-area horizontal boxes
//! plus a tail region. The boxes are fully determined by the box count,
//! the tail cutoff `R`, and the common box area `V`; the remaining `x`
//! coordinates follow from a closed-form recurrence on the density. The
//! tables are built once on first use and shared afterwards.

use std::sync::OnceLock;

/// Number of boxes in the normal partition.
pub(crate) const NORMAL_BOXES: usize = 128;
/// Tail cutoff for the normal partition.
pub(crate) const NORMAL_R: f64 = 3.442_619_855_896_652_121_4;
/// Common box area for the normal partition.
pub(crate) const NORMAL_V: f64 = 0.009_912_563_035_336_461_079_1;

/// Number of boxes in the exponential partition.
pub(crate) const EXPONENTIAL_BOXES: usize = 256;
/// Tail cutoff for the exponential partition.
pub(crate) const EXPONENTIAL_R: f64 = 7.697_117_470_131_049_714_0;
/// Common box area for the exponential partition.
pub(crate) const EXPONENTIAL_V: f64 = 0.003_949_659_822_581_557_22;

/// Exponent bits that place a 52-bit mantissa in [1, 2).
pub(crate) const ONE_TO_TWO: u64 = 0x3FF0_0000_0000_0000;

/// Precomputed partition coordinates for one distribution.
///
/// `x` holds the right edge of each box from the widest (index 0, which
/// absorbs the tail) down to 0.0 at the top; `ratio[i]` is `x[i+1] / x[i]`,
/// the fraction of box `i` guaranteed to lie under the density.
pub(crate) struct ZigguratTables {
    /// Box x-coordinates, `boxes + 1` entries, strictly decreasing to 0.
    pub x: Vec<f64>,
    /// Fast-acceptance thresholds, `boxes` entries.
    pub ratio: Vec<f64>,
}

impl ZigguratTables {
    /// Build the tables for a density `f` with inverse `f_inv`.
    ///
    /// `f` must be the density scaled so that `f(0) == 1`, decreasing on
    /// `[0, inf)`, and `f_inv` its inverse on that range.
    fn build(
        boxes: usize,
        r: f64,
        v: f64,
        f: impl Fn(f64) -> f64,
        f_inv: impl Fn(f64) -> f64,
    ) -> Self {
        let mut x = vec![0.0; boxes + 1];
        x[0] = v / f(r);
        x[1] = r;
        for i in 2..boxes {
            x[i] = f_inv(v / x[i - 1] + f(x[i - 1]));
        }
        x[boxes] = 0.0;

        let ratio = (0..boxes).map(|i| x[i + 1] / x[i]).collect();
        Self { x, ratio }
    }
}

/// Tables for the standard normal density.
pub(crate) fn normal() -> &'static ZigguratTables {
    static TABLES: OnceLock<ZigguratTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        ZigguratTables::build(
            NORMAL_BOXES,
            NORMAL_R,
            NORMAL_V,
            |t| (-0.5 * t * t).exp(),
            |y| (-2.0 * y.ln()).sqrt(),
        )
    })
}

/// Tables for the unit exponential density.
pub(crate) fn exponential() -> &'static ZigguratTables {
    static TABLES: OnceLock<ZigguratTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        ZigguratTables::build(
            EXPONENTIAL_BOXES,
            EXPONENTIAL_R,
            EXPONENTIAL_V,
            |t| (-t).exp(),
            |y| -y.ln(),
        )
    })
}
