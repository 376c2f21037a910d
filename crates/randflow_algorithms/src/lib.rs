//! # randflow_algorithms: Builtin Generation Algorithms
//!
//! ## Algorithm Layer Role
//!
//! Concrete implementations of the [`randflow_core::Algorithm`] contract
//! plus the static registry that names them:
//!
//! - [`Jkiss`] — combined LCG/xorshift/multiply-with-carry (period ~2^127)
//! - [`Mt19937`] — the Mersenne Twister (period 2^19937 - 1)
//! - [`Mwc256`] — 256-lane multiply-with-carry (period ~2^8222)
//! - [`Mwc8222`] — in-place multiply-with-carry variant, distinct stream
//! - [`registry`] — fixed ordered table, name/id discovery, `open`
//!
//! ## Usage Example
//!
//! ```rust
//! let mut g = randflow_algorithms::open("jkiss")?;
//! g.seed_with(&[1, 2, 3, 4])?;
//!
//! let word = g.next32()?;
//! let mut deck: Vec<u8> = (0..52u8).collect();
//! g.shuffle(&mut deck, 5)?; // deal five cards
//! # let _ = word;
//! # Ok::<(), randflow_core::RandError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod jkiss;
mod mt19937;
mod mwc256;
mod mwc8222;
pub mod registry;

pub use jkiss::Jkiss;
pub use mt19937::Mt19937;
pub use mwc256::Mwc256;
pub use mwc8222::Mwc8222;
pub use registry::{by_id, by_name, count, id_of, open, open_default, open_id, ALGORITHMS};
