//! # randflow_core: Generator Engine
//!
//! ## Core Layer Role
//!
//! randflow_core is the bottom layer of the workspace, providing:
//! - The algorithm contract and default seed diffusion (`algorithm`)
//! - The generator core: lifecycle, refill protocol, typed draws
//!   (`generator`)
//! - System entropy acquisition (`entropy`)
//! - Error types: `RandError` (`error`)
//! - The raw accessor seam for language bindings (`raw`)
//!
//! Concrete algorithms live in `randflow_algorithms`; non-uniform
//! samplers in `randflow_sampler`. This crate depends on no other
//! workspace crate.
//!
//! ## Usage Example
//!
//! ```rust
//! use randflow_core::{Algorithm, Generator};
//!
//! struct Weyl;
//!
//! impl Algorithm for Weyl {
//!     fn name(&self) -> &'static str { "weyl" }
//!     fn seed_size(&self) -> usize { 1 }
//!     fn state_size(&self) -> usize { 1 }
//!     fn buf_size(&self) -> usize { 16 }
//!     fn refill(&self, state: &mut [u32], buf: &mut [u32]) {
//!         for word in buf.iter_mut().rev() {
//!             state[0] = state[0].wrapping_add(0x9e3779b9);
//!             *word = state[0];
//!         }
//!     }
//! }
//!
//! static WEYL: Weyl = Weyl;
//!
//! let mut g = Generator::open(&WEYL)?;
//! g.seed_with(&[1, 2, 3])?;
//! let word = g.next32()?;
//! let card = g.rand(52)?;
//! # let _ = (word, card);
//! # Ok::<(), randflow_core::RandError>(())
//! ```
//!
//! ## Concurrency
//!
//! A `Generator` is single-threaded: its cursor and half-word cache are
//! mutated in place with no atomicity. Distinct generators share no
//! mutable state and may run on different threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod algorithm;
pub mod entropy;
pub mod error;
mod generator;
mod raw;

pub use algorithm::{default_reseed, default_seed, Algorithm};
pub use error::RandError;
pub use generator::{Generator, Lifecycle, RAND_LIMIT_MAX};
