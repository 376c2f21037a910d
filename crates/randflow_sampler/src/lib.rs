//! # randflow_sampler: Non-Uniform Deviates
//!
//! ## Sampler Layer Role
//!
//! Ziggurat samplers layered over any seeded [`Generator`]:
//! - Shared partition tables, built once on first use (`tables`)
//! - Standard normal deviates (`normal`)
//! - Unit exponential deviates (`exponential`)
//!
//! The samplers consume only the generator's public 64-bit and double
//! draws, so every registered algorithm can drive them and a fixed seed
//! reproduces the same deviate stream.
//!
//! ## Usage Example
//!
//! ```rust
//! use randflow_algorithms::registry;
//! use randflow_sampler::Deviates;
//!
//! let mut g = registry::open("jkiss")?;
//! g.seed_value(42)?;
//! let z = g.next_normal()?;
//! let wait = g.next_exponential()?;
//! assert!(wait >= 0.0);
//! # let _ = z;
//! # Ok::<(), randflow_core::RandError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

use randflow_core::{Generator, RandError};

mod exponential;
mod normal;
mod tables;

/// Non-uniform draws available on any seeded generator.
pub trait Deviates {
    /// Draw from the standard normal distribution (mean 0, variance 1).
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] if the generator has not been
    /// seeded.
    fn next_normal(&mut self) -> Result<f64, RandError>;

    /// Draw from the unit exponential distribution (mean 1).
    ///
    /// The result is always non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::NotSeeded`] if the generator has not been
    /// seeded.
    fn next_exponential(&mut self) -> Result<f64, RandError>;
}

impl Deviates for Generator {
    fn next_normal(&mut self) -> Result<f64, RandError> {
        normal::draw(self)
    }

    fn next_exponential(&mut self) -> Result<f64, RandError> {
        exponential::draw(self)
    }
}
