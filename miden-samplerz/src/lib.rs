#![no_std]

//! Discrete Gaussian integer sampler used by Falcon signatures.
//!
//! [Sampler::samplerz] draws an integer from `D_{Z, mu, sigma}` using bytes from a caller-owned
//! random source. The output is a deterministic function of the byte stream, so seeded sources
//! such as [rand::Shake256Rng] reproduce known-answer sequences exactly.
//!
//! ```
//! use miden_samplerz::{Sampler, rand::Shake256Rng};
//!
//! let mut rng = Shake256Rng::new(b"seed");
//! let mut sampler = Sampler::new(&mut rng);
//! let z = sampler.samplerz(-3.25, 1.7, 1.2778336969128337);
//! assert!((-22..=15).contains(&z));
//! ```

#[cfg(feature = "std")]
extern crate std;

mod bignum;
mod constants;
mod error;
pub mod rand;
mod sampler;

// RE-EXPORTS
// ================================================================================================

pub use constants::SIGMA_MAX;
pub use error::RandomSourceError;
pub use sampler::{Sampler, sampler_z};

