//! Random byte sources and the byte consumer used by the sampler.
//!
//! The sampler accepts any [TryRngCore]. Infallible generators (anything implementing
//! [RngCore]) qualify through `rand_core`'s blanket implementation; production callers
//! should pass a cryptographically secure generator. The sources defined here exist for
//! reproducibility:
//!
//! - [Shake256Rng] turns a seed into a deterministic SHAKE256 byte stream. This is the source
//!   known-answer tests are keyed on.
//! - [ReplayRng] replays a fixed byte slice and fails once it runs dry.
//! - [ReaderRng] (requires `std`) reads from any [std::io::Read].

pub use rand_core::{CryptoRng, RngCore, SeedableRng, TryRngCore};

mod replay;
pub use replay::ReplayRng;

mod shake;
pub use shake::Shake256Rng;

#[cfg(feature = "std")]
mod reader;
#[cfg(feature = "std")]
pub use reader::ReaderRng;


// RANDOM BITS
// ================================================================================================

/// Draws exact-length byte strings from a borrowed random source.
///
/// Bytes are handed out in the order the source yields them, with no buffering in between.
pub(crate) struct RandomBits<'a, R: TryRngCore + ?Sized> {
    source: &'a mut R,
}

impl<'a, R: TryRngCore + ?Sized> RandomBits<'a, R> {
    pub fn new(source: &'a mut R) -> Self {
        Self { source }
    }

    /// Fills `dst` entirely with bytes from the source.
    ///
    /// # Panics
    /// Panics if the source fails.
    pub fn read(&mut self, dst: &mut [u8]) {
        if let Err(err) = self.source.try_fill_bytes(dst) {
            panic!("random source failed to supply {} bytes: {err}", dst.len());
        }
    }
}
