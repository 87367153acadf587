use core::fmt;

use rand_core::{CryptoRng, RngCore, SeedableRng, impls};
use sha3::{
    Shake256, Shake256Reader,
    digest::{ExtendableOutput, Update, XofReader},
};

// SHAKE256 RNG
// ================================================================================================

/// Deterministic byte stream produced by the SHAKE256 extendable-output function.
///
/// The seed is absorbed once; every subsequent read squeezes the next bytes of the XOF output.
/// Reads are not buffered, so splitting a read into several smaller ones yields exactly the same
/// bytes.
pub struct Shake256Rng {
    reader: Shake256Reader,
}

impl Shake256Rng {
    /// Returns a new [Shake256Rng] absorbing `seed`.
    pub fn new(seed: &[u8]) -> Self {
        let mut hasher = Shake256::default();
        hasher.update(seed);
        Self { reader: hasher.finalize_xof() }
    }
}

impl RngCore for Shake256Rng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.reader.read(dst);
    }
}

impl CryptoRng for Shake256Rng {}

impl SeedableRng for Shake256Rng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(&seed)
    }
}

impl fmt::Debug for Shake256Rng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<elided state for Shake256Rng>")
    }
}
