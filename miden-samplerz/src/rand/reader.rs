use std::io::Read;

use rand_core::TryRngCore;

use crate::RandomSourceError;

// READER RNG
// ================================================================================================

/// A random source backed by an [std::io::Read] implementation.
///
/// Every read must be satisfied in full; a short read or an I/O error is reported as
/// [RandomSourceError::Io].
#[derive(Debug)]
pub struct ReaderRng<R: Read> {
    reader: R,
}

impl<R: Read> ReaderRng<R> {
    /// Returns a new [ReaderRng] reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> TryRngCore for ReaderRng<R> {
    type Error = RandomSourceError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut bytes = [0_u8; 4];
        self.try_fill_bytes(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut bytes = [0_u8; 8];
        self.try_fill_bytes(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.reader.read_exact(dst)?;
        Ok(())
    }
}
