use rand_core::TryRngCore;

use crate::RandomSourceError;

// REPLAY RNG
// ================================================================================================

/// A random source replaying a fixed byte string.
///
/// Once the bytes run out every read fails with [RandomSourceError::Exhausted]; a failed read
/// consumes nothing.
#[derive(Debug, Clone)]
pub struct ReplayRng<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ReplayRng<'a> {
    /// Returns a new [ReplayRng] which yields `bytes` in order.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Returns the number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes left.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }
}

impl TryRngCore for ReplayRng<'_> {
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
        let available = self.remaining();
        if dst.len() > available {
            return Err(RandomSourceError::Exhausted { requested: dst.len(), available });
        }

        let end = self.position + dst.len();
        dst.copy_from_slice(&self.bytes[self.position..end]);
        self.position = end;
        Ok(())
    }
}
