//! Fixed-width extended-precision scratch integer.

use crypto_bigint::{Encoding, U256};
use subtle::{Choice, ConstantTimeLess};

// BIG NUM
// ================================================================================================

/// A 256-bit unsigned integer used as scratch space by the sampler.
///
/// All arithmetic wraps modulo 2^256. The width leaves enough headroom for the products of two
/// 64-bit values computed during the fixed-point evaluation of `exp(-x)`, so nothing is ever
/// truncated before the following shift. Ordering follows the integer value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct BigNum(U256);

impl BigNum {
    /// The value zero.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Number of bytes in the big-endian representation.
    pub const BYTES: usize = 32;

    /// Returns a new value equal to `value`.
    pub const fn from_u64(value: u64) -> Self {
        Self(U256::from_u64(value))
    }

    /// Returns a new value equal to `value`.
    pub const fn from_u128(value: u128) -> Self {
        Self(U256::from_u128(value))
    }

    /// Sets `self` to the big-endian integer encoded by `bytes`.
    ///
    /// # Panics
    /// Panics if `bytes` is longer than [Self::BYTES].
    pub fn set_be_bytes(&mut self, bytes: &[u8]) {
        assert!(bytes.len() <= Self::BYTES, "at most {} bytes can be loaded", Self::BYTES);
        let mut padded = [0_u8; Self::BYTES];
        padded[Self::BYTES - bytes.len()..].copy_from_slice(bytes);
        self.0 = U256::from_be_slice(&padded);
    }

    /// Sets `self` to `value`.
    pub fn set_u64(&mut self, value: u64) {
        self.0 = U256::from_u64(value);
    }

    /// Returns a truthy [Choice] iff `self < other`, in constant time.
    pub fn ct_lt(&self, other: &Self) -> Choice {
        self.0.ct_lt(&other.0)
    }

    /// Sets `self` to `self * rhs mod 2^256`.
    pub fn mul_assign(&mut self, rhs: &Self) {
        self.0 = self.0.wrapping_mul(&rhs.0);
    }

    /// Sets `self` to `self >> bits`.
    pub fn shr_assign(&mut self, bits: usize) {
        self.0 = self.0.shr_vartime(bits);
    }

    /// Sets `self` to `minuend - self mod 2^256`.
    pub fn sub_from(&mut self, minuend: &Self) {
        self.0 = minuend.0.wrapping_sub(&self.0);
    }

    /// Returns the low 64 bits of `self`.
    pub fn low_u64(&self) -> u64 {
        let bytes = self.0.to_le_bytes();
        let mut low = [0_u8; 8];
        low.copy_from_slice(&bytes[..8]);
        u64::from_le_bytes(low)
    }
}

// TESTS
// ================================================================================================
