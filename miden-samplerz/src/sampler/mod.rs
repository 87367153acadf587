//! Discrete Gaussian sampler over the integers.
//!
//! Samples follow the procedure `SamplerZ` of the Falcon specification
//! (<https://falcon-sign.info/falcon.pdf>): a base sample is drawn from a half-Gaussian of
//! standard deviation [SIGMA_MAX](crate::SIGMA_MAX) by table lookup, folded onto a random sign,
//! and accepted with probability proportional to the ratio between the target and the base
//! densities. The acceptance test evaluates `exp(-x)` with the fixed-point polynomial of FACCT
//! (<https://eprint.iacr.org/2018/1234>) and compares it lazily, byte by byte, against fresh
//! random bytes.
//!
//! Arithmetic on probabilities is done on integers so that a given random byte stream always
//! produces the same samples.

use rand_core::TryRngCore;
use subtle::ConditionallySelectable;

use crate::{
    bignum::BigNum,
    constants::{C, INV_2SIGMA_MAX_SQ, INV_LN2, LN2, RCDT, RCDT_PREC_BYTES, TWO_POW_63},
    rand::RandomBits,
};


// SAMPLER
// ================================================================================================

/// Discrete Gaussian sampler drawing its randomness from a borrowed source.
///
/// The sampler keeps its own scratch integers and byte buffers so that repeated calls to
/// [Sampler::samplerz] do not allocate. A sampler must not be shared between threads; concurrent
/// callers should each build their own over their own source.
pub struct Sampler<'a, R: TryRngCore + ?Sized> {
    rng: RandomBits<'a, R>,
    y: BigNum,
    z: BigNum,
    base_sampler_bytes: [u8; RCDT_PREC_BYTES],
    samplerz_byte: [u8; 1],
    ber_exp_byte: [u8; 1],
}

impl<'a, R: TryRngCore + ?Sized> Sampler<'a, R> {
    /// Returns a new [Sampler] drawing random bytes from `rng`.
    pub fn new(rng: &'a mut R) -> Self {
        Self {
            rng: RandomBits::new(rng),
            y: BigNum::ZERO,
            z: BigNum::ZERO,
            base_sampler_bytes: [0; RCDT_PREC_BYTES],
            samplerz_byte: [0],
            ber_exp_byte: [0],
        }
    }

    /// Samples an integer from the discrete Gaussian distribution `D_{Z, mu, sigma}`.
    ///
    /// `sigma_min` scales the acceptance probability; the inputs must satisfy
    /// `1 < sigma_min < sigma < SIGMA_MAX`, and `mu` must be finite with `|mu| < 2^62`. This is
    /// not checked, and the output is meaningless when the bounds are violated.
    ///
    /// Every returned value lies in `[floor(mu) - 18, floor(mu) + 19]`.
    ///
    /// # Panics
    /// Panics if the random source fails to supply bytes.
    pub fn samplerz(&mut self, mu: f64, sigma: f64, sigma_min: f64) -> i64 {
        let s = f64::floor(mu);
        let r = mu - s;
        let dss = 1.0 / (2.0 * sigma * sigma);
        let ccs = sigma_min / sigma;

        loop {
            let z0 = self.base_sampler();
            self.rng.read(&mut self.samplerz_byte);
            let b = i32::from(self.samplerz_byte[0] & 1);

            // b = 0 maps z0 to -z0, b = 1 maps it to z0 + 1
            let z = b + (2 * b - 1) * z0;

            // x = (z - r)^2 / (2 * sigma^2) - z0^2 / (2 * sigma_max^2)
            let z_minus_r = f64::from(z) - r;
            let x = z_minus_r * z_minus_r * dss - f64::from(z0 * z0) * INV_2SIGMA_MAX_SQ;

            if self.ber_exp(x, ccs) {
                return s as i64 + i64::from(z);
            }
        }
    }

    /// Samples an integer from {0, ..., 18} according to a distribution close to the
    /// half-Gaussian of standard deviation [SIGMA_MAX](crate::SIGMA_MAX).
    ///
    /// Consumes exactly 72 bits of randomness, read as a big-endian integer `u`, and returns the
    /// number of RCDT entries greater than `u`. The whole table is scanned with constant-time
    /// comparisons.
    fn base_sampler(&mut self) -> i32 {
        self.rng.read(&mut self.base_sampler_bytes);
        self.y.set_be_bytes(&self.base_sampler_bytes);

        let mut z0 = 0_u8;
        for entry in RCDT.iter() {
            z0 += u8::conditional_select(&0, &1, self.y.ct_lt(entry));
        }
        i32::from(z0)
    }

    /// Computes an integer approximation of `2^63 * ccs * exp(-x)` for `x` in [0, ln 2] and
    /// `ccs` in [0, 1].
    fn approx_exp(&mut self, x: f64, ccs: f64) -> u64 {
        self.y = C[0];
        // x is non-negative, so truncation is the floor
        self.z.set_u64((x * TWO_POW_63) as u64);
        for coefficient in C.iter().skip(1) {
            self.y.mul_assign(&self.z);
            self.y.shr_assign(63);
            self.y.sub_from(coefficient);
        }

        self.z.set_u64((ccs * TWO_POW_63) as u64);
        self.y.mul_assign(&self.z);
        self.y.shr_assign(63);
        self.y.low_u64()
    }

    /// Returns true with probability ≈ `ccs * exp(-x)`, for `x, ccs >= 0`.
    ///
    /// When `ccs * exp(-r)` rounds to zero in the fixed-point evaluation the test never accepts.
    fn ber_exp(&mut self, x: f64, ccs: f64) -> bool {
        let s = f64::floor(x * INV_LN2);
        let r = x - s * LN2;
        let s = (s as u64).min(63);

        // z ≈ 2^(64 - s) * ccs * exp(-r) = 2^64 * ccs * exp(-x); an approximation of 2^63 wraps
        // to 2^64 - 1, while zero must stay zero
        let approx = self.approx_exp(r, ccs);
        let z = match approx {
            0 => 0,
            _ => (approx << 1).wrapping_sub(1) >> s,
        };

        // compare a uniform 64-bit value against z, most significant byte first, drawing bytes
        // only until they differ
        let mut w = 0_i32;
        for offset in (0..=56).rev().step_by(8) {
            self.rng.read(&mut self.ber_exp_byte);
            w = i32::from(self.ber_exp_byte[0]) - ((z >> offset) & 0xff) as i32;
            if w != 0 {
                break;
            }
        }
        w < 0
    }
}

// CONVENIENCE
// ================================================================================================

/// Samples an integer from `D_{Z, mu, sigma}` using a temporary [Sampler] over `rng`.
///
/// See [Sampler::samplerz] for the requirements on the arguments.
pub fn sampler_z<R: TryRngCore + ?Sized>(
    mu: f64,
    sigma: f64,
    sigma_min: f64,
    rng: &mut R,
) -> i64 {
    Sampler::new(rng).samplerz(mu, sigma, sigma_min)
}
