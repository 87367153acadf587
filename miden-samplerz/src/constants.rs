//! Tables and scalar constants used by the sampler.

use crate::bignum::BigNum;

// SCALARS
// ================================================================================================

/// Maximum standard deviation supported by the sampler. The base distribution is a half-Gaussian
/// of this standard deviation.
pub const SIGMA_MAX: f64 = 1.8205;

/// 1 / (2 * SIGMA_MAX^2).
pub(crate) const INV_2SIGMA_MAX_SQ: f64 = 0.15086504887537272;

/// ln(2).
pub(crate) const LN2: f64 = core::f64::consts::LN_2;

/// 1 / ln(2).
pub(crate) const INV_LN2: f64 = 1.0 / LN2;

/// 2^63 as a float, used for fixed-point conversions.
pub(crate) const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Precision of the RCDT entries, in bits.
pub(crate) const RCDT_PREC: usize = 72;

/// Number of random bytes consumed by one base sample.
pub(crate) const RCDT_PREC_BYTES: usize = RCDT_PREC >> 3;

// TABLES
// ================================================================================================

/// Reverse cumulative distribution table of a distribution very close to the half-Gaussian of
/// standard deviation [SIGMA_MAX]: `RCDT[i] = 2^72 * Pr[X >= i + 1]`.
pub(crate) const RCDT: [BigNum; 18] = [
    BigNum::from_u128(0xa3f7f42ed3ac391802),
    BigNum::from_u128(0x54d32b181f3f7ddb82),
    BigNum::from_u128(0x227dcdd0934829c1ff),
    BigNum::from_u128(0x0ad1754377c7994ae4),
    BigNum::from_u128(0x0295846caef33f1f6f),
    BigNum::from_u128(0x00774ac754ed74bd5f),
    BigNum::from_u128(0x001024dd542b776ae4),
    BigNum::from_u128(0x0001a1ffdc65ad63da),
    BigNum::from_u128(0x00001f80d88a7b6428),
    BigNum::from_u128(0x000001c3fdb2040c69),
    BigNum::from_u128(0x00000012cf24d031fb),
    BigNum::from_u128(0x00000000949f8b091f),
    BigNum::from_u128(0x0000000003665da998),
    BigNum::from_u128(0x00000000000ebf6ebb),
    BigNum::from_u128(0x0000000000002f5d7e),
    BigNum::from_u128(0x000000000000007098),
    BigNum::from_u128(0x0000000000000000c6),
    BigNum::from_u128(0x000000000000000001),
];

/// Coefficients, most significant first, of a polynomial approximating exp(-x) on [0, ln 2],
/// scaled by 2^63:
///
/// `exp(-x) ≈ 2^-63 * sum(C[12 - i] * x^i for i in 0..=12)`.
///
/// The polynomial is taken from FACCT: <https://doi.org/10.1109/TC.2019.2940949>
pub(crate) const C: [BigNum; 13] = [
    BigNum::from_u64(0x00000004741183a3),
    BigNum::from_u64(0x00000036548cfc06),
    BigNum::from_u64(0x0000024fdcbf140a),
    BigNum::from_u64(0x0000171d939de045),
    BigNum::from_u64(0x0000d00cf58f6f84),
    BigNum::from_u64(0x000680681cf796e3),
    BigNum::from_u64(0x002d82d8305b0fea),
    BigNum::from_u64(0x011111110e066fd0),
    BigNum::from_u64(0x0555555555070f00),
    BigNum::from_u64(0x155555555581ff00),
    BigNum::from_u64(0x400000000002b400),
    BigNum::from_u64(0x7fffffffffff4800),
    BigNum::from_u64(0x8000000000000000),
];
