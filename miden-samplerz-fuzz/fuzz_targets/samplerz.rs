#![no_main]

use libfuzzer_sys::fuzz_target;
use miden_samplerz::{SIGMA_MAX, Sampler, rand::Shake256Rng};

const SIGMA_MIN: f64 = 1.2778336969128337;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (params, seed) = data.split_at(8);

    // the first eight bytes pick a center in [-2^15, 2^15) and a sigma in (SIGMA_MIN, SIGMA_MAX)
    let raw_mu = i32::from_le_bytes([params[0], params[1], params[2], params[3]]);
    let mu = f64::from(raw_mu) / 65536.0;
    let t = f64::from(u32::from_le_bytes([params[4], params[5], params[6], params[7]]))
        / f64::from(u32::MAX);
    let sigma = SIGMA_MIN + (SIGMA_MAX - SIGMA_MIN) * (0.001 + 0.998 * t);

    let mut rng = Shake256Rng::new(seed);
    let mut sampler = Sampler::new(&mut rng);
    let s = mu.floor() as i64;
    for _ in 0..4 {
        let z = sampler.samplerz(mu, sigma, SIGMA_MIN);
        assert!((s - 18..=s + 19).contains(&z), "sample {z} out of range for mu = {mu}");
    }
});
