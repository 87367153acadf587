#![no_main]

use libfuzzer_sys::fuzz_target;
use miden_samplerz::rand::{ReplayRng, TryRngCore};

fuzz_target!(|data: &[u8]| {
    // Reads of any size must either succeed in full or leave the position untouched
    let mut rng = ReplayRng::new(data);
    let mut buf = [0u8; 13];
    let mut size = 1;
    loop {
        let before = rng.position();
        match rng.try_fill_bytes(&mut buf[..size]) {
            Ok(()) => assert_eq!(rng.position(), before + size),
            Err(_) => {
                assert_eq!(rng.position(), before);
                break;
            },
        }
        size = size % buf.len() + 1;
    }
});
