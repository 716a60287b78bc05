//! Random DRV input generation.
//!
//! When no hex string is given on the command line, the DRV is filled with
//! random hex digits. The generator is seeded, so any run can be repeated by
//! reusing its seed.
//!
//! This is not a source of key material: the seed defaults to wall-clock time.

use gen_drv_core::DRV_SIZE_BYTES;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a random DRV byte buffer.
///
/// Each byte is built from two independently drawn hex digits, high nibble
/// first.
pub fn generate_drv_input(seed: u64) -> [u8; DRV_SIZE_BYTES] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bytes = [0u8; DRV_SIZE_BYTES];

    for byte in bytes.iter_mut() {
        let high: u8 = rng.gen_range(0..16);
        let low: u8 = rng.gen_range(0..16);
        *byte = (high << 4) | low;
    }

    bytes
}

/// Seed derived from the current wall-clock time.
pub fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
