//! Hamming SECDED code generation for the DRV register.
//!
//! Code bits sit at the power-of-two indices 1, 2, 4, 8, 16 and 32. Code bit
//! `i` is the XOR of every bit `j >= i` with `i & j != 0`; the position itself
//! starts from zero, so the result makes that subset XOR to zero. Index 0 then
//! takes the even parity of the whole register, which turns the
//! single-error-correcting code into a SECDED one.
//!
//! Values present at code-bit and parity positions on entry are ignored and
//! overwritten.
//!
//! # Example
//! ```
//! use gen_drv_core::hamming::encode;
//!
//! let drv = encode(&[0x80, 0, 0, 0, 0, 0, 0, 0]);
//! assert_eq!(drv, [0x80, 0x00, 0x00, 0x01, 0x00, 0x01, 0x01, 0x17]);
//! ```

use crate::bitvec::{BitVector, DRV_SIZE_BITS, DRV_SIZE_BYTES};

/// Index of the overall parity bit.
pub const PARITY_BIT: usize = 0;

/// Iterate over the code-bit positions: 1, 2, 4, ..., `DRV_SIZE_BITS / 2`.
pub fn code_bit_positions() -> impl Iterator<Item = usize> {
    std::iter::successors(Some(1usize), |&i| Some(i << 1)).take_while(|&i| i <= DRV_SIZE_BITS / 2)
}

/// Whether `index` holds a computed code bit.
pub fn is_code_bit(index: usize) -> bool {
    index != 0 && index.is_power_of_two() && index < DRV_SIZE_BITS
}

/// Whether `index` holds caller-supplied data.
pub fn is_data_bit(index: usize) -> bool {
    index != PARITY_BIT && index < DRV_SIZE_BITS && !is_code_bit(index)
}

/// XOR of every bit in the register.
///
/// Zero for any register produced by [`generate_code_bits`].
pub fn overall_parity(bits: &BitVector) -> bool {
    bits.as_slice().iter().fold(false, |acc, &b| acc ^ b)
}

/// XOR of the bits covered by code bit `i`, including bit `i` itself.
///
/// Zero for every code bit of an encoded register.
pub fn code_bit_syndrome(bits: &BitVector, i: usize) -> bool {
    (i..DRV_SIZE_BITS)
        .filter(|&j| i & j != 0)
        .fold(false, |acc, j| acc ^ bits[j])
}

/// Compute the code bits and overall parity in place.
pub fn generate_code_bits(bits: &mut BitVector) {
    tracing::debug!(register = %bits.to_bit_string(), "input register");

    for i in code_bit_positions() {
        // i & i != 0, so the position must start cleared.
        bits.set(i, false);
        let code = code_bit_syndrome(bits, i);
        bits.set(i, code);
        tracing::trace!(position = i, value = code, "code bit");
    }

    bits.set(PARITY_BIT, false);
    let parity = overall_parity(bits);
    bits.set(PARITY_BIT, parity);

    tracing::debug!(register = %bits.to_bit_string(), "hamming code");
}

/// Run a DRV byte buffer through the encoder and pack the result.
pub fn encode(input: &[u8; DRV_SIZE_BYTES]) -> [u8; DRV_SIZE_BYTES] {
    let mut bits = BitVector::from_bytes(input);
    generate_code_bits(&mut bits);
    bits.to_bytes()
}
