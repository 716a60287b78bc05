//! Bit-level view of the DRV register.
//!
//! `BitVector` expands the 8-byte DRV buffer into 64 individually addressable
//! bits and packs them back. Index `k` of the vector is bit `k` of the register
//! read as a big-endian 64-bit word:
//!
//! ```text
//! byte:    [   0   ][   1   ] ... [   7   ]
//! index:    63...56  55...48  ...  7 ... 0
//! ```
//!
//! Within each byte the MSB (mask `0x80`) lands on the highest index of the
//! byte's range.
//!
//! # Example
//! ```
//! use gen_drv_core::bitvec::BitVector;
//!
//! let bits = BitVector::from_bytes(&[0x80, 0, 0, 0, 0, 0, 0, 0x01]);
//! assert!(bits.get(63));
//! assert!(bits.get(0));
//! assert_eq!(bits.count_ones(), 2);
//! assert_eq!(bits.to_bytes(), [0x80, 0, 0, 0, 0, 0, 0, 0x01]);
//! ```

use std::fmt;
use std::ops::Index;

/// Width of the DRV register in bits.
pub const DRV_SIZE_BITS: usize = 64;

/// Width of the DRV register in bytes.
pub const DRV_SIZE_BYTES: usize = DRV_SIZE_BITS / 8;

/// The DRV register as a fixed array of bits.
///
/// # Invariants
/// - Always exactly `DRV_SIZE_BITS` entries
/// - Index 0 is the overall parity bit, powers of two are code bits
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: [bool; DRV_SIZE_BITS],
}

impl BitVector {
    /// Create an all-zero register.
    pub fn new() -> Self {
        Self {
            bits: [false; DRV_SIZE_BITS],
        }
    }

    /// Expand a DRV byte buffer into its bits.
    ///
    /// Byte `i` fills indices `[64 - 8i - 8, 64 - 8i - 1]`, scanning the byte
    /// from mask `0x80` downwards while the index walks down from the top of
    /// that range.
    pub fn from_bytes(bytes: &[u8; DRV_SIZE_BYTES]) -> Self {
        let mut vector = Self::new();

        for (i, &byte) in bytes.iter().enumerate() {
            let mut mask = 0x80u8;
            for j in 0..8 {
                vector.bits[DRV_SIZE_BITS - i * 8 - 1 - j] = byte & mask != 0;
                mask >>= 1;
            }
        }

        vector
    }

    /// Pack the bits back into a DRV byte buffer.
    ///
    /// Exact inverse of [`BitVector::from_bytes`].
    pub fn to_bytes(&self) -> [u8; DRV_SIZE_BYTES] {
        let mut bytes = [0u8; DRV_SIZE_BYTES];

        for (i, byte) in bytes.iter_mut().enumerate() {
            let top = (DRV_SIZE_BYTES - i) * 8;
            for j in 0..8 {
                *byte = (*byte << 1) | self.bits[top - (j + 1)] as u8;
            }
        }

        bytes
    }

    /// Read bit `index`.
    ///
    /// # Panics
    /// Panics if `index >= DRV_SIZE_BITS`.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Write bit `index`.
    ///
    /// # Panics
    /// Panics if `index >= DRV_SIZE_BITS`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits[index] = value;
    }

    /// Flip bit `index`.
    pub fn toggle(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// The bits as a slice, index 0 first.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Render the register as `0`/`1` characters, index 0 first.
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for BitVector {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

impl From<[u8; DRV_SIZE_BYTES]> for BitVector {
    fn from(bytes: [u8; DRV_SIZE_BYTES]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitVector").field(&self.to_bit_string()).finish()
    }
}
