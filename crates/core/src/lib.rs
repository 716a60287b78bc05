//! gen-drv-core: Hamming SECDED code generation for 64-bit DRV registers
//!
//! A DRV is a 64-bit register whose data bits are protected by an embedded
//! Hamming code plus an overall parity bit. This library:
//! - Parses a DRV from its hex form
//! - Expands it into addressable bits and packs it back
//! - Overwrites the code-bit positions with freshly computed Hamming parity
//! - Renders the result as 32-bit fields
//!
//! # Architecture
//!
//! - `bitvec`: byte buffer <-> 64-bit register view
//! - `hamming`: code bit and overall parity generation
//! - `hex`: hex input validation and parsing
//! - `report`: field split and table rendering
//!
//! # Register Layout
//!
//! Index 0 is the overall parity bit, indices 1, 2, 4, 8, 16, 32 are code
//! bits, and the remaining 57 indices carry data. Index `k` is bit `k` of the
//! register read as a big-endian `u64`.

pub mod bitvec;
pub mod error;
pub mod hamming;
pub mod hex;
pub mod report;

// Re-export commonly used types
pub use bitvec::{BitVector, DRV_SIZE_BITS, DRV_SIZE_BYTES};
pub use error::{Error, HexError, Result};
pub use hamming::{encode, generate_code_bits};
pub use hex::parse_drv_hex;
pub use report::DrvReport;
