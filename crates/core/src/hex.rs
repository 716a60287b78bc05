//! Hex input parsing.
//!
//! A DRV is supplied as exactly `2 * DRV_SIZE_BYTES` hex digits, two per byte,
//! first pair first. Both cases are accepted. The whole string is validated
//! before any byte is produced.

use crate::bitvec::DRV_SIZE_BYTES;
use crate::error::{HexError, Result};

/// Number of hex digits in a DRV string.
pub const DRV_HEX_DIGITS: usize = 2 * DRV_SIZE_BYTES;

/// Parse a DRV hex string into its byte buffer.
///
/// # Errors
/// - `HexError::InvalidLength` if the string is not `DRV_HEX_DIGITS` long
/// - `HexError::InvalidCharacter` for the first character outside `[0-9A-Fa-f]`
pub fn parse_drv_hex(input: &str) -> Result<[u8; DRV_SIZE_BYTES]> {
    let actual = input.chars().count();
    if actual != DRV_HEX_DIGITS {
        return Err(HexError::InvalidLength {
            expected: DRV_HEX_DIGITS,
            actual,
        }
        .into());
    }

    let mut nibbles = [0u8; DRV_HEX_DIGITS];
    for (position, (slot, character)) in nibbles.iter_mut().zip(input.chars()).enumerate() {
        *slot = decode_nibble(character)
            .ok_or(HexError::InvalidCharacter { character, position })?;
    }

    let mut bytes = [0u8; DRV_SIZE_BYTES];
    for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
        *byte = (pair[0] << 4) | pair[1];
    }

    Ok(bytes)
}

/// Format a DRV byte buffer as lowercase hex.
pub fn format_drv_hex(bytes: &[u8; DRV_SIZE_BYTES]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn decode_nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' | 'a'..='f' | 'A'..='F' => c.to_digit(16).map(|d| d as u8),
        _ => None,
    }
}
