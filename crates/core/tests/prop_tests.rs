//! Property-based tests for the DRV encoder.
//!
//! These tests verify the Hamming invariants over randomized registers.

use gen_drv_core::bitvec::{BitVector, DRV_SIZE_BITS};
use gen_drv_core::hamming::{
    code_bit_positions, code_bit_syndrome, encode, generate_code_bits, is_data_bit,
    overall_parity,
};
use gen_drv_core::report::DrvReport;
use proptest::prelude::*;

proptest! {
    /// Unpacking and repacking without encoding reproduces the bytes.
    #[test]
    fn prop_bit_packing_round_trip(bytes in any::<[u8; 8]>()) {
        prop_assert_eq!(BitVector::from_bytes(&bytes).to_bytes(), bytes);
    }

    /// Register index k is bit k of the big-endian word.
    #[test]
    fn prop_index_matches_word_bit(bytes in any::<[u8; 8]>(), k in 0usize..DRV_SIZE_BITS) {
        let word = u64::from_be_bytes(bytes);
        prop_assert_eq!(BitVector::from_bytes(&bytes)[k], (word >> k) & 1 == 1);
    }

    /// After encoding the whole register has even parity.
    #[test]
    fn prop_even_parity(bytes in any::<[u8; 8]>()) {
        let bits = BitVector::from_bytes(&encode(&bytes));
        prop_assert!(!overall_parity(&bits));
        prop_assert_eq!(bits.count_ones() % 2, 0);
    }

    /// Every code bit zeroes the XOR of the bits it covers.
    #[test]
    fn prop_code_bit_relation(bytes in any::<[u8; 8]>()) {
        let bits = BitVector::from_bytes(&encode(&bytes));
        for i in code_bit_positions() {
            prop_assert!(!code_bit_syndrome(&bits, i), "code bit {} nonzero", i);
        }
    }

    /// Encoding an encoded register changes nothing.
    #[test]
    fn prop_idempotent(bytes in any::<[u8; 8]>()) {
        let once = encode(&bytes);
        prop_assert_eq!(encode(&once), once);
    }

    /// Data bits pass through untouched.
    #[test]
    fn prop_data_bits_preserved(bytes in any::<[u8; 8]>()) {
        let before = BitVector::from_bytes(&bytes);
        let mut after = before;
        generate_code_bits(&mut after);

        for k in (0..DRV_SIZE_BITS).filter(|&k| is_data_bit(k)) {
            prop_assert_eq!(before[k], after[k], "data bit {} changed", k);
        }
    }

    /// Output depends only on the data bits.
    #[test]
    fn prop_ignores_code_positions(bytes in any::<[u8; 8]>(), noise in any::<u8>()) {
        let mut dirty = BitVector::from_bytes(&bytes);
        for (n, i) in std::iter::once(0).chain(code_bit_positions()).enumerate() {
            if noise & (1 << n) != 0 {
                dirty.toggle(i);
            }
        }

        prop_assert_eq!(encode(&dirty.to_bytes()), encode(&bytes));
    }

    /// A single flipped bit always breaks overall parity.
    #[test]
    fn prop_single_flip_detected(bytes in any::<[u8; 8]>(), k in 0usize..DRV_SIZE_BITS) {
        let mut bits = BitVector::from_bytes(&encode(&bytes));
        bits.toggle(k);
        prop_assert!(overall_parity(&bits));
    }

    /// Report fields are the two halves of the encoded word.
    #[test]
    fn prop_report_fields(bytes in any::<[u8; 8]>()) {
        let drv = encode(&bytes);
        let word = u64::from_be_bytes(drv);
        let report = DrvReport::from_bytes(&drv);

        prop_assert_eq!(report.field(0).map(|f| f.value()), Some(word as u32));
        prop_assert_eq!(report.field(1).map(|f| f.value()), Some((word >> 32) as u32));
    }
}
