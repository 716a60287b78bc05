//! DRV register reporting.
//!
//! The packed register is shown as 32-bit fields, most-significant field
//! first:
//!
//! ```text
//!  NAME    |     BITS     |    VALUE
//! _________|______________|____________
//! DRV 1    |  63- 32      |   11111111
//! DRV 0    |  31-  0      |   22222222
//! ```

use std::fmt;

use crate::bitvec::DRV_SIZE_BYTES;

/// Width of one reported field in bits.
pub const DRV_REG_BITS: usize = 32;

/// Number of reported fields.
pub const DRV_REG_NO: usize = DRV_SIZE_BYTES * 8 / DRV_REG_BITS;

const DRV_REG_BYTES: usize = DRV_REG_BITS / 8;

/// One 32-bit slice of the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrvField {
    index: usize,
    value: u32,
}

impl DrvField {
    /// Field number; field `n` covers bits `32n ..= 32n + 31`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display name, e.g. `DRV 0`.
    pub fn name(&self) -> String {
        format!("DRV {}", self.index)
    }

    /// Highest register bit covered.
    pub fn high_bit(&self) -> usize {
        DRV_REG_BITS * (self.index + 1) - 1
    }

    /// Lowest register bit covered.
    pub fn low_bit(&self) -> usize {
        DRV_REG_BITS * self.index
    }

    /// Field contents.
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// The register split into fields, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrvReport {
    /// Field 0 first
    fields: [DrvField; DRV_REG_NO],
}

impl DrvReport {
    /// Split a packed DRV buffer into its fields.
    ///
    /// Field `n` is read big-endian from bytes
    /// `DRV_SIZE_BYTES - 4(n+1) .. DRV_SIZE_BYTES - 4n`.
    pub fn from_bytes(bytes: &[u8; DRV_SIZE_BYTES]) -> Self {
        let fields = std::array::from_fn(|index| {
            let end = DRV_SIZE_BYTES - index * DRV_REG_BYTES;
            let mut word = [0u8; DRV_REG_BYTES];
            word.copy_from_slice(&bytes[end - DRV_REG_BYTES..end]);
            DrvField {
                index,
                value: u32::from_be_bytes(word),
            }
        });

        Self { fields }
    }

    /// Fields in index order (DRV 0 first).
    pub fn fields(&self) -> &[DrvField] {
        &self.fields
    }

    /// Look up a field by number.
    pub fn field(&self, index: usize) -> Option<&DrvField> {
        self.fields.get(index)
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for DrvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " NAME    |     BITS     |    VALUE")?;
        write!(f, "_________|______________|____________")?;

        for field in self.fields.iter().rev() {
            write!(
                f,
                "\n{:<9}| {:>3}-{:>3}      |   {:08x}",
                field.name(),
                field.high_bit(),
                field.low_bit(),
                field.value()
            )?;
        }

        Ok(())
    }
}
