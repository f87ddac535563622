//! Contract capability flags.

use bitflags::bitflags;

bitflags! {
    /// A contract's declared capabilities, as stored by the script table.
    ///
    /// Parsed from the low 8 bits of a single byte (see `*.Contract.Create` /
    /// `*.Contract.Migrate` pricing in [`crate::gas::syscall_price`]), and
    /// additive: future flags extend the bit-set without disturbing existing
    /// ones.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct ContractProperties: u8 {
        /// The contract uses persistent storage.
        const HAS_STORAGE = 1 << 0;
        /// The contract may be the target of a dynamic (stack-resolved) `APPCALL`/`TAILCALL`.
        const HAS_DYNAMIC_INVOKE = 1 << 1;
    }
}

impl ContractProperties {
    /// Parses the low 8 bits of an integer (as produced by truncating a VM
    /// integer stack item) into a property bit-set.
    #[must_use]
    pub fn from_low_byte(value: i64) -> Self {
        Self::from_bits_truncate(value as u8)
    }
}
