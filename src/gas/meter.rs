//! The running gas meter.

use crate::constants::RATIO;
use crate::error::FaultReason;

/// Tracks consumption against an immutable limit, in meter units.
///
/// `gas_consumed` only ever grows (via [`GasMeter::charge`]); there is no API
/// to decrement it, matching the monotone-meter invariant the engine
/// guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasMeter {
    gas_amount: u64,
    gas_consumed: u64,
    test_mode: bool,
}

impl GasMeter {
    /// Builds a meter with limit `gas_free + caller_supplied_gas`, both
    /// already expressed in meter units.
    #[must_use]
    pub fn new(gas_free: u64, caller_supplied_gas: u64, test_mode: bool) -> Self {
        Self {
            gas_amount: gas_free.saturating_add(caller_supplied_gas),
            gas_consumed: 0,
            test_mode,
        }
    }

    /// The configured limit, in meter units.
    #[must_use]
    pub fn gas_amount(&self) -> u64 {
        self.gas_amount
    }

    /// Total consumed so far, in meter units.
    #[must_use]
    pub fn gas_consumed_units(&self) -> u64 {
        self.gas_consumed
    }

    /// Total consumed so far, converted to the external fixed-point gas unit.
    #[must_use]
    pub fn gas_consumed(&self) -> u64 {
        self.gas_consumed / RATIO
    }

    /// Whether enforcement is disabled (metering still happens; exhaustion
    /// just never faults).
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    /// Charges `price` (in the table's un-multiplied domain) against the
    /// meter, applying `RATIO`. Charging happens unconditionally, even for a
    /// step later rejected by the limit checker — gas is spent before
    /// rejection, by design.
    ///
    /// Returns the fault that should end execution, if any: a meter overflow
    /// takes precedence over a plain exhaustion (an overflowing add can't
    /// also report a sensible `consumed` value).
    pub fn charge(&mut self, price: u64) -> Result<(), FaultReason> {
        let delta = price.checked_mul(RATIO).ok_or(FaultReason::MeterOverflow)?;
        let next = self.gas_consumed.checked_add(delta).ok_or(FaultReason::MeterOverflow)?;
        self.gas_consumed = next;

        if !self.test_mode && self.gas_consumed > self.gas_amount {
            return Err(FaultReason::GasExhausted {
                consumed: self.gas_consumed,
                amount: self.gas_amount,
            });
        }
        Ok(())
    }
}
