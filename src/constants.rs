//! Protocol-level constants for the execution harness.
//!
//! These values are consensus-critical: every validator must agree on them bit
//! for bit. They are grouped here the way the engine's other tunables are, but
//! unlike a spec ID's parameters these never vary across hard forks.

/// Maximum size, in two's-complement bytes, of any integer the VM is willing to
/// materialise on the evaluation stack.
pub const MAX_BIGINT_BYTES: usize = 32;

/// Maximum combined size of the evaluation stack and the alt stack.
pub const MAX_STACK_SIZE: usize = 2048;

/// Maximum size, in bytes, of any single byte-string item.
pub const MAX_ITEM_SIZE: usize = 1_048_576;

/// Maximum depth of the invocation (call) stack.
pub const MAX_INVOCATION_STACK: usize = 1024;

/// Maximum cardinality of an array or struct constructed via `PACK`, `NEWARRAY`,
/// or `NEWSTRUCT`.
pub const MAX_ARRAY_SIZE: usize = 1024;

/// Conversion factor between internal meter units and the external fixed-point
/// gas unit: `external_gas = meter_units / RATIO`.
///
/// Prices from the gas price table live in the un-multiplied domain; the engine
/// multiplies by `RATIO` once, at the point of accumulation, so that per-step
/// arithmetic never needs to divide.
pub const RATIO: u64 = 100_000;

/// The gas allowance granted to every execution regardless of what the caller
/// supplies, expressed directly in meter units (the same scale as
/// [`crate::gas::GasMeter::gas_consumed_units`], so it adds to
/// `caller_supplied_gas` without further conversion). Numerically this is
/// `10` GAS at the external fixed-point token's native 8-decimal scale.
pub const GAS_FREE: u64 = 10 * 100_000_000;

/// Spacing, in seconds, between two consecutive blocks. Used only to synthesize
/// a plausible persisting block when the caller supplies none.
pub const SECONDS_PER_BLOCK: u64 = 15;
