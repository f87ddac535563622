//! Fault taxonomy for the execution harness.
//!
//! Every fault is terminal: the engine does not retry or partially recover.
//! [`FaultReason`] exists purely for diagnostics (surfaced to an attached
//! [`crate::trace::Tracer`] and to callers inspecting a faulted engine); the
//! externally observable outcome of [`crate::engine::Engine::execute`] is
//! always a plain boolean, matching the protocol's all-or-nothing semantics.

use crate::limit::LimitKind;

/// Why an execution stopped without reaching `HALT`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FaultReason {
    /// `gas_consumed` exceeded `gas_amount` in non-test mode.
    #[error("gas exhausted: consumed={consumed} > amount={amount}")]
    GasExhausted {
        /// Meter units consumed at the point of rejection.
        consumed: u64,
        /// The configured gas ceiling, in meter units.
        amount: u64,
    },

    /// One of the pre-execution limit predicates rejected the upcoming opcode.
    #[error("limit violated: {0}")]
    LimitViolated(#[from] LimitKind),

    /// The meter's internal accumulator would have overflowed its integer
    /// domain. Treated as a fault distinct from an ordinary gas ceiling.
    #[error("gas meter overflow")]
    MeterOverflow,

    /// A dynamic `APPCALL`/`TAILCALL` was attempted by a contract lacking the
    /// dynamic-invoke capability, or the callee could not be resolved.
    #[error("dynamic invoke not authorized")]
    DynamicInvokeNotAuthorized,

    /// The underlying interpreter step raised an exception-like failure.
    #[error("interpreter exception: {0}")]
    InterpreterException(String),

    /// The interpreter ran to completion but left the `FAULT` flag set.
    #[error("script terminated in fault state")]
    ScriptFaulted,
}
