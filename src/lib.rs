//! A metered, stack-based virtual machine execution harness for a
//! blockchain smart-contract runtime.
//!
//! ```text
//!                     ┌─────────────────────────┐
//!                     │         Engine           │
//!                     │  ┌─────────────────────┐ │
//!  script ───────────▶│  │  gas::GasMeter       │ │
//!                     │  └─────────────────────┘ │
//!                     │  ┌─────────────────────┐ │
//!      Interpreter ◀──┼──│  limit::check_all    │ │
//!      (external)    │  └─────────────────────┘ │
//!                     │  ┌─────────────────────┐ │
//!    ScriptTable ◀────┼──│  dynamic_invoke      │ │
//!      (external)    │  └─────────────────────┘ │
//!                     │  ┌─────────────────────┐ │
//!     Tracer ◀────────┼──│  (attached on demand)│ │
//!      (optional)    │  └─────────────────────┘ │
//!                     └─────────────────────────┘
//! ```
//!
//! The harness deliberately does not implement an opcode interpreter, a
//! syscall/host service, or a contract code store — those are consumed
//! through the [`Interpreter`], [`SyscallDispatcher`], and [`ScriptTable`]
//! traits respectively (see [`interfaces`]). What lives here is the part
//! that must be identical across every validator: gas accounting, the five
//! pre-execution limit predicates, and the dynamic-invoke authorization
//! gate, all driven by [`engine::Engine`].

#![forbid(unsafe_code)]

pub mod block;
pub mod bootstrap;
pub mod constants;
pub mod dynamic_invoke;
pub mod engine;
pub mod error;
pub mod gas;
pub mod interfaces;
pub mod limit;
pub mod opcode;
pub mod properties;
pub mod stack_item;
pub mod trace;
pub mod trigger;

pub mod test_utils;

pub use block::PersistingBlock;
pub use bootstrap::{run, run_with_debug, ChainTip};
pub use engine::Engine;
pub use error::FaultReason;
pub use gas::GasMeter;
pub use interfaces::{
    ContextView, ContractState, Interpreter, MachineState, ScriptHash, ScriptTable, StackView, SyscallDispatcher,
};
pub use limit::LimitKind;
pub use opcode::OpCode;
pub use properties::ContractProperties;
pub use stack_item::{InteropHandle, StackItem, StackItemView};
pub use trace::{StackEdit, Tracer};
pub use trigger::TriggerType;
