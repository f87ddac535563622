//! External collaborator interfaces.
//!
//! The engine is a harness, not an interpreter: stack manipulation, control
//! flow, and cryptographic primitives live behind [`Interpreter`]; the host
//! blockchain service behind [`SyscallDispatcher`]; and the contract code
//! store behind [`ScriptTable`]. None of these traits are implemented in this
//! crate except by the fixtures under [`crate::test_utils`].

use auto_impl::auto_impl;
use bitflags::bitflags;

use crate::opcode::OpCode;
use crate::stack_item::StackItemView;
use crate::trace::StackEdit;

bitflags! {
    /// The interpreter's halt/fault/break flag-set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MachineState: u8 {
        /// Execution completed successfully; no further steps will run.
        const HALT = 1 << 0;
        /// Execution aborted abnormally; no further steps will run.
        const FAULT = 1 << 1;
        /// Execution is paused at a breakpoint (debugger-only; the driver
        /// treats this like an ordinary non-terminal state).
        const BREAK = 1 << 2;
    }
}

impl MachineState {
    /// Whether the interpreter has reached a terminal state (`HALT` or `FAULT`).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.intersects(Self::HALT | Self::FAULT)
    }
}

/// A read-only snapshot of the interpreter's current execution context, as
/// needed to price and screen the next instruction.
#[derive(Debug, Clone, Copy)]
pub struct ContextView<'a> {
    /// The full script being executed.
    pub script: &'a [u8],
    /// The instruction pointer, as a byte offset into `script`.
    pub ip: usize,
    /// The 20-byte hash identifying this script.
    pub script_hash: &'a [u8; 20],
}

impl ContextView<'_> {
    /// The bytes available starting at `ip` (the opcode itself and any
    /// operand bytes that follow it within this script).
    #[must_use]
    pub fn remaining(&self) -> &[u8] {
        if self.ip >= self.script.len() {
            &[]
        } else {
            &self.script[self.ip..]
        }
    }

    /// The opcode at `ip`, if `ip` is in bounds.
    #[must_use]
    pub fn next_opcode(&self) -> Option<OpCode> {
        self.script.get(self.ip).copied()
    }
}

/// A read-only view over one of the interpreter's stacks (evaluation, alt, or
/// invocation-depth-adjacent result stacks).
#[auto_impl(&, &mut)]
pub trait StackView<T: ?Sized> {
    /// Number of items currently on the stack.
    fn len(&self) -> usize;

    /// Peeks the item `index` slots from the top (`0` is the top item)
    /// without removing it.
    fn peek(&self, index: usize) -> Option<&T>;

    /// Whether the stack is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The opcode interpreter: stack manipulation, control flow, and
/// cryptographic primitives. Consumed, never implemented, by the engine
/// proper — it is the "hard part" this harness deliberately stays out of.
#[auto_impl(&mut, Box)]
pub trait Interpreter {
    /// The concrete stack item type this interpreter uses.
    type Item: StackItemView;

    /// The current execution context, or `None` if the invocation stack is
    /// empty (nothing left to execute).
    fn current_context(&self) -> Option<ContextView<'_>>;

    /// The evaluation stack of the current context.
    fn evaluation_stack(&self) -> &dyn StackView<Self::Item>;

    /// The alt stack of the current context.
    fn alt_stack(&self) -> &dyn StackView<Self::Item>;

    /// Current depth of the invocation (call) stack.
    fn invocation_depth(&self) -> usize;

    /// The interpreter's halt/fault/break flags.
    fn state(&self) -> MachineState;

    /// Loads a script as a new top-level invocation.
    fn load_script(&mut self, script: Vec<u8>, push_only: bool);

    /// Surfaces the immediate operand bytes of a parameterised opcode to an
    /// attached tracer. A no-op interpreter that never traces may ignore this.
    fn set_param(&mut self, opcode: OpCode, operand: &[u8]);

    /// Executes exactly one step (one opcode) of the current context.
    ///
    /// Returns `Err` if the interpreter raised an exception-like failure; the
    /// engine converts this into [`crate::error::FaultReason::InterpreterException`]
    /// rather than propagating a panic.
    fn step_into(&mut self) -> Result<(), String>;

    /// The stack edits produced by the most recently completed
    /// [`Interpreter::step_into`] call, in the order they occurred.
    ///
    /// The driver forwards these to an attached tracer immediately after
    /// each step (see [`crate::trace::Tracer::log_result`]); an interpreter
    /// with nothing to report — or one that is never traced — may return an
    /// empty slice unconditionally.
    fn step_edits(&self) -> &[StackEdit];
}

/// The host/interop service: blockchain queries and storage reads/writes,
/// invoked by the interpreter itself on the `SYSCALL` opcode. The engine only
/// participates by pricing the call (see [`crate::gas::syscall_price`]);
/// dispatch is entirely the service's responsibility.
#[auto_impl(&mut, Box)]
pub trait SyscallDispatcher {
    /// Attaches debug recording to this service's own operations, forwarded
    /// from [`crate::engine::Engine::begin_debug`]. Most services have
    /// nothing to log and can accept the default no-op.
    fn begin_debug(&mut self) {}
}

/// A 20-byte script hash, as derived from a script's bytes by the host.
pub type ScriptHash = [u8; 20];

/// A contract's on-chain state, as far as the engine needs to know about it.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ContractState {
    /// The contract's declared capability flags.
    pub properties: crate::properties::ContractProperties,
}

/// The contract code store, consulted by the dynamic-invoke gate to resolve
/// the *currently executing* contract's capabilities.
#[auto_impl(&, Box, std::rc::Rc, std::sync::Arc)]
pub trait ScriptTable {
    /// Looks up a contract's state by script hash.
    fn get_contract_state(&self, script_hash: &ScriptHash) -> Option<ContractState>;
}
