//! The optional debug step-tracer.
//!
//! A tracer is a pure observer: every method takes `&self`/`&mut self` but
//! none of its return values feed back into execution. [`crate::engine::Engine`]
//! calls these hooks at fixed points in the driver loop; when no tracer is
//! attached the calls are elided entirely rather than dispatched to a no-op,
//! so debug mode costs nothing unless requested.

use auto_impl::auto_impl;

use crate::interfaces::MachineState;
use crate::opcode::OpCode;

/// How a step changed one of the interpreter's stacks, as surfaced to the
/// tracer. The tracer peeks the named slot itself; this record only says
/// *where* something changed, not what the new value is, keeping the
/// interpreter from having to clone items it would rather not copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEdit {
    /// A new item was pushed on top.
    Push,
    /// An item was inserted at the given depth, shifting items above it up.
    Insert(usize),
    /// The item at the given depth was replaced in place.
    Set(usize),
}

/// Receives step-level execution events. Default method bodies are no-ops,
/// so an implementor need only override the hooks it cares about.
#[auto_impl(&mut, Box)]
pub trait Tracer {
    /// Called once, when a script is loaded, with its 20-byte hash rendered
    /// as lowercase hex.
    fn script_loaded(&mut self, _script_hash_hex: &str) {}

    /// Surfaces the immediate operand bytes of a parameterised opcode,
    /// forwarded from [`crate::interfaces::Interpreter::set_param`].
    fn set_param(&mut self, _opcode: OpCode, _operand: &[u8]) {}

    /// Called immediately before a step is dispatched, with the instruction
    /// pointer and opcode about to execute.
    fn next_op(&mut self, _ip: usize, _opcode: OpCode) {}

    /// Called once a step has completed, with every stack edit it produced.
    fn log_result(&mut self, _opcode: OpCode, _edits: &[StackEdit]) {}

    /// Called once execution has reached a terminal state.
    fn finish(&mut self, _state: MachineState) {}
}

/// A tracer that discards every event. Used internally when debug mode has
/// not been requested; never needs to be constructed by a caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTracer;

impl Tracer for NullTracer {}
