//! The execution driver: the main loop tying gas metering, the limit
//! checker, and the dynamic-invoke gate around one interpreter step at a
//! time.

use crate::block::PersistingBlock;
use crate::dynamic_invoke;
use crate::error::FaultReason;
use crate::gas::{price_of, GasMeter};
use crate::interfaces::{Interpreter, MachineState, ScriptTable, SyscallDispatcher};
use crate::limit;
use crate::opcode::{self, OpCode};
use crate::trace::{NullTracer, Tracer};
use crate::trigger::TriggerType;

/// A metered, limit-checked wrapper around an opcode interpreter.
///
/// `Engine` owns the interpreter and meter for its lifetime; it is
/// single-use (construct, optionally `load_script`, `execute`, then drop).
/// There is no retry or partial-result API: a faulted engine's interpreter
/// state must be discarded by the caller, matching the "no resource
/// reclamation after failure" policy this harness follows.
pub struct Engine<I: Interpreter> {
    trigger: TriggerType,
    meter: GasMeter,
    persisting_block: PersistingBlock,
    script_table: Option<Box<dyn ScriptTable>>,
    dispatcher: Option<Box<dyn SyscallDispatcher>>,
    tracer: Option<Box<dyn Tracer>>,
    last_fault: Option<FaultReason>,
    interp: I,
}

impl<I: Interpreter> Engine<I> {
    /// Builds an engine. `caller_supplied_gas` and `gas_free` are both in
    /// meter units; the effective limit is their sum (see
    /// [`crate::constants::GAS_FREE`]).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trigger: TriggerType,
        persisting_block: PersistingBlock,
        interp: I,
        script_table: Option<Box<dyn ScriptTable>>,
        dispatcher: Option<Box<dyn SyscallDispatcher>>,
        gas_free: u64,
        caller_supplied_gas: u64,
        test_mode: bool,
    ) -> Self {
        Self {
            trigger,
            meter: GasMeter::new(gas_free, caller_supplied_gas, test_mode),
            persisting_block,
            script_table,
            dispatcher,
            tracer: None,
            last_fault: None,
            interp,
        }
    }

    /// The block this execution's worldview is evaluated under.
    #[must_use]
    pub fn persisting_block(&self) -> &PersistingBlock {
        &self.persisting_block
    }

    /// Why execution stopped, if it did not reach `HALT`. `None` both before
    /// `execute` has run and after a successful one.
    #[must_use]
    pub fn last_fault(&self) -> Option<&FaultReason> {
        self.last_fault.as_ref()
    }

    /// Why this engine is running.
    #[must_use]
    pub fn trigger(&self) -> TriggerType {
        self.trigger
    }

    /// Total gas spent so far, converted to the external fixed-point unit.
    #[must_use]
    pub fn gas_consumed(&self) -> u64 {
        self.meter.gas_consumed()
    }

    /// Total gas spent so far, in raw meter units (`= gas_consumed() * RATIO`
    /// when no truncation has occurred).
    #[must_use]
    pub fn gas_consumed_units(&self) -> u64 {
        self.meter.gas_consumed_units()
    }

    /// The configured limit, in raw meter units.
    #[must_use]
    pub fn gas_amount_units(&self) -> u64 {
        self.meter.gas_amount()
    }

    /// Attaches a step tracer and forwards the same request to the syscall
    /// dispatcher, if one is present, so its own operations are logged too.
    pub fn begin_debug(&mut self, tracer: Box<dyn Tracer>) {
        tracing::debug!("attaching step tracer");
        self.tracer = Some(tracer);
        if let Some(dispatcher) = self.dispatcher.as_mut() {
            dispatcher.begin_debug();
        }
    }

    /// Loads `script` as a new top-level invocation and records its hash
    /// with the tracer, if one is attached.
    pub fn load_script(&mut self, script: Vec<u8>, script_hash_hex: &str, push_only: bool) {
        tracing::trace!(script_hash = script_hash_hex, len = script.len(), push_only, "loading script");
        self.interp.load_script(script, push_only);
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.script_loaded(script_hash_hex);
        }
    }

    /// Runs to completion. Returns `true` iff the final machine state does
    /// not include `FAULT`.
    ///
    /// Every fault reason collapses to the same boolean outcome; callers
    /// needing the reason should attach a tracer, whose log carries it.
    pub fn execute(&mut self) -> bool {
        loop {
            let state = self.interp.state();
            if state.is_terminal() {
                if state.contains(MachineState::FAULT) {
                    self.last_fault.get_or_insert(FaultReason::ScriptFaulted);
                }
                self.finish(state);
                return !state.contains(MachineState::FAULT);
            }

            let op = self.next_opcode();
            if let Some(op) = op {
                if let Err(reason) = self.reject_step(op) {
                    tracing::debug!(opcode = op, %reason, "step rejected");
                    self.last_fault = Some(reason);
                    let state = self.interp.state();
                    self.finish(state);
                    return false;
                }
            }

            if let Err(message) = self.interp.step_into() {
                tracing::debug!(%message, "interpreter raised an exception");
                self.last_fault = Some(FaultReason::InterpreterException(message));
                self.finish(self.interp.state());
                return false;
            }

            if let Some(op) = op {
                let edits = self.interp.step_edits();
                if let Some(tracer) = self.tracer.as_mut() {
                    tracer.log_result(op, edits);
                }
            }
        }
    }

    fn finish(&mut self, state: MachineState) {
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.finish(state);
        }
    }

    fn next_opcode(&mut self) -> Option<OpCode> {
        let ctx = self.interp.current_context()?;
        let ip = ctx.ip;
        let op = ctx.next_opcode()?;

        if let Some(tracer) = self.tracer.as_mut() {
            tracer.next_op(ip, op);
        }

        Some(op)
    }

    /// Charges gas, then runs the limit battery and the dynamic-invoke gate.
    /// Gas is charged unconditionally, even on a path that goes on to reject
    /// the step — that is protocol behaviour, not an oversight.
    fn reject_step(&mut self, op: OpCode) -> Result<(), FaultReason> {
        let price = price_of(&self.interp, op);
        self.meter.charge(price)?;

        limit::check_all(&self.interp, op).map_err(FaultReason::LimitViolated)?;

        if matches!(op, opcode::APPCALL | opcode::TAILCALL) {
            if let Some(ctx) = self.interp.current_context() {
                let authorized = match dynamic_invoke::callee_hash(&ctx) {
                    Some(hash) if dynamic_invoke::is_dynamic(&hash) => self
                        .script_table
                        .as_deref()
                        .is_some_and(|table| dynamic_invoke::authorize_dynamic(table, &ctx)),
                    _ => true,
                };
                if !authorized {
                    return Err(FaultReason::DynamicInvokeNotAuthorized);
                }
            }
        }

        Ok(())
    }

    /// Forwards a parameterised opcode's immediate operand bytes to both the
    /// interpreter's own recording and the attached tracer.
    pub fn set_param(&mut self, opcode: OpCode, operand: &[u8]) {
        self.interp.set_param(opcode, operand);
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.set_param(opcode, operand);
        }
    }
}

impl<I: Interpreter> std::fmt::Debug for Engine<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("trigger", &self.trigger)
            .field("gas_consumed", &self.meter.gas_consumed_units())
            .field("gas_amount", &self.meter.gas_amount())
            .finish_non_exhaustive()
    }
}

/// Convenience alias for a tracer that discards every event — the default
/// when `begin_debug` has not been called.
pub type NoDebug = NullTracer;
