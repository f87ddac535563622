//! Bounds the depth of the invocation (call) stack.

use super::LimitKind;
use crate::constants::MAX_INVOCATION_STACK;
use crate::interfaces::Interpreter;
use crate::opcode::{self, OpCode};

/// `CALL`, `APPCALL`: reject if the invocation stack is already at capacity.
pub fn check_invocation_stack<I: Interpreter>(interp: &I, op: OpCode) -> Result<(), LimitKind> {
    if !matches!(op, opcode::CALL | opcode::APPCALL) {
        return Ok(());
    }
    if interp.invocation_depth() >= MAX_INVOCATION_STACK {
        return Err(LimitKind::InvocationStack);
    }
    Ok(())
}
