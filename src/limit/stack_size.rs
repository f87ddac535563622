//! Bounds `|evaluation| + |alt|` against the combined stack-size ceiling.

use super::LimitKind;
use crate::constants::MAX_STACK_SIZE;
use crate::interfaces::Interpreter;
use crate::opcode::{self, OpCode};
use crate::stack_item::StackItemView;

/// Projects how many items `op` will add to the combined stack and rejects if
/// the projected total would exceed [`MAX_STACK_SIZE`].
///
/// Projection is deliberately conservative: opcodes not named here are
/// assumed to have net-zero or negative growth (pops outnumber pushes, or the
/// instruction doesn't touch the stack at all) and are never rejected by this
/// check.
pub fn check_stack_size<I: Interpreter>(interp: &I, op: OpCode) -> Result<(), LimitKind> {
    let growth = if opcode::is_push_constant(op) || opcode::grows_stack_by_one(op) {
        1
    } else if op == opcode::UNPACK {
        let top = interp.evaluation_stack().peek(0).ok_or(LimitKind::StackSize)?;
        top.as_array().ok_or(LimitKind::StackSize)?.len()
    } else {
        0
    };

    let current = interp.evaluation_stack().len() + interp.alt_stack().len();
    if current + growth > MAX_STACK_SIZE {
        return Err(LimitKind::StackSize);
    }
    Ok(())
}
