//! Bounds the cardinality of arrays/structs constructed from the stack.

use num_bigint::ToBigUint;

use super::LimitKind;
use crate::constants::MAX_ARRAY_SIZE;
use crate::interfaces::Interpreter;
use crate::opcode::{self, OpCode};
use crate::stack_item::StackItemView;

/// `PACK`, `NEWARRAY`, `NEWSTRUCT`: the top stack item must be an integer
/// giving the requested cardinality, and it must not exceed [`MAX_ARRAY_SIZE`].
pub fn check_array_size<I: Interpreter>(interp: &I, op: OpCode) -> Result<(), LimitKind> {
    if !matches!(op, opcode::PACK | opcode::NEWARRAY | opcode::NEWSTRUCT) {
        return Ok(());
    }

    let top = interp.evaluation_stack().peek(0).ok_or(LimitKind::ArraySize)?;
    let count = top.as_big_integer().ok_or(LimitKind::ArraySize)?;
    if count.to_biguint().map_or(true, |n| n > MAX_ARRAY_SIZE.into()) {
        return Err(LimitKind::ArraySize);
    }
    Ok(())
}
