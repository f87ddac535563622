//! Gate opcodes that introduce or enlarge byte-string items.

use super::LimitKind;
use crate::constants::MAX_ITEM_SIZE;
use crate::interfaces::Interpreter;
use crate::opcode::{self, OpCode};
use crate::stack_item::StackItemView;

/// `PUSHDATA4`: the four bytes following the opcode encode a little-endian
/// u32 length. `CAT`: the sum of the two top items' byte lengths must not
/// exceed the limit. Every other opcode passes unconditionally.
pub fn check_item_size<I: Interpreter>(interp: &I, op: OpCode) -> Result<(), LimitKind> {
    match op {
        opcode::PUSHDATA4 => check_pushdata4(interp),
        opcode::CAT => check_cat(interp),
        _ => Ok(()),
    }
}

fn check_pushdata4<I: Interpreter>(interp: &I) -> Result<(), LimitKind> {
    let Some(ctx) = interp.current_context() else { return Ok(()) };
    let remaining = ctx.remaining();
    // remaining[0] is the opcode itself; the length field follows it.
    let Some(len_bytes) = remaining.get(1..5) else { return Err(LimitKind::ItemSize) };
    let length = u32::from_le_bytes(len_bytes.try_into().expect("slice of len 4"));
    if length as usize > MAX_ITEM_SIZE {
        return Err(LimitKind::ItemSize);
    }
    Ok(())
}

fn check_cat<I: Interpreter>(interp: &I) -> Result<(), LimitKind> {
    let stack = interp.evaluation_stack();
    if stack.len() < 2 {
        return Err(LimitKind::ItemSize);
    }
    let a = stack.peek(0).expect("len checked above");
    let b = stack.peek(1).expect("len checked above");
    let combined = a.as_byte_array().len() + b.as_byte_array().len();
    if combined > MAX_ITEM_SIZE {
        return Err(LimitKind::ItemSize);
    }
    Ok(())
}
