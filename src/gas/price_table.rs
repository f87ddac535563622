//! Maps an opcode to its price in (un-multiplied) meter units.
//!
//! The caller is responsible for the `· RATIO` step; prices returned here
//! live in the small-integer domain of the pricing policy table.

use crate::interfaces::Interpreter;
use crate::opcode::{self, OpCode};
use crate::stack_item::StackItemView;

use super::syscall_price::syscall_price;

/// The price, in meter units, of executing `op` with the interpreter's
/// current context as context (needed only for `CHECKMULTISIG`'s `n` operand
/// and `SYSCALL`'s trailing name bytes).
pub fn price_of<I: Interpreter>(interp: &I, op: OpCode) -> u64 {
    if opcode::is_push_constant(op) {
        return 0;
    }

    match op {
        opcode::NOP => 0,
        opcode::APPCALL | opcode::TAILCALL => 10,
        opcode::SYSCALL => syscall_price(interp),
        opcode::SHA1 | opcode::SHA256 => 10,
        opcode::HASH160 | opcode::HASH256 => 20,
        opcode::CHECKSIG => 100,
        opcode::CHECKMULTISIG => checkmultisig_price(interp),
        _ => 1,
    }
}

/// `100 · n` where `n` is the integer at stack top; `1` if absent or `n < 1`.
fn checkmultisig_price<I: Interpreter>(interp: &I) -> u64 {
    let Some(top) = interp.evaluation_stack().peek(0) else { return 1 };
    let Some(n) = top.as_big_integer() else { return 1 };
    match u64::try_from(n) {
        Ok(n) if n >= 1 => 100 * n,
        _ => 1,
    }
}
