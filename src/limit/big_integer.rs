//! Screens arithmetic opcodes against the big-integer magnitude ceiling.
//!
//! Every check here is pre-execution: the candidate result is computed once,
//! measured, and thrown away if it fits, so the interpreter sees a number it
//! has already been cleared to produce. A missing operand (a `null` stack
//! item, or one that doesn't decode as an integer at all) is never treated as
//! "zero and therefore fine" — it fails the check outright.

use num_bigint::BigInt;
use num_traits::Zero;

use super::LimitKind;
use crate::constants::MAX_BIGINT_BYTES;
use crate::interfaces::Interpreter;
use crate::opcode::{self, OpCode};
use crate::stack_item::StackItemView;

/// Byte length of `n`'s two's-complement encoding, under the same
/// zero-is-empty convention [`crate::stack_item`] uses.
fn byte_len(n: &BigInt) -> usize {
    if n.is_zero() {
        0
    } else {
        n.to_signed_bytes_le().len()
    }
}

fn fits(n: &BigInt) -> bool {
    byte_len(n) <= MAX_BIGINT_BYTES
}

/// `INC`, `DEC`, `ADD`, `SUB`, `MUL`, `DIV`, `MOD`: the operand(s) and, where
/// applicable, the candidate result must all fit within
/// [`MAX_BIGINT_BYTES`].
pub fn check_big_integers<I: Interpreter>(interp: &I, op: OpCode) -> Result<(), LimitKind> {
    if !opcode::is_big_integer_op(op) {
        return Ok(());
    }

    let stack = interp.evaluation_stack();

    match op {
        opcode::INC => {
            let x = operand(stack, 0)?;
            let candidate = &x + 1;
            ok(fits(&x) && fits(&candidate))
        }
        opcode::DEC => {
            let x = operand(stack, 0)?;
            if !fits(&x) {
                return Err(LimitKind::BigInteger);
            }
            if x.sign() != num_bigint::Sign::Plus {
                let candidate = &x - 1;
                ok(fits(&candidate))
            } else {
                Ok(())
            }
        }
        opcode::ADD => {
            let a = operand(stack, 0)?;
            let b = operand(stack, 1)?;
            let candidate = &a + &b;
            ok(fits(&a) && fits(&b) && fits(&candidate))
        }
        opcode::SUB => {
            let a = operand(stack, 0)?;
            let b = operand(stack, 1)?;
            let candidate = &a - &b;
            ok(fits(&a) && fits(&b) && fits(&candidate))
        }
        opcode::MUL => {
            let a = operand(stack, 0)?;
            let b = operand(stack, 1)?;
            ok(byte_len(&a) + byte_len(&b) <= MAX_BIGINT_BYTES)
        }
        opcode::DIV | opcode::MOD => {
            let a = operand(stack, 0)?;
            let b = operand(stack, 1)?;
            ok(fits(&a) && fits(&b))
        }
        _ => Ok(()),
    }
}

fn operand<T: StackItemView + ?Sized>(
    stack: &dyn crate::interfaces::StackView<T>,
    index: usize,
) -> Result<BigInt, LimitKind> {
    stack
        .peek(index)
        .and_then(StackItemView::as_big_integer)
        .ok_or(LimitKind::BigInteger)
}

fn ok(fits: bool) -> Result<(), LimitKind> {
    if fits {
        Ok(())
    } else {
        Err(LimitKind::BigInteger)
    }
}
