//! The limit checker: a battery of pure predicates over the upcoming opcode
//! and the interpreter's current state.
//!
//! Every predicate answers "is executing this next instruction permitted?"
//! without mutating anything. The [`crate::engine::Engine`] driver runs the
//! whole battery, in the fixed order below, *before* delegating to the
//! interpreter — arithmetic overflow candidates like `ADD` are screened on
//! the hypothetical result so an oversized value is never materialised into
//! program state, not even transiently.

mod array_size;
mod big_integer;
mod invocation_stack;
mod item_size;
mod stack_size;

pub use array_size::check_array_size;
pub use big_integer::check_big_integers;
pub use invocation_stack::check_invocation_stack;
pub use item_size::check_item_size;
pub use stack_size::check_stack_size;

/// Which of the five limit predicates rejected an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LimitKind {
    /// A byte-string item would have exceeded [`crate::constants::MAX_ITEM_SIZE`].
    #[error("item size limit exceeded")]
    ItemSize,
    /// The combined evaluation/alt stack would have exceeded [`crate::constants::MAX_STACK_SIZE`].
    #[error("stack size limit exceeded")]
    StackSize,
    /// A constructed array/struct would have exceeded [`crate::constants::MAX_ARRAY_SIZE`].
    #[error("array size limit exceeded")]
    ArraySize,
    /// The invocation stack would have exceeded [`crate::constants::MAX_INVOCATION_STACK`].
    #[error("invocation stack limit exceeded")]
    InvocationStack,
    /// An operand or candidate result would have exceeded [`crate::constants::MAX_BIGINT_BYTES`].
    #[error("big integer limit exceeded")]
    BigInteger,
}

use crate::interfaces::Interpreter;
use crate::opcode::OpCode;

/// Runs the full limit battery against `op`, in protocol order, short-circuiting
/// on the first rejection.
pub fn check_all<I: Interpreter>(interp: &I, op: OpCode) -> Result<(), LimitKind> {
    check_item_size(interp, op)?;
    check_stack_size(interp, op)?;
    check_array_size(interp, op)?;
    check_invocation_stack(interp, op)?;
    check_big_integers(interp, op)?;
    Ok(())
}
