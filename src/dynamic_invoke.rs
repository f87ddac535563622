//! The dynamic-invoke authorization gate for `APPCALL`/`TAILCALL`.
//!
//! A call-style opcode encodes its callee's script hash directly in the
//! script. A script hash of all zero bytes means "resolve the callee from
//! the stack at dispatch time" instead — a *dynamic* invoke. Static
//! (non-zero) targets are always permitted; dynamic ones require the
//! currently executing contract to have opted in.

use crate::interfaces::{ContextView, ScriptHash, ScriptTable};
use crate::properties::ContractProperties;

/// Whether `script_hash` (the 20 bytes immediately following an
/// `APPCALL`/`TAILCALL` opcode) denotes a dynamic callee.
#[must_use]
pub fn is_dynamic(script_hash: &ScriptHash) -> bool {
    script_hash.iter().all(|&b| b == 0)
}

/// Extracts the 20-byte callee script hash following the opcode at `ctx`'s
/// instruction pointer, if enough bytes remain.
#[must_use]
pub fn callee_hash(ctx: &ContextView<'_>) -> Option<ScriptHash> {
    let bytes = ctx.remaining().get(1..21)?;
    let mut hash = [0u8; 20];
    hash.copy_from_slice(bytes);
    Some(hash)
}

/// Authorizes a dynamic invoke by consulting `table` for the properties of
/// the contract currently executing (`ctx.script_hash`), permitting the call
/// only if it declares [`ContractProperties::HAS_DYNAMIC_INVOKE`].
///
/// Returns `false` if the currently executing contract cannot be resolved in
/// `table` at all — an unresolvable caller is treated as unauthorized rather
/// than permitted by default.
pub fn authorize_dynamic(table: &dyn ScriptTable, ctx: &ContextView<'_>) -> bool {
    table
        .get_contract_state(ctx.script_hash)
        .is_some_and(|state| state.properties.contains(ContractProperties::HAS_DYNAMIC_INVOKE))
}
