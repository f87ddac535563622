//! Prices the `SYSCALL` opcode by the ASCII API name that follows it.

use crate::constants::RATIO;
use crate::interfaces::Interpreter;
use crate::properties::ContractProperties;
use crate::stack_item::StackItemView;

/// Reads the 1-byte length + ASCII name trailing a `SYSCALL` opcode and
/// returns its price in meter units. Malformed trailing bytes (not enough
/// remaining script) price as `1`, matching every other unrecognised call.
pub fn syscall_price<I: Interpreter>(interp: &I) -> u64 {
    let Some(ctx) = interp.current_context() else { return 1 };
    let remaining = ctx.remaining();

    let Some(&len) = remaining.get(1) else { return 1 };
    let len = len as usize;
    let Some(name_bytes) = remaining.get(2..2 + len) else { return 1 };
    let Ok(name) = std::str::from_utf8(name_bytes) else { return 1 };

    let Some(bare) = strip_prefix(name) else { return 1 };

    match bare {
        "Runtime.CheckWitness" => 200,
        "Blockchain.GetHeader" => 100,
        "Blockchain.GetBlock" => 200,
        "Blockchain.GetTransaction" => 100,
        "Blockchain.GetAccount" => 100,
        "Blockchain.GetValidators" => 200,
        "Blockchain.GetAsset" => 100,
        "Blockchain.GetContract" => 100,
        "Transaction.GetReferences" | "Transaction.GetUnspentCoins" => 200,
        "Account.SetVotes" => 1000,
        "Validator.Register" => 1000 * 100_000_000 / RATIO,
        "Asset.Create" => 5000 * 100_000_000 / RATIO,
        "Asset.Renew" => asset_renew_price(interp),
        "Contract.Create" | "Contract.Migrate" => contract_create_price(interp),
        "Storage.Get" => 100,
        "Storage.Put" => storage_put_price(interp),
        "Storage.Delete" => 100,
        _ => 1,
    }
}

/// Strips either the legacy `AntShares.` or current `Neo.` prefix; both map
/// to the same priced name. Names carrying neither prefix have no table
/// entry and price as `1` via the caller's default arm, since `bare` would
/// otherwise be the full (unrecognised) name — pass it through unchanged so
/// the match's catch-all applies.
fn strip_prefix(name: &str) -> Option<&str> {
    name.strip_prefix("AntShares.").or_else(|| name.strip_prefix("Neo.")).or(Some(name))
}

fn asset_renew_price<I: Interpreter>(interp: &I) -> u64 {
    let n = interp
        .evaluation_stack()
        .peek(1)
        .and_then(StackItemView::as_big_integer)
        .and_then(|n| u8::try_from(n & num_bigint::BigInt::from(0xFF)).ok())
        .unwrap_or(0);
    u64::from(n) * 5000 * 100_000_000 / RATIO
}

fn contract_create_price<I: Interpreter>(interp: &I) -> u64 {
    let flags = interp
        .evaluation_stack()
        .peek(3)
        .and_then(StackItemView::as_big_integer)
        .and_then(|n| i64::try_from(n).ok())
        .map(ContractProperties::from_low_byte)
        .unwrap_or_default();

    let mut fee: u64 = 100;
    if flags.contains(ContractProperties::HAS_STORAGE) {
        fee += 400;
    }
    if flags.contains(ContractProperties::HAS_DYNAMIC_INVOKE) {
        fee += 500;
    }
    fee * 100_000_000 / RATIO
}

fn storage_put_price<I: Interpreter>(interp: &I) -> u64 {
    let stack = interp.evaluation_stack();
    let key_len = stack.peek(0).map(|item| item.as_byte_array().len()).unwrap_or(0);
    let value_len = stack.peek(1).map(|item| item.as_byte_array().len()).unwrap_or(0);
    let total = (key_len + value_len) as u64;
    ((total.saturating_sub(1)) / 1024 + 1) * 1000
}
