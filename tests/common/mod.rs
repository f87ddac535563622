//! Script-building helpers shared across the integration test suites.

use num_bigint::BigInt;
use num_traits::Zero;

pub const PUSH1: u8 = 0x51;
pub const SYSCALL: u8 = 0x68;
pub const ADD: u8 = 0x93;
pub const APPCALL: u8 = 0x67;
pub const NOP: u8 = 0x61;
pub const DEPTH: u8 = 0x74;

/// Appends the bytes to push `n` as a small constant (`PUSH0`..`PUSH16`).
pub fn push_small(script: &mut Vec<u8>, n: u8) {
    assert!(n <= 16);
    script.push(if n == 0 { 0x00 } else { 0x50 + n });
}

/// Appends a `PUSHDATA1` instruction carrying `bytes` (at most 255 long).
pub fn push_data1(script: &mut Vec<u8>, bytes: &[u8]) {
    assert!(bytes.len() <= u8::MAX as usize);
    script.push(0x4C);
    script.push(bytes.len() as u8);
    script.extend_from_slice(bytes);
}

/// Appends a `PUSHDATA2` instruction carrying `bytes` (at most 65535 long).
pub fn push_data2(script: &mut Vec<u8>, bytes: &[u8]) {
    assert!(bytes.len() <= u16::MAX as usize);
    script.push(0x4D);
    script.extend_from_slice(&(bytes.len() as u16).to_le_bytes());
    script.extend_from_slice(bytes);
}

/// Appends a push of `n` as a two's-complement-encoded integer, using the
/// zero-is-empty-bytes convention this crate standardizes on.
pub fn push_bigint(script: &mut Vec<u8>, n: &BigInt) {
    let bytes = if n.is_zero() { Vec::new() } else { n.to_signed_bytes_le() };
    push_data1(script, &bytes);
}

/// Appends a `SYSCALL` instruction naming `api`.
pub fn push_syscall(script: &mut Vec<u8>, api: &str) {
    assert!(api.len() <= u8::MAX as usize);
    script.push(SYSCALL);
    script.push(api.len() as u8);
    script.extend_from_slice(api.as_bytes());
}

/// Appends an `APPCALL` (or `TAILCALL`) instruction targeting `script_hash`.
pub fn push_appcall(script: &mut Vec<u8>, opcode: u8, script_hash: &[u8; 20]) {
    script.push(opcode);
    script.extend_from_slice(script_hash);
}
