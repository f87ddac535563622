//! Fixture collaborators used by this crate's own tests.
//!
//! [`FixtureInterpreter`] is a deliberately small NeoVM-like interpreter: just
//! enough opcode semantics to drive the engine through the scenarios in its
//! test suite. It is not a faithful interpreter (cryptographic opcodes return
//! placeholder digests, `CALL`/`APPCALL`/`SYSCALL` do not actually transfer
//! control) — real opcode execution is the concern this harness is built to
//! stay out of.

use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::interfaces::{ContextView, ContractState, Interpreter, MachineState, ScriptHash, ScriptTable, StackView};
use crate::opcode::{self, OpCode};
use crate::properties::ContractProperties;
use crate::stack_item::{StackItem, StackItemView};
use crate::trace::StackEdit;

/// A plain `Vec`-backed stack.
#[derive(Debug, Clone, Default)]
pub struct VecStack(pub Vec<StackItem>);

impl VecStack {
    fn push(&mut self, item: StackItem) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<StackItem> {
        self.0.pop()
    }
}

impl StackView<StackItem> for VecStack {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn peek(&self, index: usize) -> Option<&StackItem> {
        let len = self.0.len();
        index.checked_add(1).and_then(|n| len.checked_sub(n)).map(|i| &self.0[i])
    }
}

/// A tiny interpreter over [`StackItem`], sufficient to exercise the engine's
/// metering, limit-checking, and dynamic-invoke logic end to end.
#[derive(Debug, Clone)]
pub struct FixtureInterpreter {
    script: Vec<u8>,
    script_hash: ScriptHash,
    ip: usize,
    eval: VecStack,
    alt: VecStack,
    invocation_depth: usize,
    state: MachineState,
    last_edits: Vec<StackEdit>,
}

impl FixtureInterpreter {
    /// Builds an interpreter with an empty script and the given executing
    /// contract's identity. Call [`Interpreter::load_script`] to supply the
    /// script to run.
    #[must_use]
    pub fn new(script_hash: ScriptHash) -> Self {
        Self {
            script: Vec::new(),
            script_hash,
            ip: 0,
            eval: VecStack::default(),
            alt: VecStack::default(),
            invocation_depth: 1,
            state: MachineState::empty(),
            last_edits: Vec::new(),
        }
    }

    /// Pre-seeds the evaluation stack, bottom to top. Useful for constructing
    /// a scenario that starts mid-computation rather than from pushes.
    pub fn seed_stack(&mut self, items: impl IntoIterator<Item = StackItem>) {
        self.eval.0.extend(items);
    }

    /// Sets the invocation depth directly, to exercise
    /// [`crate::limit::check_invocation_stack`] without actually nesting
    /// `invocation_depth` real calls.
    pub fn set_invocation_depth(&mut self, depth: usize) {
        self.invocation_depth = depth;
    }

    fn fault(&mut self) {
        self.state.insert(MachineState::FAULT);
    }

    fn halt(&mut self) {
        self.state.insert(MachineState::HALT);
    }

    fn binary_int_op(&mut self, f: impl FnOnce(BigInt, BigInt) -> Option<BigInt>) -> Result<(), String> {
        let b = self.pop_int()?;
        let a = self.pop_int()?;
        match f(a, b) {
            Some(result) => {
                self.push_eval(StackItem::Integer(result));
                Ok(())
            }
            None => Err("arithmetic fault".to_owned()),
        }
    }

    fn pop_int(&mut self) -> Result<BigInt, String> {
        self.eval.pop().and_then(|item| item.as_big_integer()).ok_or_else(|| "expected integer".to_owned())
    }

    fn digest_placeholder(len: usize) -> StackItem {
        StackItem::ByteString(vec![0u8; len])
    }

    /// Pushes `item` onto the evaluation stack and records the edit for the
    /// attached tracer, mirroring the teacher's inspector hooks around its
    /// own stack mutation points.
    fn push_eval(&mut self, item: StackItem) {
        self.eval.push(item);
        self.last_edits.push(StackEdit::Push);
    }
}

impl Interpreter for FixtureInterpreter {
    type Item = StackItem;

    fn current_context(&self) -> Option<ContextView<'_>> {
        if self.invocation_depth == 0 {
            return None;
        }
        Some(ContextView { script: &self.script, ip: self.ip, script_hash: &self.script_hash })
    }

    fn evaluation_stack(&self) -> &dyn StackView<Self::Item> {
        &self.eval
    }

    fn alt_stack(&self) -> &dyn StackView<Self::Item> {
        &self.alt
    }

    fn invocation_depth(&self) -> usize {
        self.invocation_depth
    }

    fn state(&self) -> MachineState {
        self.state
    }

    fn load_script(&mut self, script: Vec<u8>, _push_only: bool) {
        self.script = script;
        self.ip = 0;
        self.invocation_depth = 1;
        self.state = MachineState::empty();
        self.last_edits.clear();
    }

    fn set_param(&mut self, _opcode: OpCode, _operand: &[u8]) {}

    #[allow(clippy::too_many_lines)]
    fn step_into(&mut self) -> Result<(), String> {
        self.last_edits.clear();

        if self.ip >= self.script.len() {
            self.halt();
            return Ok(());
        }

        let op = self.script[self.ip];
        let mut advance = 1usize;

        match op {
            0x00 => self.push_eval(StackItem::from_i64(0)),
            0x01..=0x4B => {
                let len = op as usize;
                let Some(bytes) = self.script.get(self.ip + 1..self.ip + 1 + len) else {
                    self.fault();
                    return Ok(());
                };
                self.push_eval(StackItem::ByteString(bytes.to_vec()));
                advance += len;
            }
            opcode::PUSHDATA1 => {
                let Some(&len) = self.script.get(self.ip + 1) else {
                    self.fault();
                    return Ok(());
                };
                let len = len as usize;
                let Some(bytes) = self.script.get(self.ip + 2..self.ip + 2 + len) else {
                    self.fault();
                    return Ok(());
                };
                self.push_eval(StackItem::ByteString(bytes.to_vec()));
                advance += 1 + len;
            }
            opcode::PUSHDATA2 => {
                let Some(len_bytes) = self.script.get(self.ip + 1..self.ip + 3) else {
                    self.fault();
                    return Ok(());
                };
                let len = u16::from_le_bytes([len_bytes[0], len_bytes[1]]) as usize;
                let Some(bytes) = self.script.get(self.ip + 3..self.ip + 3 + len) else {
                    self.fault();
                    return Ok(());
                };
                self.push_eval(StackItem::ByteString(bytes.to_vec()));
                advance += 2 + len;
            }
            opcode::PUSHDATA4 => {
                let Some(len_bytes) = self.script.get(self.ip + 1..self.ip + 5) else {
                    self.fault();
                    return Ok(());
                };
                let len = u32::from_le_bytes(len_bytes.try_into().expect("len 4")) as usize;
                let Some(bytes) = self.script.get(self.ip + 5..self.ip + 5 + len) else {
                    self.fault();
                    return Ok(());
                };
                self.push_eval(StackItem::ByteString(bytes.to_vec()));
                advance += 4 + len;
            }
            0x4F => self.push_eval(StackItem::from_i64(-1)),
            0x51..=0x60 => self.push_eval(StackItem::from_i64(i64::from(op - 0x50))),
            opcode::NOP => {}
            opcode::DEPTH => self.push_eval(StackItem::from_i64(self.eval.len() as i64)),
            opcode::DUP => {
                let Some(top) = self.eval.peek(0).cloned() else {
                    self.fault();
                    return Ok(());
                };
                self.push_eval(top);
            }
            opcode::OVER => {
                let Some(item) = self.eval.peek(1).cloned() else {
                    self.fault();
                    return Ok(());
                };
                self.push_eval(item);
            }
            opcode::TUCK => {
                let Some(top) = self.eval.peek(0).cloned() else {
                    self.fault();
                    return Ok(());
                };
                let len = self.eval.len();
                if len < 2 {
                    self.fault();
                    return Ok(());
                }
                let index = len - 2;
                self.eval.0.insert(index, top);
                self.last_edits.push(StackEdit::Insert(index));
            }
            opcode::CAT => {
                let Some(b) = self.eval.pop() else {
                    self.fault();
                    return Ok(());
                };
                let Some(a) = self.eval.pop() else {
                    self.fault();
                    return Ok(());
                };
                let mut combined = a.as_byte_array();
                combined.extend(b.as_byte_array());
                self.push_eval(StackItem::ByteString(combined));
            }
            opcode::INC => self.binary_int_op_unary(|x| Some(x + 1))?,
            opcode::DEC => self.binary_int_op_unary(|x| Some(x - 1))?,
            opcode::ADD => self.binary_int_op(|a, b| Some(a + b))?,
            opcode::SUB => self.binary_int_op(|a, b| Some(a - b))?,
            opcode::MUL => self.binary_int_op(|a, b| Some(a * b))?,
            opcode::DIV => self.binary_int_op(|a, b| if b == BigInt::from(0) { None } else { Some(a / b) })?,
            opcode::MOD => self.binary_int_op(|a, b| if b == BigInt::from(0) { None } else { Some(a % b) })?,
            opcode::SHA1 => {
                self.eval.pop();
                self.push_eval(Self::digest_placeholder(20));
            }
            opcode::SHA256 => {
                self.eval.pop();
                self.push_eval(Self::digest_placeholder(32));
            }
            opcode::HASH160 => {
                self.eval.pop();
                self.push_eval(Self::digest_placeholder(20));
            }
            opcode::HASH256 => {
                self.eval.pop();
                self.push_eval(Self::digest_placeholder(32));
            }
            opcode::CHECKSIG => {
                self.eval.pop();
                self.eval.pop();
                self.push_eval(StackItem::Boolean(true));
            }
            opcode::CHECKMULTISIG => {
                let n = self.pop_count()?;
                for _ in 0..n {
                    self.eval.pop();
                }
                let m = self.pop_count()?;
                for _ in 0..m {
                    self.eval.pop();
                }
                self.push_eval(StackItem::Boolean(true));
            }
            opcode::PACK => {
                let n = self.pop_count()?;
                let mut items = Vec::with_capacity(n);
                for _ in 0..n {
                    items.push(self.eval.pop().ok_or_else(|| "stack underflow".to_owned())?);
                }
                items.reverse();
                self.push_eval(StackItem::Array(items));
            }
            opcode::UNPACK => {
                let Some(StackItem::Array(items) | StackItem::Struct(items)) = self.eval.pop() else {
                    self.fault();
                    return Ok(());
                };
                let len = items.len();
                for item in items {
                    self.push_eval(item);
                }
                self.push_eval(StackItem::from_i64(len as i64));
            }
            opcode::NEWARRAY => {
                let n = self.pop_count()?;
                self.push_eval(StackItem::Array(vec![StackItem::from_i64(0); n]));
            }
            opcode::NEWSTRUCT => {
                let n = self.pop_count()?;
                self.push_eval(StackItem::Struct(vec![StackItem::from_i64(0); n]));
            }
            opcode::APPCALL | opcode::TAILCALL => {
                advance += 20;
            }
            opcode::CALL => {
                advance += 2;
                self.invocation_depth += 1;
            }
            opcode::SYSCALL => {
                let Some(&len) = self.script.get(self.ip + 1) else {
                    self.fault();
                    return Ok(());
                };
                advance += 1 + len as usize;
            }
            _ => {}
        }

        self.ip += advance;
        Ok(())
    }

    fn step_edits(&self) -> &[StackEdit] {
        &self.last_edits
    }
}

impl FixtureInterpreter {
    fn binary_int_op_unary(&mut self, f: impl FnOnce(BigInt) -> Option<BigInt>) -> Result<(), String> {
        let x = self.pop_int()?;
        match f(x) {
            Some(result) => {
                self.push_eval(StackItem::Integer(result));
                Ok(())
            }
            None => Err("arithmetic fault".to_owned()),
        }
    }

    fn pop_count(&mut self) -> Result<usize, String> {
        let n = self.pop_int()?;
        n.to_usize().ok_or_else(|| "count out of range".to_owned())
    }
}

/// A fixed in-memory script table, for tests that need the dynamic-invoke
/// gate to resolve the currently executing contract's properties.
#[derive(Debug, Clone, Default)]
pub struct FixtureScriptTable {
    contracts: HashMap<ScriptHash, ContractProperties>,
}

impl FixtureScriptTable {
    /// Registers `properties` under `hash`.
    pub fn insert(&mut self, hash: ScriptHash, properties: ContractProperties) {
        self.contracts.insert(hash, properties);
    }
}

impl ScriptTable for FixtureScriptTable {
    fn get_contract_state(&self, script_hash: &ScriptHash) -> Option<ContractState> {
        self.contracts.get(script_hash).map(|&properties| ContractState { properties })
    }
}
