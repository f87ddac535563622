//! One-shot entry points: assemble an engine over a synthesized or supplied
//! block context and run a script to completion.

use crate::block::PersistingBlock;
use crate::constants::GAS_FREE;
use crate::engine::Engine;
use crate::interfaces::{Interpreter, ScriptTable, SyscallDispatcher};
use crate::trace::Tracer;
use crate::trigger::TriggerType;

/// Chain-tip facts needed to synthesize a default [`PersistingBlock`] when the
/// caller supplies none. A real host reads these from its own chain state;
/// this harness only needs the four fields [`PersistingBlock::synthesize_next`]
/// consumes.
#[derive(Debug, Clone, Copy)]
pub struct ChainTip {
    /// Hash of the current tip block.
    pub hash: [u8; 32],
    /// Timestamp of the current tip block.
    pub timestamp: u64,
    /// Height of the current tip block.
    pub index: u32,
    /// Script hash of the next consensus committee, copied forward unchanged.
    pub next_consensus: [u8; 20],
}

fn resolve_block(tip: ChainTip, persisting_block: Option<PersistingBlock>) -> PersistingBlock {
    persisting_block
        .unwrap_or_else(|| PersistingBlock::synthesize_next(tip.hash, tip.timestamp, tip.index, tip.next_consensus))
}

/// Builds an engine, loads `script`, and runs it to completion.
///
/// When `persisting_block` is `None`, a tip+1 block is synthesized from
/// `tip` per the bootstrap defaults: zero merkle root, `consensus_data = 0`,
/// empty witnesses, `trigger = Application`, zero caller-supplied gas, and
/// `test_mode = true`.
#[allow(clippy::too_many_arguments)]
pub fn run<I: Interpreter>(
    script: Vec<u8>,
    script_hash_hex: &str,
    interp: I,
    script_table: Option<Box<dyn ScriptTable>>,
    dispatcher: Option<Box<dyn SyscallDispatcher>>,
    tip: ChainTip,
    persisting_block: Option<PersistingBlock>,
) -> (Engine<I>, bool) {
    let block = resolve_block(tip, persisting_block);
    let mut engine = Engine::new(TriggerType::Application, block, interp, script_table, dispatcher, GAS_FREE, 0, true);
    engine.load_script(script, script_hash_hex, false);
    let ok = engine.execute();
    (engine, ok)
}

/// As [`run`], but attaches `tracer` before the script is loaded so the
/// `script_loaded` notification is captured too.
#[allow(clippy::too_many_arguments)]
pub fn run_with_debug<I: Interpreter>(
    script: Vec<u8>,
    script_hash_hex: &str,
    interp: I,
    script_table: Option<Box<dyn ScriptTable>>,
    dispatcher: Option<Box<dyn SyscallDispatcher>>,
    tracer: Box<dyn Tracer>,
    tip: ChainTip,
    persisting_block: Option<PersistingBlock>,
) -> (Engine<I>, bool) {
    let block = resolve_block(tip, persisting_block);
    let mut engine = Engine::new(TriggerType::Application, block, interp, script_table, dispatcher, GAS_FREE, 0, true);
    engine.begin_debug(tracer);
    engine.load_script(script, script_hash_hex, false);
    let ok = engine.execute();
    (engine, ok)
}
