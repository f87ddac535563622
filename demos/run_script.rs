//! Demonstrates driving an `Engine` over the bundled fixture interpreter.
//!
//! Not wired into `Cargo.toml` as a `cargo run --example` target — this
//! workspace's `examples/` name is already taken by the read-only retrieval
//! pack this crate was built against, so worked usage samples live here
//! instead. Copy the body into a binary crate's `main.rs` to run it.
//!
//! Three scenarios, mirroring the ones this crate's own test suite asserts
//! against exactly:
//! 1. A plain script that halts successfully.
//! 2. A script that overflows the combined stack and faults.
//! 3. A dynamic `APPCALL` rejected because the calling contract never
//!    declared the dynamic-invoke capability.

use nvm_engine::properties::ContractProperties;
use nvm_engine::test_utils::{FixtureInterpreter, FixtureScriptTable};
use nvm_engine::trigger::TriggerType;
use nvm_engine::{constants, Engine, PersistingBlock};

const NOP: u8 = 0x61;
const PUSH1: u8 = 0x51;
const APPCALL: u8 = 0x67;

fn main() {
    println!("=== Plain script ===");
    run_plain_script();

    println!("\n=== Stack overflow ===");
    run_stack_overflow();

    println!("\n=== Unauthorized dynamic invoke ===");
    run_unauthorized_dynamic_invoke();
}

fn run_plain_script() {
    let hash = [0u8; 20];
    let interp = FixtureInterpreter::new(hash);
    let block = PersistingBlock::synthesize_next([0u8; 32], 0, 0, [0u8; 20]);
    let mut engine = Engine::new(
        TriggerType::Application,
        block,
        interp,
        None,
        None,
        constants::GAS_FREE,
        0,
        /* test_mode = */ false,
    );
    engine.load_script(vec![PUSH1, NOP], "demo-plain", false);

    let ok = engine.execute();
    println!("execute() = {ok}, gas_consumed = {}", engine.gas_consumed());
}

fn run_stack_overflow() {
    let hash = [0u8; 20];
    let interp = FixtureInterpreter::new(hash);
    let block = PersistingBlock::synthesize_next([0u8; 32], 0, 0, [0u8; 20]);
    let mut engine = Engine::new(TriggerType::Application, block, interp, None, None, constants::GAS_FREE, 0, false);

    let script = vec![PUSH1; constants::MAX_STACK_SIZE + 1];
    engine.load_script(script, "demo-overflow", false);

    let ok = engine.execute();
    println!("execute() = {ok} (expected false)");
    println!("last_fault = {:?}", engine.last_fault());
}

fn run_unauthorized_dynamic_invoke() {
    let hash = [0u8; 20];

    // The calling contract is registered but never declares HAS_DYNAMIC_INVOKE.
    let mut table = FixtureScriptTable::default();
    table.insert(hash, ContractProperties::empty());

    let interp = FixtureInterpreter::new(hash);
    let block = PersistingBlock::synthesize_next([0u8; 32], 0, 0, [0u8; 20]);
    let mut engine = Engine::new(
        TriggerType::Application,
        block,
        interp,
        Some(Box::new(table)),
        None,
        constants::GAS_FREE,
        0,
        false,
    );

    let mut script = vec![APPCALL];
    script.extend_from_slice(&[0u8; 20]); // all-zero callee hash = dynamic invoke
    engine.load_script(script, "demo-dynamic-invoke", false);

    let ok = engine.execute();
    println!("execute() = {ok} (expected false)");
    println!("last_fault = {:?}", engine.last_fault());
}
