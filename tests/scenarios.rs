//! Concrete end-to-end scenarios, one per documented behavior this harness
//! must reproduce exactly.

mod common;

use num_bigint::BigInt;

use nvm_engine::properties::ContractProperties;
use nvm_engine::test_utils::{FixtureInterpreter, FixtureScriptTable};
use nvm_engine::trigger::TriggerType;
use nvm_engine::{constants, Engine};

const RATIO: u64 = constants::RATIO;

fn engine_with_gas(script: Vec<u8>, gas_free: u64, caller_gas: u64, test_mode: bool) -> Engine<FixtureInterpreter> {
    let hash = [0u8; 20];
    let interp = FixtureInterpreter::new(hash);
    let block = nvm_engine::PersistingBlock::synthesize_next([0u8; 32], 0, 0, [0u8; 20]);
    let mut engine = Engine::new(TriggerType::Application, block, interp, None, None, gas_free, caller_gas, test_mode);
    engine.load_script(script, "0000000000000000000000000000000000000000", false);
    engine
}

#[test]
fn s1_empty_script_halts_with_zero_gas() {
    let mut engine = engine_with_gas(Vec::new(), constants::GAS_FREE, 0, false);
    assert!(engine.execute());
    assert_eq!(engine.gas_consumed_units(), 0);
}

#[test]
fn s2_single_nop_is_free() {
    let mut engine = engine_with_gas(vec![common::NOP], constants::GAS_FREE, 0, false);
    assert!(engine.execute());
    assert_eq!(engine.gas_consumed_units(), 0);
}

#[test]
fn s3_stack_overflow_is_rejected() {
    let script = vec![common::PUSH1; 2049];
    let mut engine = engine_with_gas(script, constants::GAS_FREE, 0, false);
    assert!(!engine.execute());
    // every rejected push-constant still prices at 0.
    assert_eq!(engine.gas_consumed_units(), 0);
}

#[test]
fn s4_add_overflow_is_rejected_after_charging_its_price() {
    let max_32_byte_positive = (BigInt::from(1) << 255) - BigInt::from(1);
    let mut script = Vec::new();
    common::push_bigint(&mut script, &max_32_byte_positive);
    common::push_bigint(&mut script, &BigInt::from(1));
    script.push(common::ADD);

    let mut engine = engine_with_gas(script, constants::GAS_FREE, 0, false);
    assert!(!engine.execute());
    assert_eq!(engine.gas_consumed_units(), RATIO);
}

#[test]
fn s5_storage_put_prices_by_ceil_division() {
    let key = vec![0u8; 100];
    let value = vec![0u8; 2000];
    let mut script = Vec::new();
    common::push_data2(&mut script, &value);
    common::push_data1(&mut script, &key);
    common::push_syscall(&mut script, "Neo.Storage.Put");

    let mut engine = engine_with_gas(script, constants::GAS_FREE, 0, true);
    assert!(engine.execute());
    assert_eq!(engine.gas_consumed_units(), 3000 * RATIO);
}

#[test]
fn s6_dynamic_appcall_without_capability_is_rejected() {
    let mut script = Vec::new();
    common::push_appcall(&mut script, common::APPCALL, &[0u8; 20]);

    let table = FixtureScriptTable::default();
    let hash = [0u8; 20];
    let interp = FixtureInterpreter::new(hash);
    let block = nvm_engine::PersistingBlock::synthesize_next([0u8; 32], 0, 0, [0u8; 20]);
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
    engine.load_script(script, "0000000000000000000000000000000000000000", false);

    assert!(!engine.execute());
    assert_eq!(engine.gas_consumed_units(), 10 * RATIO);
}

#[test]
fn s6_dynamic_appcall_with_capability_is_authorized() {
    let mut script = Vec::new();
    common::push_appcall(&mut script, common::APPCALL, &[0u8; 20]);
    script.push(common::NOP);

    let mut table = FixtureScriptTable::default();
    let hash = [0u8; 20];
    table.insert(hash, ContractProperties::HAS_DYNAMIC_INVOKE);

    let interp = FixtureInterpreter::new(hash);
    let block = nvm_engine::PersistingBlock::synthesize_next([0u8; 32], 0, 0, [0u8; 20]);
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
    engine.load_script(script, "0000000000000000000000000000000000000000", false);

    assert!(engine.execute());
}

#[test]
fn s7_gas_exhaustion_stops_before_the_sixth_step() {
    let script = vec![common::DEPTH; 6];
    let mut engine = engine_with_gas(script, 0, 5 * RATIO, false);
    assert!(!engine.execute());
    assert_eq!(engine.gas_amount_units(), 5 * RATIO);
    assert_eq!(engine.gas_consumed_units(), 6 * RATIO);
}
