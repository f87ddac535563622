//! Property-based tests for the invariants this harness must uphold
//! regardless of the specific script being executed.

mod common;

use num_bigint::BigInt;
use proptest::prelude::*;

use nvm_engine::gas::GasMeter;
use nvm_engine::properties::ContractProperties;
use nvm_engine::test_utils::{FixtureInterpreter, FixtureScriptTable};
use nvm_engine::trigger::TriggerType;
use nvm_engine::{constants, Engine, Interpreter};

fn fresh_engine(script: Vec<u8>, gas_free: u64, caller_gas: u64, test_mode: bool) -> Engine<FixtureInterpreter> {
    let hash = [0u8; 20];
    let interp = FixtureInterpreter::new(hash);
    let block = nvm_engine::PersistingBlock::synthesize_next([0u8; 32], 0, 0, hash);
    let mut engine = Engine::new(TriggerType::Application, block, interp, None, None, gas_free, caller_gas, test_mode);
    engine.load_script(script, "0000000000000000000000000000000000000000", false);
    engine
}

proptest! {
    /// Property 1: monotone meter. However many charges are applied, in
    /// whatever order, the running total never decreases and an overflowing
    /// charge is rejected rather than wrapping.
    #[test]
    fn monotone_meter(prices in prop::collection::vec(0u64..10_000, 0..64)) {
        let mut meter = GasMeter::new(u64::MAX / 2, 0, true);
        let mut last = meter.gas_consumed_units();
        for price in prices {
            if meter.charge(price).is_err() {
                break;
            }
            let next = meter.gas_consumed_units();
            prop_assert!(next >= last);
            last = next;
        }
    }

    /// Property 2: bounded meter in non-test mode. If a run of `DEPTH`
    /// instructions (price 1 each) completes successfully, its total cost
    /// never exceeds the configured limit.
    #[test]
    fn bounded_meter_nontest_mode(n in 0usize..64, caller_gas in 0u64..20) {
        let script = vec![common::DEPTH; n];
        let mut engine = fresh_engine(script, 0, caller_gas * constants::RATIO, false);
        let ok = engine.execute();
        if ok {
            prop_assert!(engine.gas_consumed_units() <= engine.gas_amount_units());
        }
    }

    /// Property 4: `ADD` rejects whenever the candidate result needs more
    /// than `MAX_BIGINT_BYTES` bytes, even though both operands individually
    /// fit.
    #[test]
    fn add_overflow_is_always_screened(extra in 1u64..1000) {
        let max_32_byte_positive = (BigInt::from(1) << 255) - BigInt::from(1);
        let delta = BigInt::from(extra);

        let mut script = Vec::new();
        common::push_bigint(&mut script, &max_32_byte_positive);
        common::push_bigint(&mut script, &delta);
        script.push(common::ADD);

        let mut engine = fresh_engine(script, constants::GAS_FREE, 0, false);
        prop_assert!(!engine.execute());
    }

    /// Property 5: dynamic-invoke authorization tracks the capability flag
    /// exactly — present, it passes; absent, it doesn't.
    #[test]
    fn dynamic_invoke_tracks_capability(has_capability in any::<bool>()) {
        let hash = [7u8; 20];
        let mut script = Vec::new();
        common::push_appcall(&mut script, common::APPCALL, &[0u8; 20]);

        let mut table = FixtureScriptTable::default();
        if has_capability {
            table.insert(hash, ContractProperties::HAS_DYNAMIC_INVOKE);
        } else {
            table.insert(hash, ContractProperties::empty());
        }

        let interp = FixtureInterpreter::new(hash);
        let block = nvm_engine::PersistingBlock::synthesize_next([0u8; 32], 0, 0, hash);
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

        prop_assert_eq!(engine.execute(), has_capability);
    }

    /// Property 6: tracer transparency. Attaching a recording tracer changes
    /// nothing observable about the outcome or the gas total.
    #[test]
    fn tracer_does_not_change_outcome(n in 0usize..48) {
        let script = vec![common::DEPTH; n];

        let mut plain = fresh_engine(script.clone(), constants::GAS_FREE, 0, false);
        let plain_ok = plain.execute();

        let mut traced = fresh_engine(script, constants::GAS_FREE, 0, false);
        traced.begin_debug(Box::new(RecordingTracer::default()));
        let traced_ok = traced.execute();

        prop_assert_eq!(plain_ok, traced_ok);
        prop_assert_eq!(plain.gas_consumed_units(), traced.gas_consumed_units());
    }
}

#[derive(Debug, Default)]
struct RecordingTracer {
    steps: Vec<(usize, u8)>,
}

impl nvm_engine::Tracer for RecordingTracer {
    fn next_op(&mut self, ip: usize, opcode: u8) {
        self.steps.push((ip, opcode));
    }
}

#[test]
fn price_of_is_pure() {
    use nvm_engine::gas::price_of;

    let hash = [0u8; 20];
    let mut interp_a = FixtureInterpreter::new(hash);
    let mut interp_b = FixtureInterpreter::new(hash);
    let script = vec![common::DEPTH];
    interp_a.load_script(script.clone(), false);
    interp_b.load_script(script, false);

    assert_eq!(price_of(&interp_a, common::DEPTH), price_of(&interp_b, common::DEPTH));
}
