// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{
    DistributedEngine, EngineError, ExecutionEngine, StabilizerEngine, StateVectorEngine,
};
use crate::{Circuit, Error, ErrorKind, Histogram, circuits};
use expect_test::expect;
use qsample_simulators::{
    PauliNoise, Simulator, Unitary, cpu_full_state_simulator::FullStateSimulator,
};

const SEED: u64 = 1234;

fn assert_all_bits_equal(histogram: &Histogram) {
    for (bits, _) in histogram.iter() {
        assert!(
            bits.chars().all(|c| c == '0') || bits.chars().all(|c| c == '1'),
            "unexpected GHZ outcome {bits}"
        );
    }
}

#[test]
fn empty_circuit_measures_ground_state() {
    let circuit = Circuit::new(1);
    for engine in [
        &StateVectorEngine::default() as &dyn ExecutionEngine,
        &StabilizerEngine::default(),
    ] {
        let histogram = engine.run(&circuit, 1).expect("run should succeed");
        expect!["{ 0:1 }"].assert_eq(&histogram.to_string());
    }
}

#[test]
fn basic_gates_splits_between_01_and_10() {
    let engine = StateVectorEngine::default().with_seed(SEED);
    let histogram = engine
        .run(&circuits::basic_gates(), 100)
        .expect("run should succeed");
    assert_eq!(100, histogram.shots());
    assert_eq!(100, histogram.count("01") + histogram.count("10"));
    assert!(histogram.count("01") > 0);
    assert!(histogram.count("10") > 0);
}

#[test]
fn basic_gates_agrees_across_engines() {
    let engine = StabilizerEngine::default().with_seed(SEED);
    let histogram = engine
        .run(&circuits::basic_gates(), 100)
        .expect("run should succeed");
    assert_eq!(100, histogram.count("01") + histogram.count("10"));
}

#[test]
fn ghz_on_state_vector_engine() {
    let engine = StateVectorEngine::default().with_seed(SEED);
    let histogram = engine
        .run(&circuits::ghz(10), 200)
        .expect("run should succeed");
    assert_eq!(200, histogram.shots());
    assert_eq!(2, histogram.len());
    assert_all_bits_equal(&histogram);
}

#[test]
fn ghz_on_stabilizer_engine_scales_past_state_vector_limit() {
    let engine = StabilizerEngine::default().with_seed(SEED);
    let histogram = engine
        .run(&circuits::ghz(100), 50)
        .expect("run should succeed");
    assert_eq!(50, histogram.shots());
    assert_all_bits_equal(&histogram);
    for (bits, _) in histogram.iter() {
        assert_eq!(100, bits.len());
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let circuit = circuits::ghz(4);
    let first = StateVectorEngine::default()
        .with_seed(7)
        .run(&circuit, 64)
        .expect("run should succeed");
    let second = StateVectorEngine::default()
        .with_seed(7)
        .run(&circuit, 64)
        .expect("run should succeed");
    assert_eq!(first, second);
}

#[test]
fn partial_measurement_follows_requested_order() {
    let mut circuit = Circuit::new(3);
    circuit.x(2).measure([2, 0]);
    let histogram = StateVectorEngine::default()
        .run(&circuit, 10)
        .expect("run should succeed");
    expect!["{ 10:10 }"].assert_eq(&histogram.to_string());
}

#[test]
fn rotations_run_on_state_vector_engine() {
    let mut circuit = Circuit::new(1);
    circuit.rx(std::f64::consts::PI, 0);
    let histogram = StateVectorEngine::default()
        .run(&circuit, 20)
        .expect("run should succeed");
    assert_eq!(20, histogram.count("1"));
}

#[test]
fn certain_bit_flip_noise_cancels_x() {
    let mut circuit = Circuit::new(1);
    circuit.x(0);
    let noise = PauliNoise::bit_flip(1.0).expect("noise should be valid");
    for engine in [
        &StateVectorEngine::default().with_noise(noise) as &dyn ExecutionEngine,
        &StabilizerEngine::default().with_noise(noise),
    ] {
        let histogram = engine.run(&circuit, 10).expect("run should succeed");
        assert_eq!(10, histogram.count("0"), "{} engine", engine.name());
    }
}

#[test]
fn stabilizer_engine_rejects_t_gate() {
    let mut circuit = Circuit::new(1);
    circuit.h(0).t(0);
    let err = StabilizerEngine::default()
        .run(&circuit, 10)
        .expect_err("run should fail");
    assert_eq!(
        EngineError::Simulator(qsample_simulators::Error::UnsupportedGate {
            simulator: "stabilizer",
            gate: "t".to_string(),
        }),
        err
    );
}

#[test]
fn stabilizer_engine_rejects_controlled_rotation() {
    let mut circuit = Circuit::new(2);
    circuit.controlled(Unitary::Rz(0.1), 0, 1);
    let err = StabilizerEngine::default()
        .run(&circuit, 1)
        .expect_err("run should fail");
    expect!["the stabilizer simulator does not support the crz(0.1) gate"]
        .assert_eq(&err.to_string());
}

#[test]
fn register_above_limit_is_rejected() {
    let err = StateVectorEngine::with_max_qubits(4)
        .run(&circuits::ghz(5), 1)
        .expect_err("run should fail");
    assert_eq!(
        EngineError::TooManyQubits {
            engine: "full-state",
            max: 4,
            requested: 5,
        },
        err
    );
}

#[test]
fn state_vector_limit_is_capped_by_simulator() {
    let engine = StateVectorEngine::with_max_qubits(100);
    assert_eq!(FullStateSimulator::MAX_QUBITS, engine.max_qubits());
    let err = engine
        .run(&Circuit::new(64), 1)
        .expect_err("run should fail");
    assert_eq!(
        EngineError::TooManyQubits {
            engine: "full-state",
            max: FullStateSimulator::MAX_QUBITS,
            requested: 64,
        },
        err
    );
}

fn out_of_range_circuit() -> Circuit {
    let mut circuit = Circuit::new(1);
    circuit.h(3);
    circuit
}

fn assert_out_of_range(err: EngineError) {
    assert_eq!(
        EngineError::InvalidCircuit(Box::new(Error::GateOutOfRange {
            gate: 0,
            qubit: 3,
            num_qubits: 1,
        })),
        err
    );
    assert_eq!(ErrorKind::OutOfRange, Error::from(err).kind());
}

#[test]
fn state_vector_run_rejects_gate_past_register() {
    let err = StateVectorEngine::default()
        .run(&out_of_range_circuit(), 1)
        .expect_err("run should fail");
    assert_out_of_range(err);
}

#[test]
fn stabilizer_run_rejects_gate_past_register() {
    let err = StabilizerEngine::default()
        .run(&out_of_range_circuit(), 1)
        .expect_err("run should fail");
    assert_out_of_range(err);
}

#[test]
fn distributed_run_rejects_gate_past_register() {
    let err = DistributedEngine::new(StabilizerEngine::default(), 2)
        .run(&out_of_range_circuit(), 4)
        .expect_err("run should fail");
    assert_out_of_range(err);
}

#[test]
fn run_rejects_empty_measurement() {
    let mut circuit = Circuit::new(2);
    circuit.measure([]);
    let err = StateVectorEngine::default()
        .run(&circuit, 3)
        .expect_err("run should fail");
    assert_eq!(
        EngineError::InvalidCircuit(Box::new(Error::EmptyMeasurement)),
        err
    );
}

#[test]
fn partition_spreads_remainder_over_first_ranks() {
    let engine = DistributedEngine::new(StateVectorEngine::default(), 3);
    assert_eq!(vec![4, 3, 3], engine.partition(10));
    assert_eq!(vec![1, 1, 0], engine.partition(2));
}

#[test]
fn zero_ranks_is_treated_as_one() {
    let engine = DistributedEngine::new(StabilizerEngine::default(), 0);
    assert_eq!(1, engine.ranks());
    assert_eq!(vec![5], engine.partition(5));
}

#[test]
fn distributed_run_reduces_to_requested_shots() {
    let engine = DistributedEngine::new(StabilizerEngine::default().with_seed(SEED), 4);
    let histogram = engine
        .run(&circuits::ghz(20), 101)
        .expect("run should succeed");
    assert_eq!(101, histogram.shots());
    assert_all_bits_equal(&histogram);
}

#[test]
fn distributed_run_with_more_ranks_than_shots() {
    let engine = DistributedEngine::new(StateVectorEngine::default(), 8);
    let histogram = engine
        .run(&Circuit::new(2), 3)
        .expect("run should succeed");
    expect!["{ 00:3 }"].assert_eq(&histogram.to_string());
}

#[test]
fn distributed_seeded_runs_are_reproducible() {
    let make = || DistributedEngine::new(StateVectorEngine::default().with_seed(99), 3);
    let circuit = circuits::basic_gates();
    assert_eq!(
        make().run(&circuit, 50).expect("run should succeed"),
        make().run(&circuit, 50).expect("run should succeed")
    );
}
