// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use proptest::prelude::*;
use qsample::{
    Circuit, DistributedEngine, OutputGate, RankContext, StabilizerEngine, StateVectorEngine,
    circuits, sample,
};

const MAX_QUBITS: u32 = 5;

fn arbitrary_clifford_circuit() -> impl Strategy<Value = Circuit> {
    (1..=MAX_QUBITS).prop_flat_map(|num_qubits| {
        prop::collection::vec((0..6u8, 0..num_qubits, 0..num_qubits), 0..20).prop_map(
            move |gates| {
                let mut circuit = Circuit::new(num_qubits);
                for (kind, a, b) in gates {
                    match kind {
                        0 => circuit.h(a),
                        1 => circuit.s(a),
                        2 => circuit.x(a),
                        3 => circuit.z(a),
                        _ if a == b => circuit.y(a),
                        4 => circuit.cx(a, b),
                        _ => circuit.cz(a, b),
                    };
                }
                circuit.measure_all();
                circuit
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn counts_sum_to_shots(circuit in arbitrary_clifford_circuit(), shots in 1..64u32, seed in any::<u64>()) {
        let engine = StateVectorEngine::default().with_seed(seed);
        let histogram = sample(&engine, &circuit, shots).expect("sample should succeed");
        prop_assert_eq!(u64::from(shots), histogram.shots());
        prop_assert_eq!(u64::from(shots), histogram.iter().map(|(_, count)| count).sum::<u64>());
    }

    #[test]
    fn keys_have_one_bit_per_measured_qubit(circuit in arbitrary_clifford_circuit(), seed in any::<u64>()) {
        let engine = StabilizerEngine::default().with_seed(seed);
        let histogram = sample(&engine, &circuit, 16).expect("sample should succeed");
        let width = circuit.num_qubits() as usize;
        for (bits, _) in histogram.iter() {
            prop_assert_eq!(width, bits.len());
            prop_assert!(bits.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn ghz_bits_always_agree(num_qubits in 1..64u32, seed in any::<u64>()) {
        let engine = StabilizerEngine::default().with_seed(seed);
        let histogram = sample(&engine, &circuits::ghz(num_qubits), 20).expect("sample should succeed");
        for (bits, _) in histogram.iter() {
            prop_assert!(bits.chars().all(|c| c == '0') || bits.chars().all(|c| c == '1'));
        }
    }

    #[test]
    fn distributed_runs_keep_every_shot(ranks in 0..8u32, shots in 1..100u32, seed in any::<u64>()) {
        let engine = DistributedEngine::new(StabilizerEngine::default().with_seed(seed), ranks);
        let partition = engine.partition(shots);
        prop_assert_eq!(shots, partition.iter().sum::<u32>());
        let largest = partition.iter().max().copied().unwrap_or_default();
        let smallest = partition.iter().min().copied().unwrap_or_default();
        prop_assert!(largest - smallest <= 1);

        let histogram = sample(&engine, &circuits::ghz(3), shots).expect("sample should succeed");
        prop_assert_eq!(u64::from(shots), histogram.shots());
    }

    #[test]
    fn only_rank_zero_reports(size in 1..64u32, rank_seed in any::<u32>()) {
        let rank = rank_seed % size;
        let context = RankContext::distributed(rank, size).expect("rank should be below size");
        let histogram = ["0", "1"].into_iter().map(String::from).collect();
        let mut out = Vec::new();
        let printed = OutputGate::new(context)
            .report(&histogram, &mut out)
            .expect("writing to a vector should succeed");
        prop_assert_eq!(rank == 0, printed);
        prop_assert_eq!(rank == 0, !out.is_empty());
    }
}
