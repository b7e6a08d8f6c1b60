// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Ready-made circuits used by the sample programs.

use crate::Circuit;

/// Two qubits through H, X, Y, Z, and a CX, measured together.
///
/// Qubit 0 ends up in an equal superposition and qubit 1 in `|1⟩` before the
/// CX, so the outcomes are `01` and `10` with equal odds.
#[must_use]
pub fn basic_gates() -> Circuit {
    let mut circuit = Circuit::new(2);
    circuit.h(0).x(0).y(1).z(1).cx(0, 1).measure_all();
    circuit
}

/// Prepares the `num_qubits`-qubit GHZ state `(|0…0⟩ + |1…1⟩) / √2`.
#[must_use]
pub fn ghz(num_qubits: u32) -> Circuit {
    let mut circuit = Circuit::new(num_qubits);
    if num_qubits > 0 {
        circuit.h(0);
    }
    for q in 0..num_qubits.saturating_sub(1) {
        circuit.cx(q, q + 1);
    }
    circuit.measure_all();
    circuit
}
