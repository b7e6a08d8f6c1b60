// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::Tableau;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Power of `i` picked up when multiplying the single-qubit Paulis
/// `(x1, z1) * (x2, z2)`.
fn column_phase(x1: bool, z1: bool, x2: bool, z2: bool) -> i32 {
    let (x2, z2) = (i32::from(x2), i32::from(z2));
    match (x1, z1) {
        (false, false) => 0,
        (true, true) => z2 - x2,
        (true, false) => z2 * (2 * x2 - 1),
        (false, true) => x2 * (1 - 2 * z2),
    }
}

fn randomize_row(tableau: &mut Tableau, row: usize, rng: &mut StdRng) {
    for col in 0..tableau.num_qubits() {
        tableau.set_x(row, col, rng.r#gen());
        tableau.set_z(row, col, rng.r#gen());
    }
    tableau.r[row] = rng.r#gen();
}

fn check_rowsum_against_columns(num_qubits: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tableau = Tableau::new(num_qubits);
    let (h, i) = (0, 1);
    randomize_row(&mut tableau, h, &mut rng);
    randomize_row(&mut tableau, i, &mut rng);

    let mut phase = 2 * i32::from(tableau.r[h]) + 2 * i32::from(tableau.r[i]);
    let mut expected_x = Vec::new();
    let mut expected_z = Vec::new();
    for col in 0..num_qubits {
        let (x1, z1) = (tableau.x_bit(i, col), tableau.z_bit(i, col));
        let (x2, z2) = (tableau.x_bit(h, col), tableau.z_bit(h, col));
        phase += column_phase(x1, z1, x2, z2);
        expected_x.push(x1 ^ x2);
        expected_z.push(z1 ^ z2);
    }

    tableau.rowsum(h, i);

    assert_eq!(phase.rem_euclid(4) == 2, tableau.r[h], "sign for seed {seed}");
    for col in 0..num_qubits {
        assert_eq!(expected_x[col], tableau.x_bit(h, col));
        assert_eq!(expected_z[col], tableau.z_bit(h, col));
    }
}

#[test]
fn rowsum_matches_column_by_column_phase() {
    for num_qubits in [1, 5, 63, 64, 65, 130, 1024] {
        for seed in 0..20 {
            check_rowsum_against_columns(num_qubits, seed);
        }
    }
}

#[test]
fn deterministic_measurement_on_large_register() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut tableau = Tableau::new(1024);
    tableau.h(0);
    for q in 0..1023 {
        tableau.cx(q, q + 1);
    }
    let first = tableau.measure(0, &mut rng);
    for q in 1..1024 {
        assert_eq!(first, tableau.measure(q, &mut rng), "qubit {q}");
    }
}
