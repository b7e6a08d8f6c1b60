// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    Error, MeasurementResult, QubitID, Simulator,
    noise_config::PauliNoise,
    unitary::{Matrix2, Unitary},
};
use log::trace;
use num_complex::Complex64;
use rand::{Rng, SeedableRng as _, rngs::StdRng};

/// A dense state-vector simulator.
///
/// Qubit `q` corresponds to bit `q` of the basis-state index, so the
/// amplitude of `|q1 q0⟩ = |10⟩` lives at index `0b10`.
pub struct FullStateSimulator {
    /// The `2^n` amplitudes of the current state.
    state: Vec<Complex64>,
    /// Noise applied after each gate.
    noise: PauliNoise,
    /// Random number generator used for measurements and noise.
    rng: StdRng,
    /// Measurement results.
    measurements: Vec<MeasurementResult>,
}

impl FullStateSimulator {
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.state.len().trailing_zeros() as usize
    }

    /// Returns the amplitudes of the current state.
    #[must_use]
    pub fn state(&self) -> &[Complex64] {
        &self.state
    }

    /// The Born-rule probability of observing `|1⟩` on `target`.
    #[must_use]
    pub fn probability_of_one(&self, target: QubitID) -> f64 {
        let mask = 1 << target;
        self.state
            .iter()
            .enumerate()
            .filter(|(index, _)| index & mask != 0)
            .map(|(_, amplitude)| amplitude.norm_sqr())
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }

    fn apply_matrix(&mut self, matrix: &Matrix2, target: QubitID, control: Option<QubitID>) {
        let target_mask = 1 << target;
        let control_mask = control.map_or(0, |c| 1 << c);
        for i0 in 0..self.state.len() {
            if i0 & target_mask != 0 || i0 & control_mask != control_mask {
                continue;
            }
            let i1 = i0 | target_mask;
            let a0 = self.state[i0];
            let a1 = self.state[i1];
            self.state[i0] = matrix[0][0] * a0 + matrix[0][1] * a1;
            self.state[i1] = matrix[1][0] * a0 + matrix[1][1] * a1;
        }
    }

    fn apply_noise(&mut self, targets: &[QubitID]) {
        for &target in targets {
            if let Some(fault) = self.noise.gen_fault(&mut self.rng) {
                trace!("injecting {fault} fault on qubit {target}");
                self.apply_matrix(&fault.matrix(), target, None);
            }
        }
    }

    /// Measures a Z observable on the given `target` and collapses the state.
    fn mz_impl(&mut self, target: QubitID) -> MeasurementResult {
        let p1 = self.probability_of_one(target);
        let outcome = self.rng.gen_range(0.0..1.0) < p1;
        let norm = if outcome { p1.sqrt() } else { (1.0 - p1).sqrt() };
        let mask = 1 << target;
        for (index, amplitude) in self.state.iter_mut().enumerate() {
            if (index & mask != 0) == outcome {
                *amplitude /= norm;
            } else {
                *amplitude = Complex64::new(0.0, 0.0);
            }
        }
        outcome.into()
    }
}

impl Simulator for FullStateSimulator {
    type Noise = PauliNoise;

    const NAME: &'static str = "full-state";

    /// 2^30 amplitudes take 16 GiB.
    const MAX_QUBITS: u32 = 30;

    fn new(num_qubits: usize, num_results: usize, seed: u64, noise: Self::Noise) -> Self {
        assert!(
            num_qubits <= Self::MAX_QUBITS as usize,
            "the full-state simulator supports at most {} qubits",
            Self::MAX_QUBITS
        );
        let mut state = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        state[0] = Complex64::new(1.0, 0.0);
        Self {
            state,
            noise,
            rng: StdRng::seed_from_u64(seed),
            measurements: vec![MeasurementResult::Zero; num_results],
        }
    }

    fn supports(_op: Unitary, _controlled: bool) -> Result<(), Error> {
        Ok(())
    }

    fn apply(&mut self, op: Unitary, target: QubitID) -> Result<(), Error> {
        if op != Unitary::I {
            self.apply_matrix(&op.matrix(), target, None);
        }
        self.apply_noise(&[target]);
        Ok(())
    }

    fn apply_controlled(
        &mut self,
        op: Unitary,
        control: QubitID,
        target: QubitID,
    ) -> Result<(), Error> {
        self.apply_matrix(&op.matrix(), target, Some(control));
        self.apply_noise(&[control, target]);
        Ok(())
    }

    fn mz(&mut self, target: QubitID, result_id: usize) {
        let measurement = self.mz_impl(target);
        self.measurements[result_id] = measurement;
    }

    fn resetz(&mut self, target: QubitID) {
        if self.mz_impl(target) == MeasurementResult::One {
            self.apply_matrix(&Unitary::X.matrix(), target, None);
        }
    }

    fn measurements(&self) -> &[MeasurementResult] {
        &self.measurements
    }

    fn take_measurements(&mut self) -> Vec<MeasurementResult> {
        std::mem::take(&mut self.measurements)
    }
}
