// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A stabilizer simulator for Clifford circuits.
//!
//! The cost of a gate is linear in the number of qubits and a measurement is
//! at worst quadratic, so this simulator handles registers far beyond the
//! reach of the full-state simulator, as long as every gate is Clifford.


pub mod tableau;

use crate::{
    Error, MeasurementResult, QubitID, Simulator, noise_config::PauliNoise, unitary::Unitary,
};
use log::trace;
use rand::{SeedableRng as _, rngs::StdRng};
use tableau::Tableau;

pub struct StabilizerSimulator {
    /// The current state of the simulation.
    state: Tableau,
    /// Noise applied after each gate.
    noise: PauliNoise,
    /// Random number generator used for measurements and noise.
    rng: StdRng,
    /// Measurement results.
    measurements: Vec<MeasurementResult>,
}

impl StabilizerSimulator {
    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.state
    }

    fn s_adj(&mut self, target: QubitID) {
        self.state.z(target);
        self.state.s(target);
    }

    /// Applies a Clifford gate without noise.
    fn apply_clifford(&mut self, op: Unitary, target: QubitID) {
        match op {
            Unitary::I => (),
            Unitary::H => self.state.h(target),
            Unitary::X => self.state.x(target),
            Unitary::Y => self.state.y(target),
            Unitary::Z => self.state.z(target),
            Unitary::S => self.state.s(target),
            Unitary::SAdj => self.s_adj(target),
            Unitary::SX => {
                self.state.h(target);
                self.state.s(target);
                self.state.h(target);
            }
            Unitary::SXAdj => {
                self.state.h(target);
                self.s_adj(target);
                self.state.h(target);
            }
            Unitary::T | Unitary::TAdj | Unitary::Rx(_) | Unitary::Ry(_) | Unitary::Rz(_) => {
                unreachable!("non-Clifford gates are rejected before they are applied")
            }
        }
    }

    fn apply_noise(&mut self, targets: &[QubitID]) {
        for &target in targets {
            if let Some(fault) = self.noise.gen_fault(&mut self.rng) {
                trace!("injecting {fault} fault on qubit {target}");
                self.apply_clifford(fault, target);
            }
        }
    }

    fn mz_impl(&mut self, target: QubitID) -> MeasurementResult {
        self.state.measure(target, &mut self.rng).into()
    }
}

impl Simulator for StabilizerSimulator {
    type Noise = PauliNoise;

    const NAME: &'static str = "stabilizer";

    const MAX_QUBITS: u32 = u32::MAX;

    fn new(num_qubits: usize, num_results: usize, seed: u64, noise: Self::Noise) -> Self {
        Self {
            state: Tableau::new(num_qubits),
            noise,
            rng: StdRng::seed_from_u64(seed),
            measurements: vec![MeasurementResult::Zero; num_results],
        }
    }

    fn supports(op: Unitary, controlled: bool) -> Result<(), Error> {
        let supported = if controlled {
            matches!(op, Unitary::I | Unitary::X | Unitary::Y | Unitary::Z)
        } else {
            op.is_clifford()
        };
        if supported {
            Ok(())
        } else {
            Err(Error::UnsupportedGate {
                simulator: Self::NAME,
                gate: if controlled {
                    format!("c{op}")
                } else {
                    op.to_string()
                },
            })
        }
    }

    fn apply(&mut self, op: Unitary, target: QubitID) -> Result<(), Error> {
        Self::supports(op, false)?;
        self.apply_clifford(op, target);
        self.apply_noise(&[target]);
        Ok(())
    }

    fn apply_controlled(
        &mut self,
        op: Unitary,
        control: QubitID,
        target: QubitID,
    ) -> Result<(), Error> {
        Self::supports(op, true)?;
        match op {
            Unitary::X => self.state.cx(control, target),
            Unitary::Y => {
                self.s_adj(target);
                self.state.cx(control, target);
                self.state.s(target);
            }
            Unitary::Z => {
                self.state.h(target);
                self.state.cx(control, target);
                self.state.h(target);
            }
            _ => (),
        }
        self.apply_noise(&[control, target]);
        Ok(())
    }

    fn mz(&mut self, target: QubitID, result_id: usize) {
        let measurement = self.mz_impl(target);
        self.measurements[result_id] = measurement;
    }

    fn resetz(&mut self, target: QubitID) {
        if self.mz_impl(target) == MeasurementResult::One {
            self.state.x(target);
        }
    }

    fn measurements(&self) -> &[MeasurementResult] {
        &self.measurements
    }

    fn take_measurements(&mut self) -> Vec<MeasurementResult> {
        std::mem::take(&mut self.measurements)
    }
}
