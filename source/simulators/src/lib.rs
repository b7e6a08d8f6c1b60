// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Circuit simulators used by the `qsample` execution engines.
//!
//! Every simulator implements [`Simulator`], which exposes gate application,
//! Z-basis measurement into numbered result slots, and reset. A simulator
//! instance models exactly one shot; the engines build a fresh instance per
//! shot with its own seed.

pub mod cpu_full_state_simulator;
pub mod noise_config;
pub mod stabilizer_simulator;
pub mod unitary;

use miette::Diagnostic;
use thiserror::Error;

pub use noise_config::PauliNoise;
pub use unitary::Unitary;

/// A qubit ID.
pub type QubitID = usize;

/// The result of a measurement in the Z-basis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeasurementResult {
    #[default]
    Zero,
    One,
}

impl MeasurementResult {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            MeasurementResult::Zero => '0',
            MeasurementResult::One => '1',
        }
    }
}

impl From<bool> for MeasurementResult {
    fn from(value: bool) -> Self {
        if value {
            MeasurementResult::One
        } else {
            MeasurementResult::Zero
        }
    }
}

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("the {simulator} simulator does not support the {gate} gate")]
    #[diagnostic(code("Qsample.Simulator.UnsupportedGate"))]
    #[diagnostic(help("use the full-state simulator for circuits with non-Clifford gates"))]
    UnsupportedGate {
        simulator: &'static str,
        gate: String,
    },
    #[error("invalid noise probabilities: {0}")]
    #[diagnostic(code("Qsample.Simulator.InvalidNoise"))]
    InvalidNoise(String),
}

/// The operations a simulator must provide to execute one shot of a circuit.
pub trait Simulator {
    type Noise: Clone + Send + Sync;

    /// A short, human readable name used in logs and error messages.
    const NAME: &'static str;

    /// The largest register [`Simulator::new`] accepts.
    const MAX_QUBITS: u32;

    fn new(num_qubits: usize, num_results: usize, seed: u64, noise: Self::Noise) -> Self;

    /// Checks whether `op` can be applied, optionally under a single control,
    /// without touching any state.
    fn supports(op: Unitary, controlled: bool) -> Result<(), Error>;

    fn apply(&mut self, op: Unitary, target: QubitID) -> Result<(), Error>;

    fn apply_controlled(
        &mut self,
        op: Unitary,
        control: QubitID,
        target: QubitID,
    ) -> Result<(), Error>;

    /// Measures `target` in the Z-basis and records the outcome in `result_id`.
    fn mz(&mut self, target: QubitID, result_id: usize);

    /// Resets `target` to the zero state.
    fn resetz(&mut self, target: QubitID);

    fn measurements(&self) -> &[MeasurementResult];

    fn take_measurements(&mut self) -> Vec<MeasurementResult>;

    fn x(&mut self, target: QubitID) -> Result<(), Error> {
        self.apply(Unitary::X, target)
    }

    fn h(&mut self, target: QubitID) -> Result<(), Error> {
        self.apply(Unitary::H, target)
    }

    fn cx(&mut self, control: QubitID, target: QubitID) -> Result<(), Error> {
        self.apply_controlled(Unitary::X, control, target)
    }
}

/// Renders measurement results as a bit-string, one character per result slot.
#[must_use]
pub fn measurements_str(measurements: &[MeasurementResult]) -> String {
    measurements.iter().map(|m| m.as_char()).collect()
}
