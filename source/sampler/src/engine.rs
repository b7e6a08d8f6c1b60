// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

mod distributed;

pub use distributed::DistributedEngine;

use crate::{Circuit, Gate, Histogram};
use log::debug;
use miette::Diagnostic;
use qsample_simulators::{
    PauliNoise, Simulator, cpu_full_state_simulator::FullStateSimulator, measurements_str,
    stabilizer_simulator::StabilizerSimulator,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Simulator(#[from] qsample_simulators::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidCircuit(Box<crate::Error>),
    #[error("the {engine} engine supports at most {max} qubits, but the circuit has {requested}")]
    #[diagnostic(code("Qsample.Engine.TooManyQubits"))]
    TooManyQubits {
        engine: &'static str,
        max: u32,
        requested: u32,
    },
}

/// Executes a circuit for a number of shots and aggregates the measured bit-strings.
///
/// Implementations reject a circuit that fails [`Circuit::validate`] before
/// running any shot. Zero shots yield an empty histogram.
pub trait ExecutionEngine: Send + Sync {
    fn name(&self) -> &'static str;

    /// Blocks until every shot has completed.
    fn run(&self, circuit: &Circuit, shots: u32) -> Result<Histogram, EngineError>;
}

/// Runs every shot on a fresh `S` instance, spreading the shots over the rayon thread pool.
pub struct SimulatorEngine<S> {
    seed: Option<u64>,
    noise: PauliNoise,
    max_qubits: u32,
    simulator: PhantomData<fn() -> S>,
}

/// Dense state-vector sampling; supports every gate.
pub type StateVectorEngine = SimulatorEngine<FullStateSimulator>;

/// Tableau sampling for Clifford circuits over large registers.
pub type StabilizerEngine = SimulatorEngine<StabilizerSimulator>;

impl Default for StateVectorEngine {
    fn default() -> Self {
        Self::with_max_qubits(20)
    }
}

impl Default for StabilizerEngine {
    fn default() -> Self {
        Self::with_max_qubits(1024)
    }
}

impl<S> SimulatorEngine<S>
where
    S: Simulator<Noise = PauliNoise>,
{
    /// Limits the register size this engine accepts. The simulator's own
    /// [`Simulator::MAX_QUBITS`] still applies when it is lower.
    #[must_use]
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            seed: None,
            noise: PauliNoise::NOISELESS,
            max_qubits,
            simulator: PhantomData,
        }
    }

    /// Makes runs reproducible: the same seed and circuit give the same histogram.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_noise(mut self, noise: PauliNoise) -> Self {
        self.noise = noise;
        self
    }

    /// The largest register this engine runs.
    #[must_use]
    pub fn max_qubits(&self) -> u32 {
        self.max_qubits.min(S::MAX_QUBITS)
    }

    /// Rejects circuits this engine cannot run before any shot executes.
    fn check(&self, circuit: &Circuit) -> Result<(), EngineError> {
        circuit
            .validate()
            .map_err(|err| EngineError::InvalidCircuit(Box::new(err)))?;
        let max = self.max_qubits.min(S::MAX_QUBITS);
        if circuit.num_qubits() > max {
            return Err(EngineError::TooManyQubits {
                engine: S::NAME,
                max,
                requested: circuit.num_qubits(),
            });
        }
        for gate in circuit.gates() {
            match *gate {
                Gate::Single { op, .. } => S::supports(op, false)?,
                Gate::Controlled { op, .. } => S::supports(op, true)?,
            }
        }
        Ok(())
    }

    fn master_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Runs `shots` shots, drawing one seed per shot from `rng`.
    fn run_shots(
        &self,
        circuit: &Circuit,
        shots: u32,
        rng: &mut StdRng,
    ) -> Result<Histogram, EngineError> {
        let measured: Vec<usize> = circuit
            .measured_qubits()
            .into_iter()
            .map(|q| q as usize)
            .collect();

        let outcomes = (0..shots)
            .map(|_| rng.r#gen())
            .collect::<Vec<u64>>()
            .par_iter()
            .map(|shot_seed| {
                let simulator = S::new(
                    circuit.num_qubits() as usize,
                    measured.len(),
                    *shot_seed,
                    self.noise,
                );
                run_shot(circuit, &measured, simulator)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(outcomes.into_iter().collect())
    }
}

impl<S> ExecutionEngine for SimulatorEngine<S>
where
    S: Simulator<Noise = PauliNoise>,
{
    fn name(&self) -> &'static str {
        S::NAME
    }

    fn run(&self, circuit: &Circuit, shots: u32) -> Result<Histogram, EngineError> {
        self.check(circuit)?;
        debug!(
            "running {shots} shots of a {}-qubit circuit with {} gates on the {} engine",
            circuit.num_qubits(),
            circuit.gates().len(),
            S::NAME
        );
        let mut rng = self.master_rng();
        self.run_shots(circuit, shots, &mut rng)
    }
}

/// Applies every gate in order, then measures `measured` into consecutive result slots.
fn run_shot(
    circuit: &Circuit,
    measured: &[usize],
    mut sim: impl Simulator,
) -> Result<String, EngineError> {
    for gate in circuit.gates() {
        match *gate {
            Gate::Single { op, target } => sim.apply(op, target as usize)?,
            Gate::Controlled {
                op,
                control,
                target,
            } => sim.apply_controlled(op, control as usize, target as usize)?,
        }
    }
    for (result_id, &qubit) in measured.iter().enumerate() {
        sim.mz(qubit, result_id);
    }
    Ok(measurements_str(&sim.take_measurements()))
}
