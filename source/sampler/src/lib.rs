// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Build a circuit, sample it on an [`ExecutionEngine`], and report the
//! resulting [`Histogram`] from the lead process of a run.

pub mod circuit;
pub mod circuits;
pub mod engine;
mod error;
pub mod histogram;
pub mod output;
pub mod rank;
mod runner;

pub use circuit::{Circuit, Gate, Measurement};
pub use engine::{
    DistributedEngine, EngineError, ExecutionEngine, SimulatorEngine, StabilizerEngine,
    StateVectorEngine,
};
pub use error::{Error, ErrorKind};
pub use histogram::Histogram;
pub use output::OutputGate;
pub use qsample_simulators::{PauliNoise, Unitary};
pub use rank::RankContext;
pub use runner::sample;
