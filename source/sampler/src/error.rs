// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::engine::EngineError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("a circuit needs at least one qubit")]
    #[diagnostic(code("Qsample.Circuit.EmptyRegister"))]
    EmptyRegister,
    #[error("the shot count must be at least one")]
    #[diagnostic(code("Qsample.Run.ZeroShots"))]
    ZeroShots,
    #[error("a measurement needs at least one qubit")]
    #[diagnostic(code("Qsample.Circuit.EmptyMeasurement"))]
    EmptyMeasurement,
    #[error("gate {gate} uses qubit {qubit} as both control and target")]
    #[diagnostic(code("Qsample.Circuit.ControlIsTarget"))]
    ControlIsTarget { gate: usize, qubit: u32 },
    #[error("qubit {qubit} is measured more than once")]
    #[diagnostic(code("Qsample.Circuit.DuplicateMeasurement"))]
    DuplicateMeasurement { qubit: u32 },
    #[error("gate {gate} references qubit {qubit}, but the register has {num_qubits} qubits")]
    #[diagnostic(code("Qsample.Circuit.GateOutOfRange"))]
    GateOutOfRange {
        gate: usize,
        qubit: u32,
        num_qubits: u32,
    },
    #[error("measurement references qubit {qubit}, but the register has {num_qubits} qubits")]
    #[diagnostic(code("Qsample.Circuit.MeasurementOutOfRange"))]
    MeasurementOutOfRange { qubit: u32, num_qubits: u32 },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),
}

/// The broad category an [`Error`] falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    EngineFailure,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyRegister
            | Error::ZeroShots
            | Error::EmptyMeasurement
            | Error::ControlIsTarget { .. }
            | Error::DuplicateMeasurement { .. } => ErrorKind::InvalidArgument,
            Error::GateOutOfRange { .. } | Error::MeasurementOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            Error::Engine(EngineError::InvalidCircuit(err)) => err.kind(),
            Error::Engine(_) => ErrorKind::EngineFailure,
        }
    }
}
