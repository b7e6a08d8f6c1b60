// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Samples a GHZ state on the stabilizer engine. Every shot is all zeros or
//! all ones.

use miette::IntoDiagnostic;
use qsample::{OutputGate, RankContext, StabilizerEngine, circuits, sample};

const QUBITS: u32 = 10;
const SHOTS: u32 = 100;

fn main() -> miette::Result<()> {
    env_logger::init();
    let context = RankContext::from_env();

    let histogram = sample(&StabilizerEngine::default(), &circuits::ghz(QUBITS), SHOTS)?;

    OutputGate::new(context)
        .report(&histogram, &mut std::io::stdout().lock())
        .into_diagnostic()?;
    Ok(())
}
