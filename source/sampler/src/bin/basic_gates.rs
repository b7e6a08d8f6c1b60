// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Samples a two-qubit circuit touching each basic gate and prints the
//! outcome counts from the lead rank.

use miette::IntoDiagnostic;
use qsample::{OutputGate, RankContext, StateVectorEngine, circuits, sample};

const SHOTS: u32 = 100;

fn main() -> miette::Result<()> {
    env_logger::init();
    let context = RankContext::from_env();

    let histogram = sample(&StateVectorEngine::default(), &circuits::basic_gates(), SHOTS)?;

    OutputGate::new(context)
        .report(&histogram, &mut std::io::stdout().lock())
        .into_diagnostic()?;
    Ok(())
}
