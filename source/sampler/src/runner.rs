// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Circuit, Error, ExecutionEngine, Histogram};
use log::{debug, info};

/// Samples `circuit` for `shots` shots on `engine`.
///
/// The circuit and shot count are validated before anything is submitted, so
/// an invalid request never executes a shot. Engine failures are passed
/// through unchanged.
pub fn sample<E>(engine: &E, circuit: &Circuit, shots: u32) -> Result<Histogram, Error>
where
    E: ExecutionEngine + ?Sized,
{
    circuit.validate()?;
    if shots == 0 {
        return Err(Error::ZeroShots);
    }

    debug!("gate counts: {:?}", circuit.gate_counts());
    let histogram = engine.run(circuit, shots)?;
    debug_assert_eq!(histogram.shots(), u64::from(shots));
    info!(
        "{} engine observed {} distinct outcomes over {shots} shots",
        engine.name(),
        histogram.len()
    );
    Ok(histogram)
}
