// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{EngineError, ExecutionEngine, SimulatorEngine};
use crate::{Circuit, Histogram};
use log::debug;
use qsample_simulators::{PauliNoise, Simulator};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Splits the shots of a run across worker ranks and reduces their histograms.
///
/// Every rank samples its share with its own seed, drawn from the inner
/// engine's seed, so a seeded run is reproducible for a fixed rank count.
pub struct DistributedEngine<S> {
    inner: SimulatorEngine<S>,
    ranks: u32,
}

impl<S> DistributedEngine<S>
where
    S: Simulator<Noise = PauliNoise>,
{
    /// A `ranks` value of zero is treated as one.
    #[must_use]
    pub fn new(inner: SimulatorEngine<S>, ranks: u32) -> Self {
        Self {
            inner,
            ranks: ranks.max(1),
        }
    }

    #[must_use]
    pub fn ranks(&self) -> u32 {
        self.ranks
    }

    /// The number of shots each rank runs. The first `shots % ranks` ranks take one extra.
    #[must_use]
    pub fn partition(&self, shots: u32) -> Vec<u32> {
        let base = shots / self.ranks;
        let extra = shots % self.ranks;
        (0..self.ranks)
            .map(|rank| base + u32::from(rank < extra))
            .collect()
    }
}

impl<S> ExecutionEngine for DistributedEngine<S>
where
    S: Simulator<Noise = PauliNoise>,
{
    fn name(&self) -> &'static str {
        "distributed"
    }

    fn run(&self, circuit: &Circuit, shots: u32) -> Result<Histogram, EngineError> {
        self.inner.check(circuit)?;

        let mut rng = self.inner.master_rng();
        let work: Vec<(usize, u32, u64)> = self
            .partition(shots)
            .into_iter()
            .enumerate()
            .map(|(rank, rank_shots)| (rank, rank_shots, rng.r#gen()))
            .filter(|&(_, rank_shots, _)| rank_shots > 0)
            .collect();

        let partials = work
            .into_par_iter()
            .map(|(rank, rank_shots, seed)| {
                debug!(
                    "rank {rank} running {rank_shots} shots on the {} engine",
                    S::NAME
                );
                self.inner
                    .run_shots(circuit, rank_shots, &mut StdRng::seed_from_u64(seed))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(partials
            .into_iter()
            .reduce(Histogram::merge)
            .unwrap_or_default())
    }
}
