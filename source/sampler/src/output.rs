// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Histogram, RankContext};
use log::debug;
use std::io::{self, Write};

/// Prints a run's histogram from the lead process only.
///
/// A standalone process is always the lead; otherwise only a process that
/// knows it is rank 0 leads. [`OutputGate::report`] consumes the gate, so each
/// run reports at most once.
pub struct OutputGate {
    context: RankContext,
}

impl OutputGate {
    #[must_use]
    pub fn new(context: RankContext) -> Self {
        Self { context }
    }

    #[must_use]
    pub fn should_print(&self) -> bool {
        self.context.is_lead()
    }

    /// Writes the summary line followed by one `Observed: <bits>, <count>` line
    /// per outcome. Returns whether anything was written.
    pub fn report(self, histogram: &Histogram, out: &mut impl Write) -> io::Result<bool> {
        if !self.should_print() {
            debug!("{:?} leaves output to rank 0", self.context);
            return Ok(false);
        }

        writeln!(out, "{histogram}")?;
        for (bits, count) in histogram.iter() {
            writeln!(out, "Observed: {bits}, {count}")?;
        }
        out.flush()?;
        Ok(true)
    }
}
