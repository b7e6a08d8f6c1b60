// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

/// How often each measured bit-string was observed across the shots of one run.
///
/// Character `i` of a bit-string is the outcome of the `i`-th measured qubit.
/// The counts always add up to [`Histogram::shots`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<String, u64>,
    shots: u64,
}

impl Histogram {
    /// The total number of shots, which is also the sum of all counts.
    #[must_use]
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// The number of distinct bit-strings observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn count(&self, bits: &str) -> u64 {
        self.counts.get(bits).copied().unwrap_or_default()
    }

    /// Bit-strings and their counts, in lexicographic order of the bit-strings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(bits, count)| (bits.as_str(), *count))
    }

    /// The observed frequency of `bits`, or `0.0` for an empty histogram.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn probability(&self, bits: &str) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            self.count(bits) as f64 / self.shots as f64
        }
    }

    /// The most frequently observed bit-string; ties go to the lexicographically smallest.
    #[must_use]
    pub fn most_probable(&self) -> Option<&str> {
        self.iter()
            .max_by(|(a_bits, a_count), (b_bits, b_count)| {
                a_count.cmp(b_count).then_with(|| b_bits.cmp(a_bits))
            })
            .map(|(bits, _)| bits)
    }

    /// Combines the outcomes of two runs of the same circuit.
    #[must_use]
    pub fn merge(mut self, other: Histogram) -> Histogram {
        for (bits, count) in other.counts {
            *self.counts.entry(bits).or_insert(0) += count;
        }
        self.shots += other.shots;
        self
    }
}

impl FromIterator<String> for Histogram {
    fn from_iter<I: IntoIterator<Item = String>>(outcomes: I) -> Self {
        let mut histogram = Histogram::default();
        for bits in outcomes {
            *histogram.counts.entry(bits).or_insert(0) += 1;
            histogram.shots += 1;
        }
        histogram
    }
}

/// Renders the summary line, e.g. `{ 01:48 10:52 }`.
impl Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (bits, count) in self.iter() {
            write!(f, "{bits}:{count} ")?;
        }
        write!(f, "}}")
    }
}
