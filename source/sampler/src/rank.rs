// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use log::warn;

/// Rank and size variables set by common MPI launchers, checked in order.
const LAUNCHER_VARIABLES: [(&str, &str); 2] = [
    ("OMPI_COMM_WORLD_RANK", "OMPI_COMM_WORLD_SIZE"),
    ("PMI_RANK", "PMI_SIZE"),
];

/// Where this process sits in a multi-process run.
///
/// Built once at process start and passed to whatever needs to gate behavior
/// on it. Nothing in the crate mutates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RankContext {
    #[default]
    Standalone,
    Distributed {
        rank: u32,
        size: u32,
    },
    /// A launcher set its variables but they do not describe a valid rank.
    /// `rank` is kept when it parsed.
    Unresolved {
        rank: Option<u32>,
    },
}

impl RankContext {
    #[must_use]
    pub fn standalone() -> Self {
        RankContext::Standalone
    }

    /// Returns `None` when `rank` is not below `size`.
    #[must_use]
    pub fn distributed(rank: u32, size: u32) -> Option<Self> {
        (rank < size).then_some(RankContext::Distributed { rank, size })
    }

    /// Reads the rank from the variables an MPI launcher exports.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`RankContext::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        for (rank_var, size_var) in LAUNCHER_VARIABLES {
            let (Some(rank), Some(size)) = (lookup(rank_var), lookup(size_var)) else {
                continue;
            };
            let parsed_rank = rank.trim().parse::<u32>().ok();
            let parsed_size = size.trim().parse::<u32>().ok();
            if let Some(context) =
                parsed_rank.zip(parsed_size).and_then(|(r, s)| Self::distributed(r, s))
            {
                return context;
            }
            warn!("{rank_var}={rank:?} and {size_var}={size:?} do not describe a valid rank");
            return RankContext::Unresolved { rank: parsed_rank };
        }
        RankContext::Standalone
    }

    /// Whether a launcher started this process, even if its rank is unresolved.
    #[must_use]
    pub fn is_distributed(&self) -> bool {
        !matches!(self, RankContext::Standalone)
    }

    /// The rank of this process; a standalone process is rank 0.
    #[must_use]
    pub fn rank(&self) -> Option<u32> {
        match self {
            RankContext::Standalone => Some(0),
            RankContext::Distributed { rank, .. } => Some(*rank),
            RankContext::Unresolved { rank } => *rank,
        }
    }

    #[must_use]
    pub fn size(&self) -> Option<u32> {
        match self {
            RankContext::Standalone => Some(1),
            RankContext::Distributed { size, .. } => Some(*size),
            RankContext::Unresolved { .. } => None,
        }
    }

    /// Whether this process is the one that reports results. Only a process
    /// that knows it is rank 0 leads.
    #[must_use]
    pub fn is_lead(&self) -> bool {
        self.rank() == Some(0)
    }
}
