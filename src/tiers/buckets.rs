use log::warn;

use super::Tier;
use crate::domain::PlayerEntry;

/// Player count per tier, always iterated in ladder order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierCounts {
    counts: [usize; Tier::COUNT],
}

impl TierCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tier: Tier) {
        self.counts[tier.index()] += 1;
    }

    pub fn get(&self, tier: Tier) -> usize {
        self.counts[tier.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, usize)> + '_ {
        Tier::ALL.iter().map(|&tier| (tier, self.get(tier)))
    }
}

/// Count how many entries fall into each tier
pub fn bucketize(entries: &[PlayerEntry]) -> TierCounts {
    let mut counts = TierCounts::new();

    for entry in entries {
        if entry.score < 0 {
            warn!(
                "Negative score {} (rank {}) counted as {}",
                entry.score,
                entry.rank,
                Tier::Masters
            );
        }
        counts.record(Tier::from_score(entry.score));
    }

    counts
}
