/// One leaderboard row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerEntry {
    pub rank: i64,
    pub score: i64,
}

impl PlayerEntry {
    pub fn new(rank: i64, score: i64) -> Self {
        Self { rank, score }
    }
}

impl From<(i64, i64)> for PlayerEntry {
    fn from((rank, score): (i64, i64)) -> Self {
        Self::new(rank, score)
    }
}

/// Entries extracted from a single page plus the link to the following one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderboardPage {
    pub entries: Vec<PlayerEntry>,
    pub next_url: Option<String>,
}

impl LeaderboardPage {
    pub fn new(entries: Vec<PlayerEntry>, next_url: Option<String>) -> Self {
        Self { entries, next_url }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
