use anyhow::Result;

use crate::domain::LeaderboardPage;

/// Anything that can turn a page URL into parsed leaderboard entries
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&mut self, url: &str) -> Result<LeaderboardPage>;
}
