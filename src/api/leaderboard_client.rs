use anyhow::Result;
use log::info;

use crate::api::parsers;
use crate::config::ScraperSettings;
use crate::domain::LeaderboardPage;
use crate::http::HttpClient;
use crate::pagination::PageSource;

/// Steam community leaderboard XML client
pub struct LeaderboardClient {
    client: HttpClient,
}

impl LeaderboardClient {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self { client })
    }

    /// Fetch and parse a single leaderboard page
    pub async fn fetch_page(&self, url: &str) -> Result<LeaderboardPage> {
        info!("Scraping: {}", url);
        let xml = self.client.get_text(url).await?;
        parsers::parse_page(&xml)
    }
}

impl PageSource for LeaderboardClient {
    async fn fetch_page(&mut self, url: &str) -> Result<LeaderboardPage> {
        LeaderboardClient::fetch_page(self, url).await
    }
}
