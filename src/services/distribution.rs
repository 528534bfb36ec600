use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::api::LeaderboardClient;
use crate::chart::{self, ChartModel};
use crate::config::{AppConfig, ChartSettings};
use crate::domain::PlayerEntry;
use crate::pagination::{collect_all_entries, PaginationConfig};
use crate::tiers::{bucketize, TierCounts};

pub struct DistributionService {
    config: AppConfig,
    client: LeaderboardClient,
}

impl DistributionService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = LeaderboardClient::new(&config.scraper)?;
        Ok(Self { config, client })
    }

    /// Step 1: walk every leaderboard page
    pub async fn collect_players(&mut self) -> Result<Vec<PlayerEntry>> {
        info!("=== Fetching Leaderboard ===");
        let url = self.config.scraper.leaderboard_url.clone();
        let pagination = self.pagination_config();
        collect_all_entries(&mut self.client, &url, pagination).await
    }

    /// Steps 2 and 3: bucket the players and show the chart
    pub fn present(&self, players: &[PlayerEntry]) -> Result<()> {
        match build_chart(players, &self.config.chart)? {
            Some(model) => {
                info!("=== Rendering Chart ===");
                chart::show(model, &self.config.chart)
            }
            None => {
                println!("{}", "No players found.".yellow());
                Ok(())
            }
        }
    }

    fn pagination_config(&self) -> PaginationConfig {
        let mut config = PaginationConfig::new();
        if let Some(max) = self.config.pagination.max_pages {
            config = config.with_max_pages(max);
        }
        config
    }
}

/// Bucket `players` into a chart model, or `None` when there is nobody to chart
pub fn build_chart(
    players: &[PlayerEntry],
    settings: &ChartSettings,
) -> Result<Option<ChartModel>> {
    if players.is_empty() {
        return Ok(None);
    }

    let counts = bucketize(players);
    log_summary(&counts);

    ChartModel::new(&counts, players.len(), settings.attribution).map(Some)
}

fn log_summary(counts: &TierCounts) {
    info!("=== Tier Distribution ({} players) ===", counts.total());
    for (tier, count) in counts.iter() {
        info!("  {:<9} {:>10}  {:>7}", tier.as_str(), tier.range_label(), count);
    }
}
