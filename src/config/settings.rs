use crate::cli::Cli;

pub const DEFAULT_LEADERBOARD_URL: &str =
    "https://steamcommunity.com/stats/2217000/leaderboards/14800950/?xml=1";

pub struct ScraperSettings {
    pub leaderboard_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: Option<u64>,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            leaderboard_url: DEFAULT_LEADERBOARD_URL.to_string(),
            user_agent: "LeaderboardTiers/1.0",
            timeout_secs: None, // a hung request hangs the run
        }
    }
}

#[derive(Default)]
pub struct PaginationSettings {
    pub max_pages: Option<usize>,
}

pub struct ChartSettings {
    pub window_title: &'static str,
    pub width: f32,
    pub height: f32,
    pub attribution: &'static str,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            window_title: "Distribution of Players by Rank",
            width: 1000.0,
            height: 600.0,
            attribution: "By Jayson B.",
        }
    }
}

#[derive(Default)]
pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub pagination: PaginationSettings,
    pub chart: ChartSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply command-line overrides on top of the defaults
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        self.scraper.leaderboard_url = cli.url.clone();
        if cli.timeout.is_some() {
            self.scraper.timeout_secs = cli.timeout;
        }
        if cli.max_pages.is_some() {
            self.pagination.max_pages = cli.max_pages;
        }
        self
    }
}
