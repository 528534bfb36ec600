use clap::Parser;

use crate::config::settings::DEFAULT_LEADERBOARD_URL;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about = "Steam leaderboard tier distribution chart")]
pub struct Cli {
    /// Leaderboard XML feed to start from
    #[arg(short, long, default_value = DEFAULT_LEADERBOARD_URL)]
    pub url: String,

    /// Stop after this many pages (optional, defaults to following every page)
    #[arg(short, long)]
    pub max_pages: Option<usize>,

    /// Per-request timeout in seconds (optional, defaults to none)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}
