pub mod api;
pub mod chart;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod services;
pub mod tiers;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::AppConfig;
use crate::services::DistributionService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_run(cli: &Cli) -> Result<()> {
    let config = AppConfig::new().with_overrides(cli);
    let mut service = DistributionService::new(config)?;

    // The window must own the main thread, so the runtime is gone before it opens
    let players = {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(service.collect_players())?
    };

    service.present(&players)
}
