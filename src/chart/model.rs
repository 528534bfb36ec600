use anyhow::{bail, Result};

use crate::tiers::{Tier, TierCounts};

pub const CHART_TITLE: &str = "Distribution of Players by Rank";
pub const X_AXIS_TITLE: &str = "Rank";
pub const Y_AXIS_TITLE: &str = "Number of Players";

/// One bar of the tier chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub tier: Tier,
    /// X-axis tick text: tier name over its score range
    pub label: String,
    pub count: usize,
    pub percentage: f64,
    pub color: (u8, u8, u8),
}

impl Bar {
    fn new(tier: Tier, count: usize, total: usize) -> Self {
        Self {
            tier,
            label: format!("{}\n{}", tier, tier.range_label()),
            count,
            percentage: count as f64 / total as f64 * 100.0,
            color: tier.color(),
        }
    }

    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Everything the window needs to draw, with percentages precomputed
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub title: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub attribution: String,
    pub bars: Vec<Bar>,
    pub total_players: usize,
}

impl ChartModel {
    /// Fails when `total_players` is zero, since every percentage divides by it
    pub fn new(counts: &TierCounts, total_players: usize, attribution: &str) -> Result<Self> {
        if total_players == 0 {
            bail!("Cannot chart a distribution of zero players");
        }

        let bars = counts
            .iter()
            .map(|(tier, count)| Bar::new(tier, count, total_players))
            .collect();

        Ok(Self {
            title: CHART_TITLE,
            x_axis_title: X_AXIS_TITLE,
            y_axis_title: Y_AXIS_TITLE,
            attribution: attribution.to_string(),
            bars,
            total_players,
        })
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bars.iter().map(|bar| bar.count).collect()
    }
}
