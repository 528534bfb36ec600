use std::collections::HashMap;

use anyhow::Result;
use leaderboard_tiers::api::parsers::parse_page;
use leaderboard_tiers::config::ChartSettings;
use leaderboard_tiers::domain::{LeaderboardPage, PlayerEntry};
use leaderboard_tiers::pagination::{collect_all_entries, PageSource, PaginationConfig};
use leaderboard_tiers::services::distribution::build_chart;
use leaderboard_tiers::tiers::Tier;

/// Serves raw XML bodies by URL, parsing them like the live client does
struct XmlPages {
    bodies: HashMap<String, String>,
    fetched: Vec<String>,
}

impl XmlPages {
    fn new(bodies: &[(&str, String)]) -> Self {
        Self {
            bodies: bodies
                .iter()
                .map(|(url, body)| (url.to_string(), body.clone()))
                .collect(),
            fetched: Vec::new(),
        }
    }
}

impl PageSource for XmlPages {
    async fn fetch_page(&mut self, url: &str) -> Result<LeaderboardPage> {
        self.fetched.push(url.to_string());
        let body = self
            .bodies
            .get(url)
            .ok_or_else(|| anyhow::anyhow!("HTTP error: 404 Not Found ({url})"))?;
        parse_page(body)
    }
}

fn steam_page(entries: &[(i64, i64)], next: Option<&str>) -> String {
    let next = next
        .map(|url| format!("<nextRequestURL><![CDATA[{url}]]></nextRequestURL>"))
        .unwrap_or_default();
    let rows: String = entries
        .iter()
        .map(|(rank, score)| {
            format!(
                "<entry><steamid><![CDATA[7656]]></steamid><score>{score}</score><rank>{rank}</rank></entry>"
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<response><appID>2217000</appID>{next}<resultCount>{}</resultCount><entries>{rows}</entries></response>"#,
        entries.len()
    )
}

#[tokio::test]
async fn walks_xml_pages_until_an_empty_page() {
    let mut source = XmlPages::new(&[
        (
            "https://lb/?xml=1",
            steam_page(&[(1, 1600), (2, 600)], Some("https://lb/?xml=1&start=3")),
        ),
        (
            "https://lb/?xml=1&start=3",
            steam_page(&[(3, 450)], Some("https://lb/?xml=1&start=4")),
        ),
        (
            "https://lb/?xml=1&start=4",
            steam_page(&[], Some("https://lb/?xml=1&start=5")),
        ),
    ]);

    let players = collect_all_entries(&mut source, "https://lb/?xml=1", PaginationConfig::new())
        .await
        .unwrap();

    assert_eq!(
        players,
        vec![
            PlayerEntry::new(1, 1600),
            PlayerEntry::new(2, 600),
            PlayerEntry::new(3, 450)
        ]
    );
    assert_eq!(source.fetched.len(), 3);

    let model = build_chart(&players, &ChartSettings::default()).unwrap().unwrap();
    let shown: Vec<(Tier, String)> = model
        .bars
        .iter()
        .filter(|bar| bar.count > 0)
        .map(|bar| (bar.tier, bar.percentage_label()))
        .collect();

    assert_eq!(
        shown,
        vec![
            (Tier::Stone, "33.3%".to_string()),
            (Tier::Bronze, "33.3%".to_string()),
            (Tier::Masters, "33.3%".to_string()),
        ]
    );
}

#[tokio::test]
async fn empty_leaderboard_never_reaches_the_chart() {
    let mut source = XmlPages::new(&[("https://lb/?xml=1", steam_page(&[], None))]);

    let players = collect_all_entries(&mut source, "https://lb/?xml=1", PaginationConfig::new())
        .await
        .unwrap();

    assert!(players.is_empty());
    assert!(build_chart(&players, &ChartSettings::default()).unwrap().is_none());
}

#[tokio::test]
async fn malformed_page_aborts_the_walk() {
    let mut source = XmlPages::new(&[
        ("https://lb/?xml=1", steam_page(&[(1, 900)], Some("https://lb/?xml=1&start=2"))),
        ("https://lb/?xml=1&start=2", "<response><entries><entry>".to_string()),
    ]);

    let result =
        collect_all_entries(&mut source, "https://lb/?xml=1", PaginationConfig::new()).await;

    assert!(result.is_err());
    assert_eq!(source.fetched.len(), 2);
}
