use anyhow::{Context, Result};
use log::debug;
use roxmltree::{Document, Node};

use crate::domain::{LeaderboardPage, PlayerEntry};
use crate::errors::parse_context;

const ENTRY_TAG: &str = "entry";
const RANK_TAG: &str = "rank";
const SCORE_TAG: &str = "score";
const NEXT_URL_TAG: &str = "nextRequestURL";

/// Parse one leaderboard XML document into its entries and next-page link
pub fn parse_page(xml: &str) -> Result<LeaderboardPage> {
    let doc = Document::parse(xml).with_context(|| parse_context("leaderboard XML"))?;

    let entries = extract_entries(&doc)?;
    let next_url = extract_next_url(&doc);

    Ok(LeaderboardPage::new(entries, next_url))
}

fn extract_entries(doc: &Document) -> Result<Vec<PlayerEntry>> {
    let mut entries = Vec::new();

    for entry in doc.descendants().filter(|n| n.has_tag_name(ENTRY_TAG)) {
        let rank = find_descendant(entry, RANK_TAG);
        let score = find_descendant(entry, SCORE_TAG);

        match (rank, score) {
            (Some(rank), Some(score)) => {
                entries.push(PlayerEntry::new(
                    parse_integer(rank, "rank")?,
                    parse_integer(score, "score")?,
                ));
            }
            _ => debug!(
                "Skipping entry without rank/score (rank present: {}, score present: {})",
                rank.is_some(),
                score.is_some()
            ),
        }
    }

    Ok(entries)
}

fn extract_next_url(doc: &Document) -> Option<String> {
    doc.descendants()
        .find(|n| n.has_tag_name(NEXT_URL_TAG))
        .map(text_content)
        .filter(|url| !url.is_empty())
}

// --- Node helpers ---

/// First element with `tag` below `node`, mirroring a CSS descendant select
fn find_descendant<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants().skip(1).find(|n| n.has_tag_name(tag))
}

/// Concatenated, trimmed text of every text/CDATA node below `node`
fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

fn parse_integer(node: Node, field: &str) -> Result<i64> {
    let text = text_content(node);
    text.parse::<i64>()
        .with_context(|| format!("{}: {:?}", parse_context(field), text))
}
