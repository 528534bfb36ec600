use anyhow::Result;
use log::{debug, info};

use super::{PageIterator, PageSource, PaginationConfig};
use crate::domain::PlayerEntry;

/// Follow `nextRequestURL` links from `start_url`, collecting every entry.
///
/// A page with no entries ends the walk even if it links onward. Otherwise the
/// walk ends at the first page without a next link, or at `config.max_pages`.
/// Any fetch or parse error aborts it.
pub async fn collect_all_entries<S: PageSource>(
    source: &mut S,
    start_url: &str,
    config: PaginationConfig,
) -> Result<Vec<PlayerEntry>> {
    let mut pages = PageIterator::new(start_url, config);
    let mut all_entries = Vec::new();

    loop {
        if pages.has_reached_max() {
            info!("  → Page limit reached after {} pages", pages.current_page() - 1);
            break;
        }

        let page = source.fetch_page(pages.current_url()).await?;

        if page.is_empty() {
            debug!("No entries on page {}, stopping", pages.current_page());
            break;
        }

        debug!("  → Page {}: {} entries", pages.current_page(), page.entries.len());
        all_entries.extend(page.entries);

        match page.next_url {
            Some(next_url) => pages.advance(next_url),
            None => break,
        }
    }

    info!("  → Collected {} entries total", all_entries.len());
    Ok(all_entries)
}
