use super::config::PaginationConfig;

/// Tracks the link chain of a paginated feed
pub struct PageIterator {
    current_page: usize,
    current_url: String,
    config: PaginationConfig,
}

impl PageIterator {
    pub fn new(start_url: &str, config: PaginationConfig) -> Self {
        Self {
            current_page: 1,
            current_url: start_url.to_string(),
            config,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn has_reached_max(&self) -> bool {
        self.config.max_pages.is_some_and(|max| self.current_page > max)
    }

    pub fn advance(&mut self, next_url: String) {
        self.current_page += 1;
        self.current_url = next_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_never_reaches_max() {
        let mut pages = PageIterator::new("a", PaginationConfig::new());
        for i in 0..100 {
            pages.advance(format!("p{i}"));
        }
        assert!(!pages.has_reached_max());
        assert_eq!(pages.current_page(), 101);
        assert_eq!(pages.current_url(), "p99");
    }

    #[test]
    fn test_max_pages_limit() {
        let mut pages = PageIterator::new("a", PaginationConfig::new().with_max_pages(2));
        assert!(!pages.has_reached_max());
        pages.advance("b".into());
        assert!(!pages.has_reached_max());
        pages.advance("c".into());
        assert!(pages.has_reached_max());
    }
}
