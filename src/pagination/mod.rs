mod config;
mod iterator;
mod source;
mod walker;

pub use config::PaginationConfig;
pub use iterator::PageIterator;
pub use source::PageSource;
pub use walker::collect_all_entries;
