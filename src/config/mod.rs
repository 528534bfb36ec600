pub mod settings;

pub use settings::{AppConfig, ChartSettings, PaginationSettings, ScraperSettings};
