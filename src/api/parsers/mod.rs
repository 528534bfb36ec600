pub mod leaderboard;

pub use leaderboard::parse_page;
