pub mod models;

pub use models::{LeaderboardPage, PlayerEntry};
