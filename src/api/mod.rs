mod leaderboard_client;
pub mod parsers;

pub use leaderboard_client::LeaderboardClient;
