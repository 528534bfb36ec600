pub mod buckets;
pub mod types;

pub use buckets::{bucketize, TierCounts};
pub use types::Tier;
