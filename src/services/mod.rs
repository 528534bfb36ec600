pub mod distribution;

pub use distribution::DistributionService;
