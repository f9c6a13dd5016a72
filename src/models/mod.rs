pub mod config;
pub mod options;
pub mod stats;

pub use config::{AppConfig, CardDefaults, ConfigError, UpstreamConfig};
pub use options::RenderOptions;
pub use stats::{
    Difficulty, DifficultyBucket, LeetCodeStats, ProblemStats, ProfileStats, SubmissionEntry,
};
