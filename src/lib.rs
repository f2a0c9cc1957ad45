// Library interface for ftracker modules
// The binary and the integration tests both build on this crate

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod report;

// Re-export commonly used types for convenience
pub use error::{Result, TrackerError};
pub use export::{OutputFormat, ReportRecord};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use metrics::{
    distance, mean_speed, running_spent_calories, swimming_distance, swimming_mean_speed,
    swimming_spent_calories, walking_spent_calories,
};
pub use models::*;
pub use report::{show_training_info, UNKNOWN_TRAINING_TYPE};
