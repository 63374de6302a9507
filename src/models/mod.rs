pub mod config;

pub use config::{AppConfig, CoverageConfig, DEFAULT_CONFIG_FILE};
