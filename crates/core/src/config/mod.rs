//! Configuration management for techlint

mod analyzer;
mod settings;

// Re-export main types
pub use analyzer::AnalyzerConfig;
pub use settings::{CONFIG_FILE_NAMES, Config};
