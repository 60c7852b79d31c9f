//! techlint-core - Bridge between techlint and external static-analysis programs
//!
//! This crate provides functionality to:
//! - Route a source file to the analyzer configured for its extension
//! - Launch the analyzer as a child process with the file path and a correlation id
//! - Drain the analyzer's output and decode it into issues, a soft failure, or an error
pub mod bridge;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod runners;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use bridge::{ANALYSIS_FAILED_SENTINEL, ProcessBridge};
pub use command::{AnalyzerCommand, Transport};
pub use config::{AnalyzerConfig, Config};
pub use dispatcher::Dispatcher;
pub use runners::{ProcessRunner, TokioProcessRunner};
