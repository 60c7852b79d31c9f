//! Child process command lines

pub mod analyzer_command;
pub mod transport;

// Re-export commonly used types
pub use analyzer_command::AnalyzerCommand;
pub use transport::Transport;
