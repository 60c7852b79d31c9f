//! Process runners: the capability the bridge uses to execute analyzers

pub mod tokio_runner;
pub mod traits;

// Re-export main types
pub use tokio_runner::TokioProcessRunner;
pub use traits::ProcessRunner;
