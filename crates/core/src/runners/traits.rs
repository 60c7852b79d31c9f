//! Seam between the process bridge and the operating system

use std::sync::Arc;

use async_trait::async_trait;

use crate::{command::AnalyzerCommand, error::Result, types::ProcessOutcome};

/// Runs one child process to completion and hands back everything it produced.
///
/// Implementations must not return before the child has exited, and must
/// capture stdout and stderr in full.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Launch `command`, feed its stdin, wait for exit and collect its output
    async fn run(&self, command: &AnalyzerCommand) -> Result<ProcessOutcome>;

    /// Get the name of this runner
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<R: ProcessRunner + ?Sized> ProcessRunner for Arc<R> {
    async fn run(&self, command: &AnalyzerCommand) -> Result<ProcessOutcome> {
        (**self).run(command).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
