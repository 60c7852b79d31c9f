use tracing::{debug, warn};

use super::decode::{DecodeOptions, decode_outcome};
use crate::{
    command::{AnalyzerCommand, Transport},
    config::AnalyzerConfig,
    error::Result,
    runners::{ProcessRunner, TokioProcessRunner},
    types::{InvocationRequest, InvocationResult},
};

/// Runs one analyzer process per request and turns its output into a result.
///
/// The bridge holds only immutable configuration, so concurrent calls to
/// [`ProcessBridge::invoke`] never share state beyond the runner.
#[derive(Debug, Clone)]
pub struct ProcessBridge<R = TokioProcessRunner> {
    analyzer: AnalyzerConfig,
    runner: R,
}

impl ProcessBridge<TokioProcessRunner> {
    pub fn new(analyzer: AnalyzerConfig) -> Self {
        Self::with_runner(analyzer, TokioProcessRunner::new())
    }
}

impl<R: ProcessRunner> ProcessBridge<R> {
    pub fn with_runner(analyzer: AnalyzerConfig, runner: R) -> Self {
        Self { analyzer, runner }
    }

    pub fn analyzer(&self) -> &AnalyzerConfig {
        &self.analyzer
    }

    /// Command line for `request`: the analyzer's fixed command followed by
    /// the target path and the correlation id. Does not touch the file.
    pub fn command_for(&self, request: &InvocationRequest) -> AnalyzerCommand {
        self.analyzer
            .base_command()
            .arg(request.target_path())
            .arg(request.correlation_id().as_str())
    }

    /// Run the analyzer for `request` and decode what it printed
    pub async fn invoke(&self, request: &InvocationRequest) -> Result<InvocationResult> {
        let mut command = self.command_for(request);
        if self.analyzer.transport == Transport::Stdin {
            let content = tokio::fs::read(request.target_path()).await?;
            debug!(
                "Streaming {} bytes of {} over stdin",
                content.len(),
                request.target_path().display()
            );
            command = command.with_stdin(content);
        }

        debug!(
            "Invoking analyzer '{}' via {} runner: {}",
            self.analyzer.name,
            self.runner.name(),
            command.to_shell_command()
        );

        let outcome = self.runner.run(&command).await?;
        let result = decode_outcome(
            outcome,
            DecodeOptions {
                skip_preamble: self.analyzer.skip_preamble,
            },
        )?;

        match &result {
            InvocationResult::Issues(issues) => debug!(
                "Analyzer '{}' reported {} issue(s) for {}",
                self.analyzer.name,
                issues.len(),
                request.target_path().display()
            ),
            InvocationResult::AnalysisFailed => warn!(
                "Analyzer '{}' could not analyze {}",
                self.analyzer.name,
                request.target_path().display()
            ),
        }

        Ok(result)
    }
}
