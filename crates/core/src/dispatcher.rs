//! Routing from a file extension to the analyzer that handles it

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::{
    bridge::ProcessBridge,
    config::{AnalyzerConfig, Config},
    error::{Error, Result},
    runners::{ProcessRunner, TokioProcessRunner},
    types::{InvocationRequest, InvocationResult},
};

/// Picks the configured analyzer for a file and invokes it through a [`ProcessBridge`].
pub struct Dispatcher<R = TokioProcessRunner> {
    config: Config,
    runner: Arc<R>,
}

impl Dispatcher<TokioProcessRunner> {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_runner(config, TokioProcessRunner::new())
    }
}

impl<R: ProcessRunner> Dispatcher<R> {
    /// Create a dispatcher; the configuration is validated up front
    pub fn with_runner(config: Config, runner: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            runner: Arc::new(runner),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn analyzer_for(&self, path: &Path) -> Result<&AnalyzerConfig> {
        self.config
            .analyzer_for(path)
            .ok_or_else(|| Error::UnsupportedFile(path.to_path_buf()))
    }

    pub fn bridge_for(&self, path: &Path) -> Result<ProcessBridge<Arc<R>>> {
        let analyzer = self.analyzer_for(path)?;
        debug!("Routing {} to analyzer '{}'", path.display(), analyzer.name);
        Ok(ProcessBridge::with_runner(
            analyzer.clone(),
            Arc::clone(&self.runner),
        ))
    }

    /// Route `request` by its file extension and invoke the matching analyzer
    pub async fn dispatch(&self, request: &InvocationRequest) -> Result<InvocationResult> {
        self.bridge_for(request.target_path())?
            .invoke(request)
            .await
    }
}
