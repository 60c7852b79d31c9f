use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use techlint_core::{Dispatcher, InvocationRequest, InvocationResult, Issue};
use tracing::{debug, info};

use crate::{cli::OutputFormat, config::load_config, display::format_report};

/// Exit code reported when the analyzer ran but could not analyze the file
pub const ANALYSIS_FAILED_EXIT_CODE: u8 = 2;

#[derive(Debug, Clone)]
pub struct LintOptions {
    pub file: PathBuf,
    pub correlation_id: String,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub timeout: Option<u64>,
    pub dry_run: bool,
}

pub async fn lint_command(options: LintOptions) -> Result<ExitCode> {
    let target = std::path::absolute(&options.file)
        .with_context(|| format!("Failed to resolve {}", options.file.display()))?;
    if !target.is_file() {
        bail!("File not found: {}", options.file.display());
    }

    let start = target.parent().unwrap_or(Path::new("."));
    let mut config = load_config(options.config.as_deref(), start)?;
    if let Some(secs) = options.timeout {
        for analyzer in &mut config.analyzers {
            analyzer.timeout_secs = Some(secs);
        }
    }

    let dispatcher = Dispatcher::new(config)?;
    let request = InvocationRequest::new(&target, options.correlation_id.as_str())?;

    if options.dry_run {
        let bridge = dispatcher.bridge_for(&target)?;
        let command = bridge.command_for(&request);
        println!("{}", command.to_shell_command());
        if let Some(ref dir) = command.working_dir {
            println!("Working directory: {}", dir.display());
        }
        if !command.env.is_empty() {
            println!("Environment variables:");
            for (key, value) in &command.env {
                println!("  {}={}", key, value);
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    debug!("Linting {} (correlation id {})", target.display(), request.correlation_id());
    let result = dispatcher
        .dispatch(&request)
        .await
        .with_context(|| format!("Failed to lint {}", options.file.display()))?;

    let display_name = options.file.display().to_string();
    match result {
        InvocationResult::Issues(issues) => {
            match options.format {
                OutputFormat::Text => println!("{}", format_report(&display_name, &issues)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&issues)?),
            }

            if let Some(ref output) = options.output {
                write_issues(output, &issues)?;
                info!("Wrote {} issue(s) to {}", issues.len(), output.display());
            }

            Ok(ExitCode::SUCCESS)
        }
        InvocationResult::AnalysisFailed => {
            eprintln!("❌ {display_name}: the analyzer could not analyze this file");
            Ok(ExitCode::from(ANALYSIS_FAILED_EXIT_CODE))
        }
    }
}

/// Persist issues as a pretty-printed JSON array
pub fn write_issues(path: &Path, issues: &[Issue]) -> Result<()> {
    let json = serde_json::to_string_pretty(issues)?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write issues to {}", path.display()))
}
