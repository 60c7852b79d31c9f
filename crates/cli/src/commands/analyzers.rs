use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::config::load_config;

pub fn analyzers_command(config: Option<&Path>, cwd: Option<&Path>) -> Result<ExitCode> {
    let start = match cwd {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let config = load_config(config, &start)?;
    match config.source {
        Some(ref source) => println!("🔧 Config: {}", source.display()),
        None => println!("🔧 Config: built-in defaults"),
    }

    for analyzer in &config.analyzers {
        let extensions = analyzer
            .extensions
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(", ");

        println!("\n• {} ({})", analyzer.name, extensions);
        println!("   command: {}", analyzer.base_command().to_shell_command());
        if let Some(ref dir) = analyzer.working_dir {
            println!("   working dir: {}", dir.display());
        }
        println!("   transport: {}", analyzer.transport);
        if let Some(secs) = analyzer.timeout_secs {
            println!("   timeout: {secs}s");
        }
    }

    Ok(ExitCode::SUCCESS)
}
