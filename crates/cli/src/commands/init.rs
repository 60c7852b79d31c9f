use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use techlint_core::Config;
use tracing::info;

pub fn init_command(cwd: Option<&Path>, force: bool) -> Result<ExitCode> {
    let project_root = match cwd {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let config_path = project_root.join(".techlint.json");
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(ExitCode::FAILURE);
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Wrote default config to {}", config_path.display());
    println!("✅ Created config: {}", config_path.display());
    Ok(ExitCode::SUCCESS)
}
