//! Shared fixtures for the workspace integration tests

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use techlint_core::AnalyzerConfig;

/// An analyzer for `.cs` files that runs `script` with `sh -c`.
///
/// Inside the script `$1` is the target path and `$2` the correlation id.
pub fn sh_analyzer(name: &str, script: &str) -> AnalyzerConfig {
    AnalyzerConfig::new(name, "sh")
        .with_extensions(["cs"])
        .with_args(["-c", script, name])
}

/// Write a source file to analyze and return its path
pub fn write_target(dir: &Path, file_name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    Ok(path)
}
