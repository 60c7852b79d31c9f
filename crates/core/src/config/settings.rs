use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AnalyzerConfig;
use crate::{
    error::{Error, Result},
    utils::file_type::{file_extension, normalize_extension},
};

/// Config file names, in lookup order within each directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".techlint.json", "techlint.json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub analyzers: Vec<AnalyzerConfig>,

    // Where this config was loaded from (internal, not exposed in JSON)
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analyzers: vec![AnalyzerConfig::csharp()],
            source: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;

        if let Some(base) = path.parent() {
            for analyzer in &mut config.analyzers {
                analyzer.resolve_working_dir(base);
            }
        }
        config.source = Some(path.to_path_buf());
        config.validate()?;

        debug!(
            "Loaded {} analyzer(s) from {}",
            config.analyzers.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents + "\n")?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config above `start_path`, or the built-in defaults
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!(
                    "No config file found above {}, using defaults",
                    start_path.display()
                );
                Ok(Self::default())
            }
        }
    }

    /// Find the analyzer that claims the extension of `path`
    pub fn analyzer_for(&self, path: &Path) -> Option<&AnalyzerConfig> {
        let extension = file_extension(path)?;
        self.analyzers
            .iter()
            .find(|analyzer| analyzer.handles(&extension))
    }

    /// Check that every analyzer is usable and that no extension is claimed twice
    pub fn validate(&self) -> Result<()> {
        if self.analyzers.is_empty() {
            return Err(Error::ConfigError("no analyzers configured".to_string()));
        }

        let mut claimed: HashMap<String, &str> = HashMap::new();
        for analyzer in &self.analyzers {
            if analyzer.name.trim().is_empty() {
                return Err(Error::ConfigError("analyzer name is empty".to_string()));
            }
            if analyzer.command.trim().is_empty() {
                return Err(Error::ConfigError(format!(
                    "analyzer '{}' has an empty command",
                    analyzer.name
                )));
            }
            if analyzer.extensions.is_empty() {
                return Err(Error::ConfigError(format!(
                    "analyzer '{}' claims no file extensions",
                    analyzer.name
                )));
            }
            if analyzer.timeout_secs == Some(0) {
                return Err(Error::ConfigError(format!(
                    "analyzer '{}' has a zero timeout",
                    analyzer.name
                )));
            }

            for extension in &analyzer.extensions {
                let extension = normalize_extension(extension);
                if extension.is_empty() {
                    return Err(Error::ConfigError(format!(
                        "analyzer '{}' has an empty extension",
                        analyzer.name
                    )));
                }
                if let Some(previous) = claimed.insert(extension.clone(), &analyzer.name) {
                    return Err(Error::ConfigError(format!(
                        "extension '.{extension}' is claimed by both '{previous}' and '{}'",
                        analyzer.name
                    )));
                }
            }
        }

        Ok(())
    }
}
