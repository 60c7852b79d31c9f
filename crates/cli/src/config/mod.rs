use std::path::Path;

use anyhow::{Context, Result};
use techlint_core::Config;
use tracing::debug;

/// Load `explicit` if given, otherwise the nearest config above `start`,
/// falling back to the built-in defaults.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<Config> {
    match explicit {
        Some(path) => {
            debug!("Using config from {}", path.display());
            Config::load_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => Config::discover(start).with_context(|| {
            format!("Failed to load config found above {}", start.display())
        }),
    }
}
