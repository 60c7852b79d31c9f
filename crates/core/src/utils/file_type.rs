use std::path::Path;

/// Lowercase an extension and strip its leading dot
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}

/// Normalized extension of `path`, if it has one
pub fn file_extension(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    tracing::trace!("Extension of {:?}: {}", path, extension);
    Some(normalize_extension(extension))
}
