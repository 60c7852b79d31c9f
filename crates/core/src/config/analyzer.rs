use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    command::{AnalyzerCommand, Transport},
    utils::file_type::normalize_extension,
};

/// One external analyzer and the file extensions routed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnalyzerConfig {
    pub name: String,
    pub extensions: Vec<String>,
    /// Program to launch
    pub command: String,
    /// Fixed arguments placed before the target path and correlation id
    #[serde(default)]
    pub args: Vec<String>,
    /// Working directory of the child; relative paths resolve against the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
    #[serde(default)]
    pub transport: Transport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub skip_preamble: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl AnalyzerConfig {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extensions: Vec::new(),
            command: command.into(),
            args: Vec::new(),
            working_dir: None,
            transport: Transport::default(),
            timeout_secs: None,
            skip_preamble: false,
            env: BTreeMap::new(),
        }
    }

    /// The C# analyzer, run from source with `dotnet run`
    pub fn csharp() -> Self {
        Self::new("csharp", "dotnet")
            .with_extensions(["cs"])
            .with_args(["run", "--project", "CSharpLinter"])
            .with_skip_preamble(true)
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_skip_preamble(mut self, skip: bool) -> Self {
        self.skip_preamble = skip;
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Whether files with this extension are routed here (case-insensitive, dot optional)
    pub fn handles(&self, extension: &str) -> bool {
        let wanted = normalize_extension(extension);
        self.extensions
            .iter()
            .any(|ext| normalize_extension(ext) == wanted)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Program, fixed arguments, working directory, environment and timeout.
    /// Request-specific arguments are appended by the bridge.
    pub fn base_command(&self) -> AnalyzerCommand {
        let mut command = AnalyzerCommand::new(&self.command).args(&self.args);
        if let Some(ref dir) = self.working_dir {
            command = command.with_working_dir(dir);
        }
        for (key, value) in &self.env {
            command = command.with_env(key, value);
        }
        if let Some(timeout) = self.timeout() {
            command = command.with_timeout(timeout);
        }
        command
    }

    /// Anchor a relative working directory at `base`
    pub(crate) fn resolve_working_dir(&mut self, base: &Path) {
        if let Some(ref dir) = self.working_dir {
            if dir.is_relative() {
                self.working_dir = Some(base.join(dir));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_csharp_defaults() {
        let analyzer = AnalyzerConfig::csharp();
        assert_eq!(analyzer.name, "csharp");
        assert_eq!(analyzer.command, "dotnet");
        assert_eq!(analyzer.args, vec!["run", "--project", "CSharpLinter"]);
        assert_eq!(analyzer.transport, Transport::Path);
        assert!(analyzer.skip_preamble);
        assert!(analyzer.handles("cs"));
    }

    #[test]
    fn test_handles_normalizes_extension() {
        let analyzer = AnalyzerConfig::new("web", "eslint").with_extensions([".TS", "tsx"]);
        assert!(analyzer.handles("ts"));
        assert!(analyzer.handles(".ts"));
        assert!(analyzer.handles("TSX"));
        assert!(!analyzer.handles("js"));
    }

    #[test]
    fn test_base_command() {
        let analyzer = AnalyzerConfig::csharp()
            .with_working_dir("/srv/linter")
            .with_env("DOTNET_NOLOGO", "1")
            .with_timeout_secs(30);
        let command = analyzer.base_command();

        assert_eq!(command.program, "dotnet");
        assert_eq!(
            command.args,
            vec![
                OsString::from("run"),
                OsString::from("--project"),
                OsString::from("CSharpLinter")
            ]
        );
        assert_eq!(command.working_dir, Some(PathBuf::from("/srv/linter")));
        assert_eq!(command.env, vec![("DOTNET_NOLOGO".to_string(), "1".to_string())]);
        assert_eq!(command.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_deserialize_minimal() {
        let analyzer: AnalyzerConfig = serde_json::from_str(
            r#"{"name": "py", "extensions": ["py"], "command": "python3"}"#,
        )
        .unwrap();

        assert_eq!(analyzer.args, Vec::<String>::new());
        assert_eq!(analyzer.transport, Transport::Path);
        assert_eq!(analyzer.timeout(), None);
        assert!(!analyzer.skip_preamble);
    }

    #[test]
    fn test_resolve_working_dir() {
        let mut analyzer = AnalyzerConfig::csharp().with_working_dir("linter");
        analyzer.resolve_working_dir(Path::new("/repo"));
        assert_eq!(analyzer.working_dir, Some(PathBuf::from("/repo/linter")));

        let mut analyzer = AnalyzerConfig::csharp().with_working_dir("/abs/linter");
        analyzer.resolve_working_dir(Path::new("/repo"));
        assert_eq!(analyzer.working_dir, Some(PathBuf::from("/abs/linter")));
    }
}
