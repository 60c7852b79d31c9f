use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{LintOptions, analyzers_command, init_command, lint_command};

#[derive(Parser, Debug)]
#[command(name = "techlint")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How lint results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per issue
    #[default]
    Text,
    /// The issue array as pretty JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the analyzer configured for a file and report its findings
    #[command(visible_alias = "l")]
    Lint {
        /// Path to the file to analyze
        file: PathBuf,

        /// Opaque id passed through to the analyzer (e.g. a user id)
        correlation_id: String,

        /// Config file to use instead of searching upward from the file
        #[arg(short, long, env = "TECHLINT_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the issues as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Kill the analyzer after this many seconds
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Print the analyzer command line without running it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// List configured analyzers
    #[command(visible_alias = "a")]
    Analyzers {
        /// Config file to use instead of searching upward from the working directory
        #[arg(short, long, env = "TECHLINT_CONFIG")]
        config: Option<PathBuf>,

        /// Directory to start the config search from (defaults to current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,
    },
    /// Write a default .techlint.json
    Init {
        /// Directory to write the config into (defaults to current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub async fn execute(self) -> Result<ExitCode> {
        match self {
            Commands::Lint {
                file,
                correlation_id,
                config,
                format,
                output,
                timeout,
                dry_run,
            } => {
                lint_command(LintOptions {
                    file,
                    correlation_id,
                    config,
                    format,
                    output,
                    timeout,
                    dry_run,
                })
                .await
            }
            Commands::Analyzers { config, cwd } => {
                analyzers_command(config.as_deref(), cwd.as_deref())
            }
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lint() {
        let cli = Cli::try_parse_from([
            "techlint", "lint", "Foo.cs", "42", "--format", "json", "-o", "out.json", "-t", "30",
        ])
        .unwrap();

        match cli.command {
            Commands::Lint {
                file,
                correlation_id,
                format,
                output,
                timeout,
                dry_run,
                ..
            } => {
                assert_eq!(file, PathBuf::from("Foo.cs"));
                assert_eq!(correlation_id, "42");
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert_eq!(timeout, Some(30));
                assert!(!dry_run);
            }
            other => panic!("expected lint, got {other:?}"),
        }
    }

    #[test]
    fn test_lint_requires_correlation_id() {
        assert!(Cli::try_parse_from(["techlint", "lint", "Foo.cs"]).is_err());
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::try_parse_from(["techlint", "l", "Foo.cs", "1", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Commands::Lint { dry_run: true, .. }));

        let cli = Cli::try_parse_from(["techlint", "a"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyzers { .. }));
    }
}
