pub mod analyzers;
pub mod init;
pub mod lint;

pub use analyzers::analyzers_command;
pub use init::init_command;
pub use lint::{LintOptions, lint_command};
