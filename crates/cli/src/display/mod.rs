pub mod formatter;

pub use formatter::{format_issue, format_report};
