use techlint_core::Issue;

/// Render one issue as `line:column severity message`, with `-` for missing fields.
/// A reported end position is appended as `line:column-end_line:end_column`.
pub fn format_issue(issue: &Issue) -> String {
    let mut position = format_position(issue.line(), issue.column());
    if issue.end_line().is_some() || issue.end_column().is_some() {
        position.push('-');
        position.push_str(&format_position(issue.end_line(), issue.end_column()));
    }

    let message = match issue.message() {
        Some(message) => message.to_string(),
        // Records without a message are shown as raw JSON so nothing is hidden
        None => issue.as_value().to_string(),
    };

    format!("{position} {} {message}", issue.severity().unwrap_or("-"))
}

fn format_position(line: Option<u64>, column: Option<u64>) -> String {
    match (line, column) {
        (Some(line), Some(column)) => format!("{line}:{column}"),
        (Some(line), None) => format!("{line}:-"),
        (None, Some(column)) => format!("-:{column}"),
        (None, None) => "-:-".to_string(),
    }
}

/// Human-readable report for the issues found in `target`
pub fn format_report(target: &str, issues: &[Issue]) -> String {
    if issues.is_empty() {
        return format!("✅ {target}: no issues");
    }

    let mut report = format!("📄 {target}: {} issue(s)", issues.len());
    for issue in issues {
        report.push_str("\n   ");
        report.push_str(&format_issue(issue));
    }
    report
}
