use serde::Serialize;

use super::Issue;

/// What an analyzer invocation produced when it did not fail outright.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "issues", rename_all = "snake_case")]
pub enum InvocationResult {
    /// Findings in the order the analyzer emitted them
    Issues(Vec<Issue>),
    /// The analyzer reported that it could not analyze the file
    AnalysisFailed,
}

impl InvocationResult {
    pub fn issues(&self) -> Option<&[Issue]> {
        match self {
            InvocationResult::Issues(issues) => Some(issues),
            InvocationResult::AnalysisFailed => None,
        }
    }

    pub fn is_analysis_failed(&self) -> bool {
        matches!(self, InvocationResult::AnalysisFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_status_tag() {
        let result = InvocationResult::Issues(vec![Issue::new(json!({"line": 3}))]);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"status": "issues", "issues": [{"line": 3}]})
        );

        assert_eq!(
            serde_json::to_value(InvocationResult::AnalysisFailed).unwrap(),
            json!({"status": "analysis_failed"})
        );
    }
}
