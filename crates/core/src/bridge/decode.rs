//! Interpretation of a finished analyzer process

use tracing::debug;

use crate::{
    error::{Error, Result},
    types::{InvocationResult, Issue, ProcessOutcome},
};

/// Literal an analyzer prints (with exit code 0) when it could not analyze the file
pub const ANALYSIS_FAILED_SENTINEL: &str = "err";

/// Maximum number of characters of stdout quoted in a protocol violation
const STDOUT_SNIPPET_CHARS: usize = 256;

/// Knobs for decoding analyzer output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Discard anything printed before the first `[` (build chatter from `dotnet run`)
    pub skip_preamble: bool,
}

/// Turn a completed process into an invocation result.
///
/// The exit code is checked first, then the sentinel, then the JSON payload.
pub fn decode_outcome(outcome: ProcessOutcome, options: DecodeOptions) -> Result<InvocationResult> {
    if !outcome.success() {
        return Err(Error::ChildRuntimeFailure {
            exit_code: outcome.exit_code,
            stderr: outcome.stderr_text(),
        });
    }

    let stdout = String::from_utf8(outcome.stdout).map_err(|e| {
        let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
        protocol_violation(format!("stdout is not valid UTF-8: {e}"), &lossy)
    })?;

    let trimmed = stdout.trim();
    if trimmed == ANALYSIS_FAILED_SENTINEL {
        return Ok(InvocationResult::AnalysisFailed);
    }

    let payload = if options.skip_preamble {
        match trimmed.find('[') {
            Some(start) => {
                if start > 0 {
                    debug!("Skipping {} bytes of analyzer preamble", start);
                }
                &trimmed[start..]
            }
            None => {
                return Err(protocol_violation(
                    "no JSON array found in stdout".to_string(),
                    &stdout,
                ));
            }
        }
    } else {
        trimmed
    };

    let issues: Vec<Issue> = serde_json::from_str(payload).map_err(|e| {
        protocol_violation(format!("stdout is not a JSON array of issues: {e}"), &stdout)
    })?;

    Ok(InvocationResult::Issues(issues))
}

fn protocol_violation(reason: String, stdout: &str) -> Error {
    Error::ProtocolViolation {
        reason,
        stdout_snippet: stdout.chars().take(STDOUT_SNIPPET_CHARS).collect(),
    }
}
