use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Opaque token handed to the analyzer alongside the file path.
///
/// techlint never interprets it; numeric ids are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CorrelationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CorrelationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

macro_rules! correlation_id_from_int {
    ($($int:ty),+) => {
        $(
            impl From<$int> for CorrelationId {
                fn from(value: $int) -> Self {
                    Self(value.to_string())
                }
            }
        )+
    };
}

correlation_id_from_int!(u32, u64, i32, i64, usize);

/// A single file to analyze, together with the id threaded through to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    target_path: PathBuf,
    correlation_id: CorrelationId,
}

impl InvocationRequest {
    /// Create a request, rejecting an empty path or an empty correlation id
    pub fn new(
        target_path: impl Into<PathBuf>,
        correlation_id: impl Into<CorrelationId>,
    ) -> Result<Self> {
        let target_path = target_path.into();
        let correlation_id = correlation_id.into();

        if target_path.as_os_str().is_empty() {
            return Err(Error::InvalidRequest("target path is empty".to_string()));
        }
        if correlation_id.as_str().is_empty() {
            return Err(Error::InvalidRequest("correlation id is empty".to_string()));
        }

        Ok(Self {
            target_path,
            correlation_id,
        })
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }
}
