use std::fmt;

use serde::Serialize;

use crate::utils::serde_helpers::deserialize_lowercase_variants;

/// How the analyzed file reaches the analyzer.
///
/// The path is always passed as a positional argument. With `Stdin` the file
/// content is additionally written to the child's stdin, which older analyzer
/// builds read instead of opening the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    #[default]
    Path,
    Stdin,
}

impl Transport {
    /// Spelling used in `.techlint.json`
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Path => "path",
            Transport::Stdin => "stdin",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

deserialize_lowercase_variants!(
    Transport,
    Path => "path",
    Stdin => "stdin"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_deserialize_any_case() {
        let transport: Transport = serde_json::from_str(r#""PATH""#).unwrap();
        assert_eq!(transport, Transport::Path);

        let transport: Transport = serde_json::from_str(r#""Stdin""#).unwrap();
        assert_eq!(transport, Transport::Stdin);

        let err = serde_json::from_str::<Transport>(r#""pipe""#).unwrap_err();
        assert!(err.to_string().contains("expected one of: path, stdin"));
    }

    #[test]
    fn test_transport_serializes_lowercase() {
        for transport in [Transport::Path, Transport::Stdin] {
            assert_eq!(
                serde_json::to_string(&transport).unwrap(),
                format!("\"{transport}\"")
            );
        }
    }
}
