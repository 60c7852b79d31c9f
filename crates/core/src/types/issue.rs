use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One finding reported by an analyzer.
///
/// The record is opaque: techlint keeps whatever JSON value the analyzer
/// emitted and re-encodes it unchanged. The accessors below only read the
/// fields the CLI displays, accepting both `snake_case` and `PascalCase`
/// spellings since analyzers disagree on the convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Issue(Value);

impl Issue {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn severity(&self) -> Option<&str> {
        self.field(&["severity", "Severity"]).and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.field(&["message", "Message"]).and_then(Value::as_str)
    }

    pub fn line(&self) -> Option<u64> {
        self.field(&["line", "Line"]).and_then(Value::as_u64)
    }

    pub fn column(&self) -> Option<u64> {
        self.field(&["column", "Column"]).and_then(Value::as_u64)
    }

    pub fn end_line(&self) -> Option<u64> {
        self.field(&["end_line", "EndLine"]).and_then(Value::as_u64)
    }

    pub fn end_column(&self) -> Option<u64> {
        self.field(&["end_column", "EndColumn"]).and_then(Value::as_u64)
    }

    fn field(&self, keys: &[&str]) -> Option<&Value> {
        let object = self.0.as_object()?;
        keys.iter().find_map(|key| object.get(*key))
    }
}

impl From<Value> for Issue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
