//! Business response envelope
//!
//! Write endpoints of the v2 API answer HTTP 200 even when the operation is
//! rejected. The outcome lives in the body:
//!
//! ```json
//! {
//!     "result": "SUCCESS",
//!     "errors": [{"code": "E001", "value": "..."}],
//!     "response": { ... }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Result value reported for accepted operations
pub const RESULT_SUCCESS: &str = "SUCCESS";

/// Single error entry of an envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.code.as_deref().unwrap_or("UNKNOWN"),
            self.value.as_deref().unwrap_or("")
        )
    }
}

/// Success/error envelope returned with HTTP 200
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default, deserialize_with = "nullable_errors")]
    pub errors: Vec<EnvelopeError>,
    #[serde(default)]
    pub response: Option<Value>,
}

fn nullable_errors<'de, D>(deserializer: D) -> Result<Vec<EnvelopeError>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<EnvelopeError>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Envelope {
    /// Read the envelope fields out of a raw JSON document
    pub fn from_value(raw: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(raw)
    }

    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some(RESULT_SUCCESS)
    }

    /// Errors joined as `code: value, code: value`
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Outcome of interpreting an envelope
#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeOutcome {
    /// Accepted; holds `response`, or the whole document when it has none
    Success(Value),
    /// Rejected by a business rule
    Failure {
        result: Option<String>,
        errors: Vec<EnvelopeError>,
    },
}

/// Interpret a raw JSON document as an envelope
pub fn interpret(raw: Value) -> Result<EnvelopeOutcome, serde_json::Error> {
    let envelope = Envelope::from_value(&raw)?;
    if envelope.is_success() {
        Ok(EnvelopeOutcome::Success(envelope.response.unwrap_or(raw)))
    } else {
        Ok(EnvelopeOutcome::Failure {
            result: envelope.result,
            errors: envelope.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_returns_response_field() {
        let raw = json!({"result": "SUCCESS", "response": {"id": "123", "name": "Test"}});
        assert_eq!(
            interpret(raw).unwrap(),
            EnvelopeOutcome::Success(json!({"id": "123", "name": "Test"}))
        );
    }

    #[test]
    fn test_success_without_response_returns_whole_body() {
        let raw = json!({"result": "SUCCESS"});
        assert_eq!(
            interpret(raw.clone()).unwrap(),
            EnvelopeOutcome::Success(raw)
        );
    }

    #[test]
    fn test_failure_keeps_errors() {
        let raw = json!({"result": "ERROR", "errors": [{"code": "E001", "value": "Test error"}]});
        match interpret(raw).unwrap() {
            EnvelopeOutcome::Failure { result, errors } => {
                assert_eq!(result.as_deref(), Some("ERROR"));
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].to_string(), "E001: Test error");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_result_is_failure() {
        let raw = json!({"errors": null});
        assert!(matches!(
            interpret(raw).unwrap(),
            EnvelopeOutcome::Failure { result: None, ref errors } if errors.is_empty()
        ));
    }

    #[test]
    fn test_error_summary_defaults() {
        let envelope = Envelope {
            result: Some("ERROR".into()),
            errors: vec![
                EnvelopeError { code: None, value: Some("bad price".into()) },
                EnvelopeError { code: Some("E2".into()), value: None },
            ],
            response: None,
        };
        assert_eq!(envelope.error_summary(), "UNKNOWN: bad price, E2: ");
    }
}
