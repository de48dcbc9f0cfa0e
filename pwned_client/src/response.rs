//! Response envelope parsing and outcome classification.
//!
//! The server wraps every answer in `{"result": ..., "error": ...}`. A body
//! that does not parse, or parses to a falsy value, is turned into a locally
//! synthesized `invalid_json_structure_returned` error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Error keys the client knows about.
pub mod keys {
    /// Client-side: the body was not a usable JSON envelope
    pub const INVALID_JSON_STRUCTURE_RETURNED: &str = "invalid_json_structure_returned";
    /// Server-side: unknown public key
    pub const INVALID_PUBLIC_KEY_PROVIDED: &str = "invalid_public_key_provided";
    /// Server-side: signature did not match the canonical string
    pub const REQUEST_SIGNATURE_IS_INVALID: &str = "request_signature_is_invalid";
}

const INVALID_JSON_REASON: &str = "The content returned from the server wasn't valid JSON.";

/// An error as reported by the server (or synthesized locally).
///
/// Only `key` and `reason` are interpreted; any other fields the server
/// sends are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub reason: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiError {
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reason: reason.into(),
            extra: Map::new(),
        }
    }

    /// Error for a body that could not be used as an envelope
    pub fn invalid_json() -> Self {
        Self::new(keys::INVALID_JSON_STRUCTURE_RETURNED, INVALID_JSON_REASON)
    }

    /// Same key as [`ApiError::invalid_json`] with a more specific reason
    pub fn invalid_json_with_reason(reason: impl Into<String>) -> Self {
        Self::new(keys::INVALID_JSON_STRUCTURE_RETURNED, reason)
    }

    /// Build from whatever the server put in the `error` field.
    ///
    /// Non-string `key`/`reason` members stay in `extra`; a non-object error
    /// becomes `unknown_error` with the value rendered as the reason.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => {
                let key = take_string(&mut map, "key");
                let reason = take_string(&mut map, "reason");
                Self {
                    key: key.unwrap_or_default(),
                    reason: reason.unwrap_or_default(),
                    extra: map,
                }
            }
            Value::String(s) => Self::new("unknown_error", s),
            other => Self::new("unknown_error", other.to_string()),
        }
    }

    /// Whether this error carries the given key
    pub fn is(&self, key: &str) -> bool {
        self.key == key
    }
}

fn take_string(map: &mut Map<String, Value>, field: &str) -> Option<String> {
    match map.get(field) {
        Some(Value::String(_)) => match map.remove(field) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        _ => None,
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}: {}", self.key, self.reason)
        }
    }
}

/// Classified result of one response body
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Envelope without an error; carries `result` (JSON null if missing)
    Success(Value),
    /// Envelope with a truthy `error` field
    Failure(ApiError),
    /// Body did not parse or decoded to a falsy value
    Malformed(ApiError),
}

impl Outcome {
    /// The error recorded for this outcome, if any
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) | Outcome::Malformed(e) => Some(e),
        }
    }
}

/// Loose truthiness: `null`, `false`, zero, `""`, `"0"`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Parse and classify a raw response body.
pub fn classify(body: &str) -> Outcome {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Outcome::Malformed(ApiError::invalid_json()),
    };

    classify_value(value)
}

/// Classify an already-parsed envelope
pub fn classify_value(mut value: Value) -> Outcome {
    if !is_truthy(&value) {
        return Outcome::Malformed(ApiError::invalid_json());
    }

    if let Some(error) = value.get_mut("error") {
        if is_truthy(error) {
            return Outcome::Failure(ApiError::from_value(error.take()));
        }
    }

    let result = value
        .get_mut("result")
        .map(Value::take)
        .unwrap_or(Value::Null);
    Outcome::Success(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_returns_result() {
        assert_eq!(
            classify(r#"{"result":"pong","error":null}"#),
            Outcome::Success(json!("pong"))
        );
    }

    #[test]
    fn test_missing_result_is_null() {
        assert_eq!(classify(r#"{"error":null,"other":1}"#), Outcome::Success(Value::Null));
    }

    #[test]
    fn test_error_envelope() {
        let outcome = classify(
            r#"{"result":null,"error":{"key":"invalid_public_key_provided","reason":"Unknown key","field":"publicKey"}}"#,
        );
        let Outcome::Failure(err) = outcome else {
            panic!("expected failure, got {outcome:?}");
        };
        assert_eq!(err.key, keys::INVALID_PUBLIC_KEY_PROVIDED);
        assert_eq!(err.reason, "Unknown key");
        assert_eq!(err.extra.get("field"), Some(&json!("publicKey")));
    }

    #[test]
    fn test_falsy_error_field_is_success() {
        assert_eq!(
            classify(r#"{"result":[1],"error":false}"#),
            Outcome::Success(json!([1]))
        );
    }

    #[test]
    fn test_non_json_is_malformed() {
        let outcome = classify("<html>502 Bad Gateway</html>");
        assert!(matches!(
            outcome,
            Outcome::Malformed(ref e) if e.is(keys::INVALID_JSON_STRUCTURE_RETURNED)
        ));
    }

    #[test]
    fn test_falsy_bodies_are_malformed() {
        for body in ["null", "false", "0", "\"\"", "\"0\"", "[]", "{}", ""] {
            assert!(
                matches!(classify(body), Outcome::Malformed(_)),
                "body {body:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(0.5)));
        assert!(is_truthy(&json!("a")));
        assert!(is_truthy(&json!([0])));
        assert!(is_truthy(&json!({"a": null})));
        assert!(!is_truthy(&json!(0.0)));
    }

    #[test]
    fn test_error_round_trips_to_same_object() {
        let raw = json!({"key": "k", "reason": "r", "details": {"a": 1}});
        let err = ApiError::from_value(raw.clone());
        assert_eq!(serde_json::to_value(&err).unwrap(), raw);
    }

    #[test]
    fn test_non_object_error() {
        let err = ApiError::from_value(json!("something broke"));
        assert_eq!(err.key, "unknown_error");
        assert_eq!(err.reason, "something broke");
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::new("k", "why").to_string(), "k: why");
        assert_eq!(ApiError::new("k", "").to_string(), "k");
    }
}
