//! The uniform result envelope returned by every resource-client call.
//!
//! Operations resolve to [`Outcome<T>`] and never propagate transport
//! errors: network failures, non-success statuses, and unparseable bodies
//! all collapse into [`Outcome::Failure`] with a human-readable message and
//! an optional field-keyed error map for inline form display.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ApiError;

/// Field-keyed validation errors, as reported by the backend.
///
/// Keys are field names; values are one or more messages per field. The
/// backend sometimes reports a bare string per field, sometimes a list;
/// [`FieldErrors::from_value`] accepts both.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result envelope for a backend operation.
///
/// When serialized, carries an explicit boolean `success` field; `data` is
/// only ever present on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation succeeded.
    Success {
        /// Normalized backend payload.
        data: T,
        /// Informational message from the backend, if any.
        message: Option<String>,
    },
    /// The operation failed.
    Failure {
        /// Human-readable description of the failure.
        message: String,
        /// Per-field validation errors, empty when not applicable.
        errors: FieldErrors,
    },
}

impl<T> Outcome<T> {
    /// Build a success envelope without a message.
    pub const fn success(data: T) -> Self {
        Self::Success {
            data,
            message: None,
        }
    }

    /// Build a failure envelope with a message and no field errors.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
            errors: FieldErrors::new(),
        }
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The payload, if the operation succeeded.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Consume the envelope, yielding the payload on success.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// The backend message, present on failures and some successes.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } => message.as_deref(),
            Self::Failure { message, .. } => Some(message),
        }
    }

    /// Field-keyed errors; empty on success.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        static EMPTY: std::sync::OnceLock<FieldErrors> = std::sync::OnceLock::new();
        match self {
            Self::Failure { errors, .. } => errors,
            Self::Success { .. } => EMPTY.get_or_init(FieldErrors::new),
        }
    }

    /// Map the success payload, preserving messages and failures.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success { data, message } => Outcome::Success {
                data: f(data),
                message,
            },
            Self::Failure { message, errors } => Outcome::Failure { message, errors },
        }
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { data, message } => {
                let mut s = serializer.serialize_struct("Outcome", 3)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("data", data)?;
                if let Some(message) = message {
                    s.serialize_field("message", message)?;
                } else {
                    s.skip_field("message")?;
                }
                s.end()
            }
            Self::Failure { message, errors } => {
                let mut s = serializer.serialize_struct("Outcome", 3)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("message", message)?;
                s.serialize_field("errors", errors)?;
                s.end()
            }
        }
    }
}

/// Coerce a backend `errors` value into a [`FieldErrors`] map.
///
/// Accepts `{field: "msg"}` and `{field: ["msg", ...]}` shapes; anything
/// else yields an empty map.
#[must_use]
pub fn field_errors_from_value(value: &serde_json::Value) -> FieldErrors {
    let Some(object) = value.as_object() else {
        return FieldErrors::new();
    };

    object
        .iter()
        .map(|(field, messages)| {
            let messages = match messages {
                serde_json::Value::String(s) => vec![s.clone()],
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
                other => vec![other.to_string()],
            };
            (field.clone(), messages)
        })
        .collect()
}

/// Extract `{message, errors}` from a backend error body, falling back to
/// the operation-specific default message.
pub(crate) fn failure_from_body<T>(body: &serde_json::Value, fallback: &str) -> Outcome<T> {
    let message = body
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| fallback.to_owned(), str::to_owned);

    let errors = body
        .get("errors")
        .map(field_errors_from_value)
        .unwrap_or_default();

    Outcome::Failure { message, errors }
}

/// Convert an [`ApiError`] into a failure envelope.
pub(crate) fn failure_from_error<T>(error: &ApiError, fallback: &str) -> Outcome<T> {
    match error {
        ApiError::Status { status, body } => {
            tracing::debug!(status = %status, "backend returned error status");
            failure_from_body(body, fallback)
        }
        ApiError::Http(e) => {
            tracing::warn!(error = %e, "transport failure");
            Outcome::failure(fallback)
        }
        ApiError::Parse(e) => {
            tracing::warn!(error = %e, "unparseable backend response");
            Outcome::failure(fallback)
        }
    }
}

/// Decode a success body into the expected payload type.
///
/// A body that does not match the expected shape is reported as a failure
/// rather than a panic or error.
pub(crate) fn decode_success<T: DeserializeOwned>(
    body: serde_json::Value,
    fallback: &str,
) -> Outcome<T> {
    match serde_json::from_value(body) {
        Ok(data) => Outcome::success(data),
        Err(e) => {
            tracing::warn!(error = %e, "unexpected success payload shape");
            Outcome::failure(fallback)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_with_flag_and_data() {
        let outcome = Outcome::success(vec![1, 2, 3]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], serde_json::json!(true));
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_failure_serializes_without_data() {
        let outcome: Outcome<Vec<i32>> = Outcome::failure("nope");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], serde_json::json!(false));
        assert_eq!(json["message"], serde_json::json!("nope"));
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_field_errors_accepts_strings_and_lists() {
        let value = serde_json::json!({
            "email": ["already in use", "invalid"],
            "password": "too short"
        });
        let errors = field_errors_from_value(&value);
        assert_eq!(
            errors["email"],
            vec!["already in use".to_owned(), "invalid".to_owned()]
        );
        assert_eq!(errors["password"], vec!["too short".to_owned()]);
    }

    #[test]
    fn test_field_errors_non_object() {
        assert!(field_errors_from_value(&serde_json::json!("oops")).is_empty());
        assert!(field_errors_from_value(&serde_json::Value::Null).is_empty());
    }

    #[test]
    fn test_failure_from_body_prefers_backend_message() {
        let body = serde_json::json!({"message": "backend says no"});
        let outcome: Outcome<()> = failure_from_body(&body, "fallback");
        assert_eq!(outcome.message(), Some("backend says no"));
    }

    #[test]
    fn test_failure_from_body_falls_back() {
        let outcome: Outcome<()> = failure_from_body(&serde_json::json!({}), "fallback");
        assert_eq!(outcome.message(), Some("fallback"));
    }

    #[test]
    fn test_map_preserves_failure() {
        let outcome: Outcome<i32> = Outcome::failure("bad");
        let mapped = outcome.map(|n| n * 2);
        assert!(!mapped.is_success());
        assert_eq!(mapped.message(), Some("bad"));
    }

    #[test]
    fn test_map_transforms_data() {
        let outcome = Outcome::success(21).map(|n| n * 2);
        assert_eq!(outcome.into_data(), Some(42));
    }

    #[test]
    fn test_errors_empty_on_success() {
        let outcome = Outcome::success(());
        assert!(outcome.errors().is_empty());
    }
}
